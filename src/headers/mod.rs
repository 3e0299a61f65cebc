//! Header derivation subsystem.
//!
//! # Data Flow
//! ```text
//! PathParams (name → value, template order)
//!     → mapper.rs (prefix + Capitalised name, raw value)
//!     → set on the request's HeaderMap (overwrite)
//! ```
//!
//! # Design Decisions
//! - Header names derived once at construction and validated there
//! - Only the first character of a parameter name changes case
//! - Values are copied verbatim

pub mod mapper;

pub use mapper::{header_name, map_to_headers, HeaderMapper, ParamHeader, DEFAULT_HEADER_PREFIX};
