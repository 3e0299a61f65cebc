//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events)
//!
//! Consumers:
//!     → stdout (pretty for development, JSON for log aggregation)
//! ```
//!
//! # Design Decisions
//! - Structured logging with request IDs as fields
//! - No-match is a normal outcome, logged at trace, never as a failure

pub mod logging;

pub use logging::init_logging;
