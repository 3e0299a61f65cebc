//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ServerConfig (validated, immutable)
//!     → MiddlewareConfig handed to the path-param middleware factory
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs, except the path
//!   pattern, which must be set before the middleware can be built
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, read_config, ConfigError};
pub use schema::{
    EchoConfig, ListenerConfig, LogFormat, MiddlewareConfig, ObservabilityConfig, ServerConfig,
    TimeoutConfig,
};
pub use validation::{validate_config, ValidationError};
