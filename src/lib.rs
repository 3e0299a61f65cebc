//! Path-param header injection.
//!
//! Extracts named segments from request paths using a template such as
//! `/products/{category}/{id}` and injects them into the request as headers
//! (`X-Path-Category`, `X-Path-Id`) before the next handler runs.

pub mod config;
pub mod headers;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod template;

pub use config::{MiddlewareConfig, ServerConfig};
pub use http::middleware::{
    create_config, new_middleware, MiddlewareError, PathParamHeaders, PathParamHeadersLayer,
    PathParamHeadersService,
};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use template::{CompiledMatcher, PathParams, PathTemplate, TemplateError};
