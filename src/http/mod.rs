//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, layer stack)
//!     → request.rs (add request ID)
//!     → middleware/path_params.rs (match path, inject headers, always forward)
//!     → echo.rs (describe the request as JSON)
//!     → Send to client
//! ```

pub mod echo;
pub mod middleware;
pub mod request;
pub mod server;

pub use echo::{echo_handler, EchoResponse, EchoState};
pub use middleware::{create_config, new_middleware, PathParamHeadersLayer};
pub use request::{MakeRequestUuidV4, RequestIdExt, X_REQUEST_ID};
pub use server::HttpServer;
