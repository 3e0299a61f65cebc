//! Startup orchestration.
//!
//! # Responsibilities
//! - Validate configuration
//! - Build the middleware and HTTP server
//! - Bind the listener and serve until shutdown
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Listener binds last (traffic only when ready)

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::{validate_config, ServerConfig, ValidationError};
use crate::http::middleware::MiddlewareError;
use crate::http::HttpServer;
use crate::lifecycle::shutdown::Shutdown;

/// Errors that stop the server from starting.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {}", join(.0))]
    Config(Vec<ValidationError>),

    #[error("failed to build middleware: {0}")]
    Middleware(#[from] MiddlewareError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Validate `config`, bind its listener and serve until `shutdown` fires.
pub async fn start(config: ServerConfig, shutdown: &Shutdown) -> Result<(), StartupError> {
    validate_config(&config).map_err(StartupError::Config)?;

    let server = HttpServer::new(config)?;

    let listener = TcpListener::bind(&server.config().listener.bind_address).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        "Listening for connections"
    );

    server.run(listener, shutdown.subscribe()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_config_is_fatal() {
        let shutdown = Shutdown::new();
        let err = start(ServerConfig::default(), &shutdown).await.unwrap_err();
        assert!(matches!(err, StartupError::Config(_)));
        assert!(err.to_string().contains("pathPattern"));
    }
}
