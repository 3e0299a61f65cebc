//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router for the echo handler
//! - Wire up middleware (tracing, timeout, request ID, path-param headers)
//! - Bind server to listener
//! - Stop on the shutdown signal

use axum::{routing::any, Router};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::http::echo::{echo_handler, EchoState};
use crate::http::middleware::{MiddlewareError, PathParamHeadersLayer};
use crate::http::request::{MakeRequestUuidV4, X_REQUEST_ID};

/// HTTP server hosting the echo handler behind the path-param middleware.
pub struct HttpServer {
    router: Router,
    config: ServerConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    ///
    /// Fails if the middleware cannot be built from `config.middleware`.
    pub fn new(config: ServerConfig) -> Result<Self, MiddlewareError> {
        let path_params = PathParamHeadersLayer::new(&config.middleware)?;
        let router = Self::build_router(&config, path_params);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServerConfig, path_params: PathParamHeadersLayer) -> Router {
        let state = EchoState::new(config.echo_prefix());

        Router::new()
            .route("/{*path}", any(echo_handler))
            .route("/", any(echo_handler))
            .with_state(state)
            .layer(path_params)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuidV4))
            .layer(TraceLayer::new_for_http())
    }

    /// The fully layered router, for serving elsewhere or driving in tests.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener until a
    /// shutdown signal arrives.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            path_pattern = %self.config.middleware.path_pattern,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}
