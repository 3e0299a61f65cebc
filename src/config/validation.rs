//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the path pattern compiles into a usable matcher
//! - Validate value ranges (timeouts > 0, bind address parses)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServerConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system
//! - Silent: the middleware is built, and logs, only once at startup

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::ServerConfig;
use crate::http::middleware::path_params::PathParamHeaders;

/// A single semantic problem with a configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("middleware.pathPattern cannot be empty")]
    EmptyPathPattern,

    #[error("middleware: {0}")]
    Middleware(String),

    #[error("listener.bind_address '{0}' is not a socket address")]
    InvalidBindAddress(String),

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroRequestTimeout,
}

/// Check a configuration, collecting every problem found.
pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.middleware.path_pattern.is_empty() {
        errors.push(ValidationError::EmptyPathPattern);
    } else if let Err(e) = PathParamHeaders::check(&config.middleware) {
        errors.push(ValidationError::Middleware(e.to_string()));
    }

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ServerConfig {
        let mut config = ServerConfig::default();
        config.middleware.path_pattern = "/products/{category}/{id}".into();
        config
    }

    #[test]
    fn test_valid_config() {
        assert!(validate_config(&valid()).is_ok());
    }

    #[test]
    fn test_default_config_needs_pattern() {
        let errors = validate_config(&ServerConfig::default()).unwrap_err();
        assert_eq!(errors, vec![ValidationError::EmptyPathPattern]);
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = ServerConfig::default();
        config.listener.bind_address = "not-an-addr".into();
        config.timeouts.request_secs = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::EmptyPathPattern,
                ValidationError::InvalidBindAddress("not-an-addr".into()),
                ValidationError::ZeroRequestTimeout,
            ]
        );
    }

    #[test]
    fn test_bad_template_reported() {
        let mut config = valid();
        config.middleware.path_pattern = "/{id}/{id}".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], ValidationError::Middleware(ref msg) if msg.contains("'id'")));
    }

    #[test]
    fn test_validation_logs_nothing() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;
        use tracing::{Event, Level, Subscriber};
        use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

        struct CountEvents(Arc<AtomicUsize>);

        impl<S: Subscriber> Layer<S> for CountEvents {
            fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
                if *event.metadata().level() <= Level::INFO {
                    self.0.fetch_add(1, Ordering::SeqCst);
                }
            }
        }

        let events = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(CountEvents(events.clone()));

        // Colliding header names would warn if the middleware were built here.
        let mut config = valid();
        config.middleware.path_pattern = "/{userId}/{userid}".into();
        let result = tracing::subscriber::with_default(subscriber, || validate_config(&config));

        assert!(result.is_ok());
        assert_eq!(events.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_bad_prefix_reported() {
        let mut config = valid();
        config.middleware.header_prefix = "X Path:".into();
        assert!(matches!(
            validate_config(&config).unwrap_err()[0],
            ValidationError::Middleware(_)
        ));
    }
}
