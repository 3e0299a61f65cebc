//! Path-param header injection middleware.
//!
//! Matches each request path against a configured template and, on a match,
//! sets one `{prefix}{Name}` header per template parameter before handing the
//! request to the next service. Requests that don't match pass through
//! untouched: the middleware never rejects and never alters the response.
//!
//! ```text
//! Request ──▶ match path ──┬─ Some(params) ─▶ set headers ─┬─▶ next
//!                          └─ None ────────────────────────┘
//! ```

use std::sync::Arc;
use std::task::{Context, Poll};

use axum::http::Request;
use thiserror::Error;
use tower::{Layer, Service};

use crate::config::MiddlewareConfig;
use crate::headers::HeaderMapper;
use crate::template::{CompiledMatcher, TemplateError};

/// Errors raised while building the middleware. Never raised per request.
#[derive(Debug, Error)]
pub enum MiddlewareError {
    #[error("pathPattern cannot be empty")]
    EmptyPathPattern,

    #[error(transparent)]
    Template(#[from] TemplateError),
}

/// Configuration with defaults applied: no pattern, `X-Path-` prefix.
pub fn create_config() -> MiddlewareConfig {
    MiddlewareConfig::default()
}

/// Build the middleware around `next`.
///
/// Plain factory for pipeline assemblers that don't use `tower::Layer`.
pub fn new_middleware<S>(
    config: &MiddlewareConfig,
    next: S,
) -> Result<PathParamHeadersService<S>, MiddlewareError> {
    Ok(PathParamHeadersLayer::new(config)?.layer(next))
}

/// Compiled template plus derived header names. Immutable after construction.
#[derive(Debug)]
pub struct PathParamHeaders {
    matcher: CompiledMatcher,
    mapper: HeaderMapper,
}

impl PathParamHeaders {
    pub fn new(config: &MiddlewareConfig) -> Result<Self, MiddlewareError> {
        if config.path_pattern.is_empty() {
            return Err(MiddlewareError::EmptyPathPattern);
        }

        let matcher = CompiledMatcher::compile(&config.path_pattern)?;
        let mapper = HeaderMapper::new(config.header_prefix.clone(), matcher.params())?;

        tracing::info!(
            path_pattern = %config.path_pattern,
            pattern = %matcher.pattern(),
            header_prefix = %config.header_prefix,
            params = ?matcher.params(),
            "Path-param header middleware ready"
        );

        Ok(Self { matcher, mapper })
    }

    /// Report whether `config` would build, without logging anything.
    pub fn check(config: &MiddlewareConfig) -> Result<(), MiddlewareError> {
        if config.path_pattern.is_empty() {
            return Err(MiddlewareError::EmptyPathPattern);
        }

        let matcher = CompiledMatcher::compile(&config.path_pattern)?;
        HeaderMapper::check(&config.header_prefix, matcher.params())?;
        Ok(())
    }

    pub fn matcher(&self) -> &CompiledMatcher {
        &self.matcher
    }

    pub fn mapper(&self) -> &HeaderMapper {
        &self.mapper
    }

    /// Inject headers for `req` if its path matches. Returns true on a match.
    pub fn inject<B>(&self, req: &mut Request<B>) -> bool {
        let Some(params) = self.matcher.match_path(req.uri().path()) else {
            tracing::trace!(path = %req.uri().path(), "Path does not match template");
            return false;
        };

        let injected = self.mapper.apply(&params, req.headers_mut());
        tracing::debug!(
            path = %req.uri().path(),
            headers = injected,
            "Injected path-param headers"
        );
        true
    }
}

/// [`Layer`] applying [`PathParamHeadersService`].
#[derive(Debug, Clone)]
pub struct PathParamHeadersLayer {
    state: Arc<PathParamHeaders>,
}

impl PathParamHeadersLayer {
    pub fn new(config: &MiddlewareConfig) -> Result<Self, MiddlewareError> {
        Ok(Self {
            state: Arc::new(PathParamHeaders::new(config)?),
        })
    }
}

impl<S> Layer<S> for PathParamHeadersLayer {
    type Service = PathParamHeadersService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        PathParamHeadersService {
            inner,
            state: self.state.clone(),
        }
    }
}

/// Middleware service: injects headers, then always calls `inner`.
#[derive(Debug, Clone)]
pub struct PathParamHeadersService<S> {
    inner: S,
    state: Arc<PathParamHeaders>,
}

impl<S, B> Service<Request<B>> for PathParamHeadersService<S>
where
    S: Service<Request<B>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<B>) -> Self::Future {
        self.state.inject(&mut req);
        self.inner.call(req)
    }
}
