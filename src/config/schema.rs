//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the demo
//! server and the path-param middleware it hosts. All types derive Serde
//! traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::headers::DEFAULT_HEADER_PREFIX;

/// Root configuration for the demo server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Path-param middleware settings.
    pub middleware: MiddlewareConfig,

    /// Echo handler settings.
    pub echo: EchoConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8000".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

/// Path-param middleware configuration.
///
/// Keys are camelCase so the same document works for any pipeline assembler
/// that already speaks `pathPattern` / `headerPrefix`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct MiddlewareConfig {
    /// Path template with `{name}` placeholders, e.g. "/products/{category}/{id}".
    pub path_pattern: String,

    /// Prefix for derived header names; "X-Path-" yields "X-Path-Category".
    pub header_prefix: String,
}

impl Default for MiddlewareConfig {
    fn default() -> Self {
        Self {
            path_pattern: String::new(),
            header_prefix: DEFAULT_HEADER_PREFIX.to_string(),
        }
    }
}

/// Echo handler configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct EchoConfig {
    /// Headers starting with this prefix are surfaced separately as path
    /// params. Falls back to the middleware header prefix when unset or empty.
    pub prefix_filter: Option<String>,
}

impl ServerConfig {
    /// The prefix the echo handler filters on.
    pub fn echo_prefix(&self) -> &str {
        self.echo
            .prefix_filter
            .as_deref()
            .filter(|prefix| !prefix.is_empty())
            .unwrap_or(&self.middleware.header_prefix)
    }
}
