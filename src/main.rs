//! Path-param header demo server.
//!
//! Serves an echo handler behind the path-param header middleware so the
//! injected headers can be observed end to end.
//!
//! ```text
//!     Client Request ──▶ trace ──▶ request id ──▶ timeout ──▶ path-param headers ──▶ echo
//!                                                              │
//!                                  template match? ── yes ──▶ set X-Path-* headers
//!                                                  └─ no ───▶ pass through untouched
//! ```

use std::path::PathBuf;

use clap::Parser;

use path_param_headers::config::{read_config, ServerConfig};
use path_param_headers::lifecycle::{signals, start, Shutdown};
use path_param_headers::observability::init_logging;

#[derive(Parser)]
#[command(name = "path-param-headers")]
#[command(about = "Echo server behind the path-param header middleware", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Path template, e.g. "/products/{category}/{id}". Overrides the file.
    #[arg(short, long)]
    pattern: Option<String>,

    /// Header prefix. Overrides the file.
    #[arg(long)]
    prefix: Option<String>,

    /// Bind address. Overrides the file.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => read_config(path)?,
        None => ServerConfig::default(),
    };
    if let Some(pattern) = cli.pattern {
        config.middleware.path_pattern = pattern;
    }
    if let Some(prefix) = cli.prefix {
        config.middleware.header_prefix = prefix;
    }
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    init_logging(&config.observability)?;

    tracing::info!(
        bind_address = %config.listener.bind_address,
        path_pattern = %config.middleware.path_pattern,
        header_prefix = %config.middleware.header_prefix,
        "Configuration loaded"
    );

    let shutdown = Shutdown::new();
    signals::spawn_signal_handler(shutdown.clone());

    start(config, &shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
