//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::time::Duration;

use path_param_headers::config::ServerConfig;
use path_param_headers::{HttpServer, Shutdown};
use tokio::net::TcpListener;

/// Server config with `pattern` and an ephemeral loopback port.
#[allow(dead_code)]
pub fn config_for(pattern: &str) -> ServerConfig {
    let mut config = ServerConfig::default();
    config.listener.bind_address = "127.0.0.1:0".to_string();
    config.middleware.path_pattern = pattern.to_string();
    config
}

/// Start the echo server for `config` on an ephemeral port.
#[allow(dead_code)]
pub async fn start_echo_server(config: ServerConfig) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind(&config.listener.bind_address).await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = HttpServer::new(config).unwrap();
    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    // Give the accept loop a moment to start.
    tokio::time::sleep(Duration::from_millis(50)).await;
    (addr, shutdown)
}

/// Client that never reuses or proxies connections.
#[allow(dead_code)]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
