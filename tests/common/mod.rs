//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::time::Duration;

use user_directory::config::ServiceConfig;
use user_directory::{HttpServer, Shutdown};

/// Start the service on `addr` with the given config tweaks applied.
///
/// The returned [`Shutdown`] must be kept alive for the server to keep running.
pub async fn start_service<F>(addr: SocketAddr, configure: F) -> Shutdown
where
    F: FnOnce(&mut ServiceConfig),
{
    let mut config = ServiceConfig::default();
    config.listener.bind_address = addr.to_string();
    configure(&mut config);

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    // Wait for server to start
    tokio::time::sleep(Duration::from_millis(200)).await;
    shutdown
}

/// A client that never reuses pooled connections across tests.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
