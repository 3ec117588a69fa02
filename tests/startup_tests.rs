//! Startup sequencing tests using real sockets.
//!
//! Covers the listener binding on the configured port, bind failure
//! reporting, and the backed variant's behavior when the cache store is
//! unreachable: the error is the cache variant and the HTTP port never
//! opens.

use std::net::TcpListener as StdTcpListener;
use std::time::Duration;

use tokio::net::TcpStream;
use tokio::time::sleep;

use hullo::config::AppConfig;
use hullo::error::StartupError;
use hullo::server;

/// Reserve a port by binding and immediately dropping a listener.
fn free_port() -> u16 {
    let listener = StdTcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn config_on_port(port: u16) -> AppConfig {
    let mut config = AppConfig::from_env();
    config.http.port = port;
    config
}

#[tokio::test]
async fn listener_binds_on_configured_port() {
    let port = free_port();
    let server = tokio::spawn(server::run(config_on_port(port)));

    let mut connected = false;
    for _ in 0..50 {
        if TcpStream::connect(("127.0.0.1", port)).await.is_ok() {
            connected = true;
            break;
        }
        sleep(Duration::from_millis(20)).await;
    }
    assert!(connected, "server did not accept on port {port}");

    server.abort();
}

#[tokio::test]
async fn bind_failure_is_reported_distinctly() {
    // Hold the port open so the server's wildcard bind collides.
    let holder = StdTcpListener::bind("0.0.0.0:0").unwrap();
    let port = holder.local_addr().unwrap().port();

    let err = server::run(config_on_port(port)).await.unwrap_err();
    assert!(matches!(err, StartupError::Bind { .. }));
    assert_eq!(err.code(), "listener_bind");
}

#[tokio::test]
async fn unreachable_cache_store_prevents_listener_bind() {
    let http_port = free_port();
    let cache_port = free_port();

    let mut config = config_on_port(http_port);
    config.cache.url = format!("redis://127.0.0.1:{cache_port}");

    let err = server::run_backed(config).await.unwrap_err();

    // The cache connect runs first, so the failure is the cache variant and
    // the database was never attempted.
    assert!(matches!(err, StartupError::Cache(_)));
    assert_eq!(err.code(), "cache_connect");

    // The listener never bound.
    assert!(TcpStream::connect(("127.0.0.1", http_port)).await.is_err());
}
