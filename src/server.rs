//! Listener bind and serve loop, plus the startup sequencing for both
//! variants.
//!
//! Startup order is fixed: external connections (backed variant only), then
//! listener bind, then the readiness log. A failure at any step propagates
//! as a `StartupError` without the listener ever binding.

use std::net::{Ipv4Addr, SocketAddr};

use axum::Router;
use tokio::net::TcpListener;

use crate::bootstrap;
use crate::config::AppConfig;
use crate::error::StartupError;
use crate::routes::create_router;
use crate::state::AppState;

/// Run the plain variant: no external connections, straight to the listener.
pub async fn run(config: AppConfig) -> Result<(), StartupError> {
    let state = AppState::new(config.clone(), None);
    serve(create_router(state), &config).await
}

/// Run the backed variant: cache store first, then database, then listener.
pub async fn run_backed(config: AppConfig) -> Result<(), StartupError> {
    let backends = bootstrap::connect_backends(&config).await?;
    let state = AppState::new(config.clone(), Some(backends));
    serve(create_router(state), &config).await
}

/// Bind the listener, log readiness, and serve until shutdown.
async fn serve(app: Router, config: &AppConfig) -> Result<(), StartupError> {
    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, config.http.port));

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })?;

    tracing::info!(port = config.http.port, "listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(StartupError::Serve)
}

/// Resolves when Ctrl+C or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
