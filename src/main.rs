//! Entry point for the plain greeting server.
//!
//! Initializes tracing, resolves the listener port from the environment, and
//! serves the two fixed routes. Startup failure is logged and absorbed: the
//! process stays alive without serving until restarted externally.

use clap::Parser;

use hullo::config::AppConfig;
use hullo::server;
use hullo::telemetry;

/// A minimal greeting HTTP service
#[derive(Parser, Debug)]
#[command(name = "hullo", version, about)]
struct Args {
    /// Log level filter (e.g., "hullo=debug")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    telemetry::init(args.log_level);

    let config = AppConfig::from_env();
    tracing::info!(port = config.http.port, "loaded configuration");

    if let Err(err) = server::run(config).await {
        tracing::error!(code = err.code(), error = %err, "startup failed, serving no traffic");
        // Absorbing failure state: no retry, no exit; recovery is an
        // external restart.
        std::future::pending::<()>().await;
    }
}
