//! Entry point for the backed greeting server.
//!
//! Identical HTTP surface to the plain binary, but the cache store and the
//! database are connected, in that order, before the listener binds.
//! Startup failure at any step is logged and absorbed: the process stays
//! alive without serving until restarted externally.

use clap::Parser;

use hullo::config::AppConfig;
use hullo::server;
use hullo::telemetry;

/// Greeting HTTP service with cache store and database bring-up
#[derive(Parser, Debug)]
#[command(name = "hullo-backed", version, about)]
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
    tracing::info!(
        port = config.http.port,
        cache = %config.cache.url,
        database = %config.database.host,
        "loaded configuration"
    );

    if let Err(err) = server::run_backed(config).await {
        tracing::error!(code = err.code(), error = %err, "startup failed, serving no traffic");
        // Absorbing failure state: no retry, no exit; recovery is an
        // external restart.
        std::future::pending::<()>().await;
    }
}
