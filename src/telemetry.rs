//! Tracing bootstrap shared by both binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::DEFAULT_LOG_FILTER;

/// Initialize the global tracing subscriber.
///
/// Filter priority: CLI flag > `RUST_LOG` > built-in default.
pub fn init(cli_filter: Option<String>) {
    let filter = cli_filter
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&filter))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
