//! Shared application state for request handlers.

use std::sync::Arc;

use crate::bootstrap::Backends;
use crate::config::AppConfig;

/// Shared application state, cloneable across handlers.
///
/// The plain variant runs with `backends: None`; the backed variant parks the
/// cache and database handles here for the process lifetime. No handler
/// consults either field today.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub backends: Option<Backends>,
}

impl AppState {
    /// Creates a new application state from the given configuration and
    /// optional backend handles.
    pub fn new(config: AppConfig, backends: Option<Backends>) -> Self {
        Self {
            config: Arc::new(config),
            backends,
        }
    }
}
