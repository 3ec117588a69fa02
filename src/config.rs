//! Configuration and constants.
//!
//! The only external input is the `PORT` environment variable; the cache and
//! database targets are fixed literals. Everything is collected into
//! `AppConfig` so the entrypoint hands one context object to the rest of the
//! application instead of relying on ambient globals.

use const_format::formatcp;

// =============================================================================
// HTTP Response Cache Control
// =============================================================================

/// Greeting payload never changes, let upstream caches hold it briefly
pub const HTTP_CACHE_GREETING_MAX_AGE: u32 = 60;
pub const HTTP_CACHE_GREETING_SWR: u32 = 30;

pub const CACHE_CONTROL_GREETING: &str = formatcp!(
    "public, max-age={}, stale-while-revalidate={}",
    HTTP_CACHE_GREETING_MAX_AGE,
    HTTP_CACHE_GREETING_SWR
);

/// Health probes must always reach the live process
pub const CACHE_CONTROL_HEALTH: &str = "no-store";

// =============================================================================
// Defaults
// =============================================================================

/// Environment variable holding the listener port
pub const PORT_ENV_VAR: &str = "PORT";

/// Listener port used when `PORT` is unset or not numeric
pub const DEFAULT_PORT: u16 = 8000;

/// Cache store address
pub const DEFAULT_CACHE_URL: &str = "redis://localhost:6379";

/// Relational database target
pub const DEFAULT_DB_HOST: &str = "localhost";
pub const DEFAULT_DB_PORT: u16 = 5431;
pub const DEFAULT_DB_NAME: &str = "postgres";
pub const DEFAULT_DB_USER: &str = "postgres";
pub const DEFAULT_DB_PASSWORD: &str = "postgres";

/// Default log filter when neither `--log-level` nor `RUST_LOG` is set
pub const DEFAULT_LOG_FILTER: &str = "hullo=debug";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP listener configuration
    pub http: HttpConfig,
    /// Cache store target (backed variant only)
    pub cache: CacheConfig,
    /// Relational database target (backed variant only)
    pub database: DatabaseConfig,
}

/// HTTP listener configuration
#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub port: u16,
}

/// Cache store target
#[derive(Debug, Clone)]
pub struct CacheConfig {
    pub url: String,
}

/// Relational database target and credentials
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub dbname: String,
    pub user: String,
    pub password: String,
}

impl AppConfig {
    /// Build the configuration from the process environment.
    ///
    /// Only the listener port is environment-sourced; the backend targets are
    /// fixed literals.
    pub fn from_env() -> Self {
        Self {
            http: HttpConfig {
                port: resolve_port(std::env::var(PORT_ENV_VAR).ok().as_deref()),
            },
            cache: CacheConfig {
                url: DEFAULT_CACHE_URL.to_string(),
            },
            database: DatabaseConfig {
                host: DEFAULT_DB_HOST.to_string(),
                port: DEFAULT_DB_PORT,
                dbname: DEFAULT_DB_NAME.to_string(),
                user: DEFAULT_DB_USER.to_string(),
                password: DEFAULT_DB_PASSWORD.to_string(),
            },
        }
    }
}

/// Parse a raw `PORT` value, falling back to the default when the variable is
/// unset or does not parse as a port number.
fn resolve_port(raw: Option<&str>) -> u16 {
    raw.and_then(|s| s.trim().parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_port_unset_uses_default() {
        assert_eq!(resolve_port(None), DEFAULT_PORT);
    }

    #[test]
    fn resolve_port_numeric() {
        assert_eq!(resolve_port(Some("9090")), 9090);
    }

    #[test]
    fn resolve_port_non_numeric_uses_default() {
        assert_eq!(resolve_port(Some("not-a-port")), DEFAULT_PORT);
        assert_eq!(resolve_port(Some("")), DEFAULT_PORT);
    }

    #[test]
    fn resolve_port_out_of_range_uses_default() {
        assert_eq!(resolve_port(Some("70000")), DEFAULT_PORT);
        assert_eq!(resolve_port(Some("-1")), DEFAULT_PORT);
    }

    #[test]
    fn from_env_carries_fixed_backend_targets() {
        let config = AppConfig::from_env();
        assert_eq!(config.cache.url, DEFAULT_CACHE_URL);
        assert_eq!(config.database.host, DEFAULT_DB_HOST);
        assert_eq!(config.database.port, DEFAULT_DB_PORT);
        assert_eq!(config.database.dbname, DEFAULT_DB_NAME);
    }
}
