//! Startup error taxonomy.
//!
//! Connection-establishment and listener-bind failures are distinct variants
//! so the operator log can tell them apart; `code` attaches a stable
//! machine-readable tag to each.

use std::io;
use std::net::SocketAddr;

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("cache store connection failed: {0}")]
    Cache(#[from] redis::RedisError),

    #[error("database pool setup failed: {0}")]
    DatabaseSetup(#[from] deadpool_postgres::CreatePoolError),

    #[error("database connection failed: {0}")]
    Database(#[from] deadpool_postgres::PoolError),

    #[error("failed to bind listener on {addr}: {source}")]
    Bind { addr: SocketAddr, source: io::Error },

    #[error("server error: {0}")]
    Serve(#[source] io::Error),
}

impl StartupError {
    /// Stable code attached to the startup failure log line.
    pub fn code(&self) -> &'static str {
        match self {
            StartupError::Cache(_) => "cache_connect",
            StartupError::DatabaseSetup(_) | StartupError::Database(_) => "db_connect",
            StartupError::Bind { .. } => "listener_bind",
            StartupError::Serve(_) => "serve",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_distinguish_failure_kinds() {
        let bind = StartupError::Bind {
            addr: "0.0.0.0:8000".parse().unwrap(),
            source: io::Error::from(io::ErrorKind::AddrInUse),
        };
        assert_eq!(bind.code(), "listener_bind");

        let cache = StartupError::Cache(redis::RedisError::from(io::Error::from(
            io::ErrorKind::ConnectionRefused,
        )));
        assert_eq!(cache.code(), "cache_connect");

        let serve = StartupError::Serve(io::Error::from(io::ErrorKind::BrokenPipe));
        assert_eq!(serve.code(), "serve");
    }

    #[test]
    fn bind_error_reports_address() {
        let err = StartupError::Bind {
            addr: "0.0.0.0:8000".parse().unwrap(),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert!(err.to_string().contains("0.0.0.0:8000"));
    }
}
