//! External connection bring-up for the backed variant.
//!
//! The cache store connects first, then the database; each step is awaited to
//! completion before the next begins, and the listener only binds after both
//! handles are live. There is no retry or timeout around either attempt.

use deadpool_postgres::{Config, ManagerConfig, Pool, RecyclingMethod, Runtime};
use redis::aio::MultiplexedConnection;
use tokio_postgres::NoTls;

use crate::config::{AppConfig, CacheConfig, DatabaseConfig};
use crate::error::StartupError;

/// Long-lived handles to the external services, held in the application
/// state for the process lifetime. Nothing reads them after startup; they
/// exist to be passed to whichever handler eventually needs them.
#[derive(Clone)]
pub struct Backends {
    pub cache: MultiplexedConnection,
    pub database: Pool,
}

/// Establish the cache connection, then the database connection.
pub async fn connect_backends(config: &AppConfig) -> Result<Backends, StartupError> {
    let cache = connect_cache(&config.cache).await?;
    let database = connect_database(&config.database).await?;
    Ok(Backends { cache, database })
}

async fn connect_cache(config: &CacheConfig) -> Result<MultiplexedConnection, StartupError> {
    tracing::info!(url = %config.url, "connecting to cache store");

    // Opening the client is lazy; the socket is opened by the awaited
    // connection request below.
    let client = redis::Client::open(config.url.as_str())?;
    let connection = client.get_multiplexed_async_connection().await?;

    tracing::info!("cache store connected");
    Ok(connection)
}

async fn connect_database(config: &DatabaseConfig) -> Result<Pool, StartupError> {
    tracing::info!(
        host = %config.host,
        port = config.port,
        dbname = %config.dbname,
        "connecting to database"
    );

    let mut cfg = Config::new();
    cfg.host = Some(config.host.clone());
    cfg.port = Some(config.port);
    cfg.dbname = Some(config.dbname.clone());
    cfg.user = Some(config.user.clone());
    cfg.password = Some(config.password.clone());
    cfg.manager = Some(ManagerConfig {
        recycling_method: RecyclingMethod::Fast,
    });

    let pool = cfg.create_pool(Some(Runtime::Tokio1), NoTls)?;

    // The pool connects on first checkout; take one session now so the
    // connect is awaited to completion before the listener binds. The
    // session returns to the pool on drop.
    let session = pool.get().await?;
    drop(session);

    tracing::info!("database connected");
    Ok(pool)
}
