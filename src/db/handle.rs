//! Database handle management.
//!
//! A handle is a `SqlitePool`: zero or more connections to one database file,
//! created and released by the pool on demand. Building the pool opens nothing;
//! the first ping is what actually connects (and, with `create_if_missing`,
//! creates the file).

use crate::config::DatabaseConfig;
use crate::error::{OpContext, TourResult};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Connection, SqlitePool};
use tracing::{debug, info, warn};

/// Driver name reported in logs.
pub const DRIVER: &str = "sqlite";

/// Build the pool for `config` and confirm that it can connect.
pub async fn open(config: &DatabaseConfig) -> TourResult<SqlitePool> {
    config.validate()?;

    let options = SqliteConnectOptions::new()
        .filename(&config.path)
        .create_if_missing(config.create_if_missing);

    debug!(
        datasource = %config.datasource(),
        max_connections = config.max_connections,
        acquire_timeout_secs = config.acquire_timeout.as_secs(),
        "Building connection pool"
    );

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect_lazy_with(options);

    ping(&pool).await?;

    if let Some(version) = sqlite_version(&pool).await {
        info!(version = %version, "Connected to SQLite");
    }

    Ok(pool)
}

/// Acquire a connection and check that it is alive.
pub async fn ping(pool: &SqlitePool) -> TourResult<()> {
    let mut conn = pool.acquire().await.op("db.ping")?;
    conn.ping().await.op("db.ping")
}

/// Library version of the SQLite engine behind the pool.
async fn sqlite_version(pool: &SqlitePool) -> Option<String> {
    match sqlx::query_scalar::<_, String>("SELECT sqlite_version()")
        .fetch_one(pool)
        .await
    {
        Ok(version) => Some(version),
        Err(e) => {
            warn!(error = %e, "Failed to get SQLite version");
            None
        }
    }
}
