//! Work on one dedicated connection.

use crate::error::{OpContext, TourError, TourResult};
use sqlx::{Connection, SqlitePool};
use std::time::Duration;
use tokio::time::timeout;
use tracing::info;

pub const QUERY: &str = "SELECT Name FROM artists";

/// Pin a single connection, ping it and read the first artist name through it.
///
/// An empty table is not an error: the name comes back as `None`. The
/// connection returns to the pool when it drops.
///
/// Running out of time while waiting for a connection is always reported as
/// [`TourError::Timeout`], whether `acquire_timeout` or the pool's own acquire
/// timeout expires first.
pub async fn run(pool: &SqlitePool, acquire_timeout: Duration) -> TourResult<Option<String>> {
    let timed_out = || TourError::timeout("pool.acquire", acquire_timeout.as_secs());
    let mut conn = match timeout(acquire_timeout, pool.acquire()).await {
        Err(_) | Ok(Err(sqlx::Error::PoolTimedOut)) => return Err(timed_out()),
        Ok(acquired) => acquired.op("pool.acquire")?,
    };

    conn.ping().await.op("conn.ping")?;

    let name = sqlx::query_scalar::<_, Option<String>>(QUERY)
        .fetch_optional(&mut *conn)
        .await
        .op("conn.query_row")?
        .flatten();

    info!("{}", name.as_deref().unwrap_or_default());
    Ok(name)
}
