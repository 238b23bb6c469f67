//! Single-row query.

use crate::error::{OpContext, TourError, TourResult};
use crate::lessons::query::QUERY;
use crate::models::Artist;
use sqlx::SqlitePool;
use tracing::info;

/// Fetch the first artist of the query lesson's result.
///
/// An empty result is reported as [`TourError::NotFound`], distinct from
/// every other failure.
pub async fn run(pool: &SqlitePool) -> TourResult<Artist> {
    let artist = match sqlx::query_as::<_, Artist>(QUERY).fetch_one(pool).await {
        Err(source @ sqlx::Error::RowNotFound) => return Err(TourError::NotFound { source }),
        other => other.op("row.scan")?,
    };

    info!("{artist}");
    Ok(artist)
}
