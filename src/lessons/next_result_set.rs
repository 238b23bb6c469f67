//! Several result sets from one batch.

use crate::db;
use crate::error::{TourError, TourResult};
use crate::lessons::format::format_as_table;
use crate::models::ResultSet;
use sqlx::SqlitePool;
use tracing::info;

pub const BATCH: &str =
    "SELECT ArtistId, Name FROM artists LIMIT 2;SELECT TrackId, Name FROM tracks LIMIT 2;";

/// Run both statements of the batch and print each result set as a table.
pub async fn run(pool: &SqlitePool) -> TourResult<Vec<ResultSet>> {
    let sets = db::map_result_sets(pool, BATCH).await?;
    if sets.len() < 2 {
        return Err(TourError::MissingResultSet { found: sets.len() });
    }

    for (idx, set) in sets.iter().enumerate() {
        info!("result set {}:\n{}", idx + 1, format_as_table(set));
    }

    Ok(sets)
}
