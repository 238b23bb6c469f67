//! Remove the rows written by the exec and transaction lessons.

use crate::error::{OpContext, TourResult};
use crate::lessons::TEST_IDS;
use sqlx::SqlitePool;
use tracing::info;

pub const DELETE_TEST_ARTISTS: &str = "DELETE FROM artists WHERE ArtistId BETWEEN ? AND ?";

pub async fn run(pool: &SqlitePool) -> TourResult<u64> {
    let removed = sqlx::query(DELETE_TEST_ARTISTS)
        .bind(*TEST_IDS.start())
        .bind(*TEST_IDS.end())
        .execute(pool)
        .await
        .op("db.exec")?
        .rows_affected();

    info!("removed {removed} test rows");
    Ok(removed)
}
