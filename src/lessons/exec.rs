//! Single write statement.

use crate::error::{OpContext, TourResult};
use crate::lessons::INSERT_ARTIST;
use crate::models::ExecSummary;
use sqlx::SqlitePool;
use tracing::info;

pub const TEST_ARTIST_ID: i64 = 999;

/// Insert the test artist and report the driver's write summary.
///
/// Running it twice fails on the primary key until `cleanup` removes the row.
pub async fn run(pool: &SqlitePool) -> TourResult<ExecSummary> {
    let summary: ExecSummary = sqlx::query(INSERT_ARTIST)
        .bind(TEST_ARTIST_ID)
        .bind("test")
        .execute(pool)
        .await
        .op("db.exec")?
        .into();

    info!(
        "LastInsertId: {}\tRowsAffected: {}",
        summary.last_insert_id, summary.rows_affected
    );
    Ok(summary)
}
