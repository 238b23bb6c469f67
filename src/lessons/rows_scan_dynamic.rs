//! Rows mapped without a fixed shape.

use crate::db;
use crate::error::TourResult;
use crate::lessons::format::format_row;
use crate::lessons::query::QUERY;
use crate::models::RowMap;
use sqlx::SqlitePool;
use tracing::info;

pub async fn run(pool: &SqlitePool) -> TourResult<Vec<RowMap>> {
    let rows = db::map_rows(pool, QUERY).await?;
    for row in &rows {
        info!("{}", format_row(row));
    }
    Ok(rows)
}
