//! Result-set column names.

use crate::db;
use crate::error::TourResult;
use sqlx::SqlitePool;
use tracing::info;

pub const QUERY: &str = "SELECT * FROM tracks LIMIT 1";

pub async fn run(pool: &SqlitePool) -> TourResult<Vec<String>> {
    let columns = db::column_names(pool, QUERY).await?;
    info!("[{}]", columns.join(" "));
    Ok(columns)
}
