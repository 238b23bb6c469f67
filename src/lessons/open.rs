//! Open the database handle.

use crate::config::DatabaseConfig;
use crate::db::{self, handle::DRIVER};
use crate::error::TourResult;
use sqlx::SqlitePool;
use tracing::info;

/// Open and ping the handle, then report the driver and data source.
pub async fn run(config: &DatabaseConfig) -> TourResult<SqlitePool> {
    let pool = db::open(config).await?;
    info!("Database Open: driver={}\tdatasource={}", DRIVER, config.datasource());
    Ok(pool)
}
