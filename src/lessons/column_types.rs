//! Result-set column descriptions.

use crate::db;
use crate::error::TourResult;
use crate::lessons::columns::QUERY;
use crate::models::ColumnMetadata;
use sqlx::SqlitePool;
use tracing::info;

/// Describe every column of the tracks query, one log line per column.
///
/// `TYPE` is the driver's affinity name (`TEXT`, `NUMERIC`), not the declared
/// type (`NVARCHAR(200)`, `NUMERIC(10,2)`). Unknown lengths print as 0 and
/// unknown nullability as `NOTNULL=false`.
pub async fn run(pool: &SqlitePool) -> TourResult<Vec<ColumnMetadata>> {
    let columns = db::column_types(pool, QUERY).await?;

    for col in &columns {
        info!(
            "NAME={:<15}\tTYPE={:<20}\tLENGTH={:<10}\tNOTNULL={:<10}\tSCAN TYPE={}",
            col.name,
            col.type_name,
            col.length.unwrap_or(0),
            col.nullable.map(|nullable| !nullable).unwrap_or(false),
            col.scan_type
        );
    }

    Ok(columns)
}
