//! Result-set column introspection.
//!
//! Neither function fetches a row; both read what the driver knows about the
//! statement, so they also work on empty tables.

use crate::db::types::{categorize_type, scan_type};
use crate::error::{OpContext, TourResult};
use crate::models::ColumnMetadata;
use sqlx::sqlite::Sqlite;
use sqlx::{Column, Executor, Statement, TypeInfo};

/// Column names of `sql`'s result set, in SELECT order.
pub async fn column_names<'e, E>(executor: E, sql: &'e str) -> TourResult<Vec<String>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let statement = executor.prepare(sql).await.op("db.prepare")?;
    Ok(statement
        .columns()
        .iter()
        .map(|col| col.name().to_string())
        .collect())
}

/// Column descriptions of `sql`'s result set, in SELECT order.
///
/// Nullability comes from the driver's statement description. SQLite has no
/// declared lengths, so `length` stays `None`.
pub async fn column_types<'e, E>(executor: E, sql: &'e str) -> TourResult<Vec<ColumnMetadata>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let described = executor.describe(sql).await.op("db.describe")?;
    Ok(described
        .columns()
        .iter()
        .enumerate()
        .map(|(idx, col)| {
            let type_name = col.type_info().name();
            let mut meta = ColumnMetadata::new(
                col.name(),
                col.ordinal(),
                type_name,
                scan_type(categorize_type(type_name)),
            );
            meta.nullable = described.nullable(idx);
            meta
        })
        .collect())
}
