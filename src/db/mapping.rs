//! Schema-agnostic row mapping.
//!
//! Turns rows into `RowMap`s without knowing the query's shape up front:
//! the column names are read once, then every row is decoded slot by slot
//! and keyed by those names.

use crate::db::types::decode_value;
use crate::error::{OpContext, TourResult};
use crate::models::{ResultSet, RowMap};
use futures_util::TryStreamExt;
use sqlx::sqlite::{Sqlite, SqliteRow};
use sqlx::{Column, Executor, Row};
use tracing::debug;

/// Column names of a row, in SELECT order.
pub fn row_columns(row: &SqliteRow) -> Vec<String> {
    row.columns()
        .iter()
        .map(|col| col.name().to_string())
        .collect()
}

/// Map one row onto `columns`.
///
/// `columns` must come from the same statement as `row`.
pub fn map_row(columns: &[String], row: &SqliteRow) -> TourResult<RowMap> {
    let mut slots = Vec::with_capacity(columns.len());
    for idx in 0..columns.len() {
        slots.push(decode_value(row, idx)?);
    }
    Ok(columns.iter().cloned().zip(slots).collect())
}

/// Run `sql` and map every row it returns.
pub async fn map_rows<'e, E>(executor: E, sql: &'e str) -> TourResult<Vec<RowMap>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let mut rows = executor.fetch(sql);
    let mut columns: Option<Vec<String>> = None;
    let mut results = Vec::new();

    while let Some(row) = rows.try_next().await.op("rows.next")? {
        let columns = columns.get_or_insert_with(|| row_columns(&row));
        results.push(map_row(columns, &row)?);
    }

    debug!(sql = %sql, row_count = results.len(), "Mapped rows");
    Ok(results)
}

/// Run a batch of `;`-separated statements and map each statement's rows into
/// its own result set.
///
/// The driver marks the end of every statement, so a statement that returns
/// no rows still yields an (empty) result set.
pub async fn map_result_sets<'e, E>(executor: E, sql: &'e str) -> TourResult<Vec<ResultSet>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let mut steps = executor.fetch_many(sql);
    let mut sets = Vec::new();
    let mut current = ResultSet::default();

    while let Some(step) = steps.try_next().await.op("rows.next")? {
        match step.right() {
            Some(row) => {
                if current.columns.is_empty() {
                    current.columns = row_columns(&row);
                }
                let mapped = map_row(&current.columns, &row)?;
                current.rows.push(mapped);
            }
            // statement finished
            None => sets.push(std::mem::take(&mut current)),
        }
    }

    if !current.rows.is_empty() {
        sets.push(current);
    }

    debug!(result_sets = sets.len(), "Mapped batch");
    Ok(sets)
}
