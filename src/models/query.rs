//! Query-related data models.
//!
//! This module defines the shapes lessons return: schema-agnostic rows,
//! result sets of a batch, column metadata and write summaries.

use serde::Serialize;
use serde_json::Value as JsonValue;

/// A row keyed by column name.
///
/// Key order is not the SELECT order; use [`ResultSet::columns`] for that.
pub type RowMap = serde_json::Map<String, JsonValue>;

/// One result set produced by a statement of a multi-statement batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResultSet {
    /// Column names in SELECT order. Empty when the statement produced no rows.
    pub columns: Vec<String>,
    pub rows: Vec<RowMap>,
}

impl ResultSet {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnMetadata {
    pub name: String,
    /// Position in the SELECT list, starting at 0.
    pub ordinal: usize,
    /// Declared SQLite type after affinity mapping (e.g. "INTEGER", "TEXT").
    pub type_name: String,
    /// None when the driver does not report a length.
    pub length: Option<u64>,
    /// None when the driver cannot infer nullability (e.g. expressions).
    pub nullable: Option<bool>,
    /// Rust type a value of this column decodes into.
    pub scan_type: String,
}

impl ColumnMetadata {
    /// Create new column metadata with length and nullability unknown.
    pub fn new(
        name: impl Into<String>,
        ordinal: usize,
        type_name: impl Into<String>,
        scan_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ordinal,
            type_name: type_name.into(),
            length: None,
            nullable: None,
            scan_type: scan_type.into(),
        }
    }
}

/// Outcome of a mutating statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExecSummary {
    pub last_insert_id: i64,
    pub rows_affected: u64,
}

impl From<sqlx::sqlite::SqliteQueryResult> for ExecSummary {
    fn from(result: sqlx::sqlite::SqliteQueryResult) -> Self {
        Self {
            last_insert_id: result.last_insert_rowid(),
            rows_affected: result.rows_affected(),
        }
    }
}
