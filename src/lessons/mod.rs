//! Lessons of the tour.
//!
//! Each lesson is independent and shows one client primitive:
//! - `open`: acquire the handle and ping it
//! - `query`: iterate a multi-row query, binding columns by position
//! - `query_row`: fetch a single row, with a distinct "not found" error
//! - `exec`: run an INSERT and read back the row id and affected count
//! - `transaction`: stage several inserts and commit them together
//! - `prepared_query`: share one prepared statement between concurrent callers
//! - `prepared_query_in_tx`: prepare a statement on a transaction's connection
//! - `conn`: pin one connection from the pool
//! - `columns` / `column_types`: introspect a result set's columns
//! - `next_result_set`: read several result sets from one batch
//! - `rows_scan_dynamic`: map rows without knowing their shape
//! - `cleanup`: remove the rows the write lessons inserted

pub mod cleanup;
pub mod column_types;
pub mod columns;
pub mod conn;
pub mod exec;
pub mod format;
pub mod next_result_set;
pub mod open;
pub mod prepared_query;
pub mod prepared_query_in_tx;
pub mod query;
pub mod query_row;
pub mod rows_scan_dynamic;
pub mod transaction;

use crate::config::DatabaseConfig;
use crate::db;
use crate::error::TourResult;
use clap::Subcommand;
use std::ops::RangeInclusive;
use tracing::debug;

/// Insert used by every lesson that writes to `artists`.
pub const INSERT_ARTIST: &str = "INSERT INTO artists (ArtistId, Name) VALUES (?, ?)";

/// Ids the transaction lessons insert and `cleanup` removes.
pub const TEST_IDS: RangeInclusive<i64> = 990..=999;

/// Name given to the test artist with `id`.
pub fn test_name(id: i64) -> String {
    format!("test{id}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Lesson {
    /// Open the database handle and check that it is alive
    Open,
    /// Print the five highest-numbered artists
    Query,
    /// Print the highest-numbered artist
    QueryRow,
    /// Insert artist 999 and print its id and the affected row count
    Exec,
    /// Insert artists 990..=999 in one transaction
    Transaction,
    /// Look up artists 1..=10 concurrently through one prepared statement
    PreparedQuery,
    /// Insert artists 990..=999 through a statement prepared inside a transaction
    PreparedQueryInTx,
    /// Query through a single dedicated connection
    Conn,
    /// Print the column names of the tracks table
    Columns,
    /// Print the column types of the tracks table
    ColumnTypes,
    /// Read two result sets from one batch
    NextResultSet,
    /// Map artist rows into name-keyed maps
    RowsScanDynamic,
    /// Delete the test artists inserted by the write lessons
    Cleanup,
}

impl Lesson {
    /// Subcommand name of the lesson.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Query => "query",
            Self::QueryRow => "query-row",
            Self::Exec => "exec",
            Self::Transaction => "transaction",
            Self::PreparedQuery => "prepared-query",
            Self::PreparedQueryInTx => "prepared-query-in-tx",
            Self::Conn => "conn",
            Self::Columns => "columns",
            Self::ColumnTypes => "column-types",
            Self::NextResultSet => "next-result-set",
            Self::RowsScanDynamic => "rows-scan-dynamic",
            Self::Cleanup => "cleanup",
        }
    }

    /// Open the handle described by `config`, run the lesson and close the handle.
    pub async fn run(self, config: &DatabaseConfig) -> TourResult<()> {
        debug!(lesson = self.name(), "Running lesson");

        let pool = match self {
            Self::Open => open::run(config).await?,
            _ => db::open(config).await?,
        };

        let result = match self {
            Self::Open => Ok(()),
            Self::Query => query::run(&pool).await.map(drop),
            Self::QueryRow => query_row::run(&pool).await.map(drop),
            Self::Exec => exec::run(&pool).await.map(drop),
            Self::Transaction => transaction::run(&pool).await.map(drop),
            Self::PreparedQuery => prepared_query::run(&pool).await.map(drop),
            Self::PreparedQueryInTx => prepared_query_in_tx::run(&pool).await.map(drop),
            Self::Conn => conn::run(&pool, config.acquire_timeout).await.map(drop),
            Self::Columns => columns::run(&pool).await.map(drop),
            Self::ColumnTypes => column_types::run(&pool).await.map(drop),
            Self::NextResultSet => next_result_set::run(&pool).await.map(drop),
            Self::RowsScanDynamic => rows_scan_dynamic::run(&pool).await.map(drop),
            Self::Cleanup => cleanup::run(&pool).await.map(drop),
        };

        pool.close().await;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_test_ids() {
        assert_eq!(TEST_IDS.count(), 10);
        assert_eq!(*TEST_IDS.start(), 990);
        assert_eq!(test_name(995), "test995");
    }

    #[test]
    fn test_lesson_names_match_subcommands() {
        use clap::CommandFactory;

        let command = crate::config::Config::command();
        for lesson in [
            Lesson::Open,
            Lesson::QueryRow,
            Lesson::PreparedQueryInTx,
            Lesson::ColumnTypes,
            Lesson::RowsScanDynamic,
        ] {
            assert!(
                command.find_subcommand(lesson.name()).is_some(),
                "missing subcommand {}",
                lesson.name()
            );
        }
    }
}
