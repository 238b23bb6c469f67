//! Data models for the Chinook tour.
//!
//! This module re-exports the value types the lessons hand back to callers.

pub mod catalog;
pub mod query;

pub use catalog::Artist;
pub use query::{ColumnMetadata, ExecSummary, ResultSet, RowMap};
