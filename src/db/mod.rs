//! Database helper layer.
//!
//! This module provides the pieces the lessons share:
//! - Handle (pool) opening and liveness checks
//! - Schema-agnostic row mapping, including multi-statement batches
//! - Result-set column introspection
//! - SQLite type classification and value decoding

pub mod handle;
pub mod mapping;
pub mod metadata;
pub mod types;

pub use handle::{open, ping};
pub use mapping::{map_result_sets, map_row, map_rows};
pub use metadata::{column_names, column_types};
pub use types::{TypeCategory, categorize_type};
