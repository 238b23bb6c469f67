//! Chinook Tour Library
//!
//! A guided tour of the SQL client primitives (handles, queries, prepared
//! statements, transactions, dedicated connections and result-set
//! introspection) run against the Chinook SQLite sample database.

pub mod config;
pub mod db;
pub mod error;
pub mod lessons;
pub mod models;

pub use config::Config;
pub use error::{TourError, TourResult};
pub use lessons::Lesson;
