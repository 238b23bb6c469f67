//! Catalog entries from the Chinook sample database.

use serde::Serialize;
use std::fmt;

/// A row of the `artists` table.
///
/// Field order matches `SELECT ArtistId, Name`, which is how the lessons bind
/// columns by position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Artist {
    #[sqlx(rename = "ArtistId")]
    pub id: i64,
    #[sqlx(rename = "Name")]
    pub name: String,
}

impl Artist {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl fmt::Display for Artist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "id={}, name={}", self.id, self.name)
    }
}
