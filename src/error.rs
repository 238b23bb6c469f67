//! Error types for the Chinook tour.
//!
//! Every fallible step is labelled with the operation that failed (`pool.begin`,
//! `tx.commit`, ...) and handed back to the caller untouched. Nothing here retries;
//! the binary logs the wrapped error and exits.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TourError {
    #[error("{op}: {source}")]
    Op {
        op: &'static str,
        #[source]
        source: sqlx::Error,
    },

    /// The driver reported that an expected row does not exist.
    #[error("NOT FOUND: {source}")]
    NotFound {
        #[source]
        source: sqlx::Error,
    },

    /// A statement failed while staging one of several rows.
    #[error("{op}: {source} ({id})")]
    Staged {
        op: &'static str,
        id: i64,
        #[source]
        source: sqlx::Error,
    },

    #[error("no rows for id {id}")]
    NoRowsFor { id: i64 },

    #[error("expected another result set, batch produced {found}")]
    MissingResultSet { found: usize },

    #[error("Timeout: {operation} exceeded {elapsed_secs}s")]
    Timeout {
        operation: String,
        elapsed_secs: u64,
    },

    #[error("Invalid configuration: {message}")]
    Config { message: String },

    #[error("task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl TourError {
    /// Label a driver error with the operation that produced it.
    pub fn op(op: &'static str, source: sqlx::Error) -> Self {
        Self::Op { op, source }
    }

    /// Label a driver error raised while staging the row with the given id.
    pub fn staged(op: &'static str, id: i64, source: sqlx::Error) -> Self {
        Self::Staged { op, id, source }
    }

    /// Create a timeout error.
    pub fn timeout(operation: impl Into<String>, elapsed_secs: u64) -> Self {
        Self::Timeout {
            operation: operation.into(),
            elapsed_secs,
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// True for the "expected row is absent" conditions.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::NoRowsFor { .. })
    }

    /// The static operation label, when the error carries one.
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            Self::Op { op, .. } | Self::Staged { op, .. } => Some(*op),
            _ => None,
        }
    }
}

/// Result type alias for tour operations.
pub type TourResult<T> = Result<T, TourError>;

/// Attach an operation label to a driver result.
pub trait OpContext<T> {
    fn op(self, op: &'static str) -> TourResult<T>;
}

impl<T> OpContext<T> for Result<T, sqlx::Error> {
    fn op(self, op: &'static str) -> TourResult<T> {
        self.map_err(|source| TourError::op(op, source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_op_label_prefixes_message() {
        let result: Result<(), sqlx::Error> = Err(sqlx::Error::PoolClosed);
        let err = result.op("pool.begin").unwrap_err();
        assert!(err.to_string().starts_with("pool.begin: "));
        assert_eq!(err.operation(), Some("pool.begin"));
    }

    #[test]
    fn test_staged_error_names_id() {
        let err = TourError::staged("tx.execute", 995, sqlx::Error::RowNotFound);
        assert!(err.to_string().starts_with("tx.execute: "));
        assert!(err.to_string().ends_with("(995)"));
    }

    #[test]
    fn test_not_found_is_distinct() {
        let err = TourError::NotFound {
            source: sqlx::Error::RowNotFound,
        };
        assert!(err.is_not_found());
        assert!(err.to_string().starts_with("NOT FOUND"));
        assert!(TourError::NoRowsFor { id: 3 }.is_not_found());
        assert!(!TourError::op("db.query", sqlx::Error::RowNotFound).is_not_found());
    }

    #[test]
    fn test_timeout_display() {
        let err = TourError::timeout("pool.acquire", 30);
        assert_eq!(err.to_string(), "Timeout: pool.acquire exceeded 30s");
        assert_eq!(err.operation(), None);
    }
}
