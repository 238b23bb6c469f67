//! Configuration handling for the Chinook tour.
//!
//! Every setting has a default, so each lesson runs with no flags at all.
//! Flags and `TOUR_*` environment variables only override those defaults.

use crate::error::{TourError, TourResult};
use crate::lessons::Lesson;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_DATABASE: &str = "./chinook.db";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 4;
pub const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Connection settings for the sample database handle.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Path to the SQLite file.
    pub path: PathBuf,
    /// Upper bound on pooled connections.
    pub max_connections: u32,
    /// How long to wait for a pooled connection.
    pub acquire_timeout: Duration,
    /// Create an empty database file when the path does not exist.
    pub create_if_missing: bool,
}

impl DatabaseConfig {
    /// Settings for the given file with every other option at its default.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: Duration::from_secs(DEFAULT_ACQUIRE_TIMEOUT_SECS),
            create_if_missing: false,
        }
    }

    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }

    pub fn with_acquire_timeout(mut self, acquire_timeout: Duration) -> Self {
        self.acquire_timeout = acquire_timeout;
        self
    }

    pub fn with_create_if_missing(mut self, create_if_missing: bool) -> Self {
        self.create_if_missing = create_if_missing;
        self
    }

    /// The data source as shown in logs.
    pub fn datasource(&self) -> String {
        self.path.display().to_string()
    }

    /// Reject settings the pool cannot work with.
    pub fn validate(&self) -> TourResult<()> {
        if self.path.as_os_str().is_empty() {
            return Err(TourError::config("database path must not be empty"));
        }
        if self.max_connections == 0 {
            return Err(TourError::config(
                "max_connections must be greater than 0",
            ));
        }
        if self.acquire_timeout.is_zero() {
            return Err(TourError::config(
                "acquire_timeout must be greater than 0",
            ));
        }
        Ok(())
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATABASE)
    }
}

/// Command line configuration.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "chinook-tour",
    about = "Runs one lesson of the SQL client tour against the Chinook sample database",
    version,
    author
)]
pub struct Config {
    /// Path to the Chinook SQLite database
    #[arg(
        short = 'd',
        long = "database",
        value_name = "PATH",
        default_value = DEFAULT_DATABASE,
        env = "TOUR_DATABASE",
        global = true
    )]
    pub database: PathBuf,

    /// Maximum pooled connections
    #[arg(
        long,
        default_value_t = DEFAULT_MAX_CONNECTIONS,
        env = "TOUR_MAX_CONNECTIONS",
        global = true
    )]
    pub max_connections: u32,

    /// Connection acquire timeout in seconds
    #[arg(
        long,
        default_value_t = DEFAULT_ACQUIRE_TIMEOUT_SECS,
        env = "TOUR_ACQUIRE_TIMEOUT",
        global = true
    )]
    pub acquire_timeout: u64,

    /// Create the database file if it does not exist
    #[arg(long, env = "TOUR_CREATE_IF_MISSING", global = true)]
    pub create_if_missing: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(
        long,
        default_value = DEFAULT_LOG_LEVEL,
        env = "TOUR_LOG_LEVEL",
        global = true
    )]
    pub log_level: String,

    /// Enable JSON logging format
    #[arg(long, env = "TOUR_JSON_LOGS", global = true)]
    pub json_logs: bool,

    /// Lesson to run
    #[command(subcommand)]
    pub lesson: Lesson,
}

impl Config {
    /// Connection settings gathered from the parsed flags.
    pub fn database_config(&self) -> DatabaseConfig {
        DatabaseConfig::new(&self.database)
            .with_max_connections(self.max_connections)
            .with_acquire_timeout(Duration::from_secs(self.acquire_timeout))
            .with_create_if_missing(self.create_if_missing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_flags() {
        let config = Config::try_parse_from(["chinook-tour", "query"]).unwrap();
        assert_eq!(config.database, PathBuf::from(DEFAULT_DATABASE));
        assert_eq!(config.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
        assert!(!config.json_logs);
        assert!(matches!(config.lesson, Lesson::Query));
    }

    #[test]
    fn test_database_flag_after_subcommand() {
        let config =
            Config::try_parse_from(["chinook-tour", "query-row", "-d", "/tmp/other.db"]).unwrap();
        assert_eq!(config.database, PathBuf::from("/tmp/other.db"));
        assert!(matches!(config.lesson, Lesson::QueryRow));
    }

    #[test]
    fn test_lesson_is_required() {
        assert!(Config::try_parse_from(["chinook-tour"]).is_err());
    }

    #[test]
    fn test_database_config_from_flags() {
        let config = Config::try_parse_from([
            "chinook-tour",
            "--max-connections",
            "2",
            "--acquire-timeout",
            "5",
            "--create-if-missing",
            "conn",
        ])
        .unwrap();
        let db = config.database_config();
        assert_eq!(db.max_connections, 2);
        assert_eq!(db.acquire_timeout, Duration::from_secs(5));
        assert!(db.create_if_missing);
        assert!(db.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_connections() {
        let db = DatabaseConfig::default().with_max_connections(0);
        let err = db.validate().unwrap_err();
        assert!(err.to_string().contains("max_connections"));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let db = DatabaseConfig::default().with_acquire_timeout(Duration::ZERO);
        assert!(db.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_path() {
        let db = DatabaseConfig::new("");
        assert!(matches!(db.validate(), Err(TourError::Config { .. })));
    }
}
