//! Core error types for lockedin-core.
//!
//! The hierarchy mirrors the failure classes a host has to tell apart:
//! validation and not-found outcomes are recoverable by the caller, while
//! an uninitialized store or a failed migration must stop the application.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for lockedin-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Database-related errors
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A record that must exist does not
    #[error("Task not found: {id}")]
    NotFound { id: String },

    /// Repository used before the schema migrator completed
    #[error("Store not initialized: run schema migrations before accessing tasks")]
    NotInitialized,

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CoreError {
    /// Whether the host must halt instead of letting the user retry.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            CoreError::NotInitialized
                | CoreError::Database(DatabaseError::MigrationFailed { .. })
                | CoreError::Database(DatabaseError::InvalidMigrationOrder { .. })
        )
    }
}

/// Database-specific errors.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to open database connection
    #[error("Failed to open database at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Insert collided with an existing primary key
    #[error("A task with id '{id}' already exists")]
    UniquenessViolation { id: String },

    /// Migration failed; the recorded version is unchanged
    #[error("Database migration to version {version} failed: {message}")]
    MigrationFailed { version: u32, message: String },

    /// Migration list is not a contiguous ascending sequence
    #[error("Migration list out of order: expected version {expected}, found {found}")]
    InvalidMigrationOrder { expected: u32, found: u32 },

    /// Database is locked
    #[error("Database is locked")]
    Locked,
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Unknown dot-path key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Task title is empty
    #[error("Task title must not be empty")]
    EmptyTitle,

    /// Priority outside low|medium|high|urgent
    #[error("Invalid priority '{0}': expected one of low, medium, high, urgent")]
    InvalidPriority(String),

    /// Not a fixed-width YYYY-MM-DD key
    #[error("Invalid date for '{field}': '{value}' is not in YYYY-MM-DD form")]
    InvalidDateKey { field: String, value: String },

    /// Tag that cannot be stored in the comma-joined form unchanged
    #[error("Invalid tag '{0}': tags must not contain ',' and a lone tag must not be empty")]
    InvalidTag(String),

    /// Month outside 1..=12 or a year chrono cannot represent
    #[error("Invalid month {year}-{month}")]
    InvalidMonth { year: i32, month: u32 },
}

// Helper implementations for converting from other error types

impl From<rusqlite::Error> for DatabaseError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(e, _msg) => {
                if e.code == rusqlite::ErrorCode::DatabaseLocked
                    || e.code == rusqlite::ErrorCode::DatabaseBusy
                {
                    DatabaseError::Locked
                } else {
                    DatabaseError::QueryFailed(err.to_string())
                }
            }
            _ => DatabaseError::QueryFailed(err.to_string()),
        }
    }
}

impl From<rusqlite::Error> for CoreError {
    fn from(err: rusqlite::Error) -> Self {
        CoreError::Database(err.into())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
