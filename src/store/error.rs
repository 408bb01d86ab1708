//! Store error types
//!
//! Defines all errors that can occur in the data store.

use thiserror::Error;

/// Errors that can occur in the goal/post store
#[derive(Error, Debug)]
pub enum StoreError {
    /// SQLite operation failed
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// I/O operation failed (creating the data directory)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Column value could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Referenced goal does not exist
    #[error("Goal not found: {0}")]
    GoalNotFound(String),

    /// Row rejected before reaching the database
    #[error("Invalid row: {0}")]
    Invalid(String),

    /// Connection mutex was poisoned
    #[error("Lock error: {0}")]
    Lock(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::GoalNotFound("g-42".to_string());
        assert_eq!(err.to_string(), "Goal not found: g-42");

        let err = StoreError::Invalid("title cannot be empty".to_string());
        assert_eq!(err.to_string(), "Invalid row: title cannot be empty");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let store_err: StoreError = io_err.into();
        assert!(matches!(store_err, StoreError::Io(_)));
    }
}
