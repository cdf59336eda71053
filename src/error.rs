//! Error types for HobbyHub.

use thiserror::Error;

/// Common error type for HobbyHub.
#[derive(Error, Debug)]
pub enum HubError {
    /// Database error.
    ///
    /// Wraps query and constraint errors from sqlx. The original message is
    /// kept for server-side logging; it is never shown to clients.
    #[error("database error: {0}")]
    Database(String),

    /// Database connection error.
    #[error("database connection error: {0}")]
    DatabaseConnection(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Session store error.
    #[error("session error: {0}")]
    Session(String),

    /// Validation error for user input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<sqlx::Error> for HubError {
    fn from(e: sqlx::Error) -> Self {
        HubError::Database(e.to_string())
    }
}

/// Result type alias for HobbyHub operations.
pub type Result<T> = std::result::Result<T, HubError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_error_display() {
        let err = HubError::Database("UNIQUE constraint failed".to_string());
        assert_eq!(err.to_string(), "database error: UNIQUE constraint failed");
    }

    #[test]
    fn test_not_found_error_display() {
        let err = HubError::NotFound("user".to_string());
        assert_eq!(err.to_string(), "user not found");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: HubError = io_err.into();
        assert!(matches!(err, HubError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_sqlx_error_conversion() {
        let err: HubError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, HubError::Database(_)));
    }

    #[test]
    fn test_result_alias() {
        fn sample_ok() -> Result<i32> {
            Ok(42)
        }

        fn sample_err() -> Result<i32> {
            Err(HubError::Config("bad port".to_string()))
        }

        assert_eq!(sample_ok().unwrap(), 42);
        assert!(sample_err().is_err());
    }
}
