//! Error types for the SQLite storage implementation.

use docsmith_storage_traits::DocumentStorageError;

/// Error type for SQLite storage operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// SQLite database error
    #[error("Database error: {0}")]
    Database(String),
    /// Error from rusqlite
    #[error("SQLite error: {0}")]
    Rusqlite(#[from] rusqlite::Error),
    /// Error during database migration
    #[error("Migration error: {0}")]
    Refinery(#[from] refinery::Error),
    /// Stored payload could not be encoded or decoded
    #[error("Payload error: {0}")]
    Payload(#[from] DocumentStorageError),
    /// A row value is over its size limit
    #[error("{what} is {actual} bytes, over the {limit} byte limit")]
    TooLarge {
        /// Which value was checked
        what: &'static str,
        /// Limit in bytes
        limit: usize,
        /// Actual size in bytes
        actual: usize,
    },
    /// File permission error
    #[error("File permission error: {0}")]
    FilePermission(String),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Database(format!("IO error: {}", e))
    }
}

impl From<Error> for DocumentStorageError {
    fn from(err: Error) -> Self {
        match err {
            Error::Payload(inner) => inner,
            invalid @ Error::TooLarge { .. } => {
                DocumentStorageError::Serialization(invalid.to_string())
            }
            other => DocumentStorageError::Database(other.to_string()),
        }
    }
}
