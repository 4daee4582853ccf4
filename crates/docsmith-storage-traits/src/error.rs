//! Error types for document storage operations

use thiserror::Error;

/// Error type for document storage operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentStorageError {
    /// Database operation failed
    #[error("database error: {0}")]
    Database(String),

    /// Serialization failed
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Deserialization failed
    #[error("deserialization error: {0}")]
    Deserialization(String),

    /// A document with the same id is already stored
    #[error("document already exists: {0}")]
    DuplicateId(String),

    /// The stored payload was written by a newer schema
    #[error("unsupported schema version {found} (newest supported is {supported})")]
    UnsupportedVersion {
        /// Version found in the payload
        found: u32,
        /// Newest version this build understands
        supported: u32,
    },

    /// Other error
    #[error("error: {0}")]
    Other(String),
}

impl From<serde_json::Error> for DocumentStorageError {
    fn from(e: serde_json::Error) -> Self {
        if e.is_data() || e.is_syntax() || e.is_eof() {
            Self::Deserialization(e.to_string())
        } else {
            Self::Serialization(e.to_string())
        }
    }
}
