//! Docsmith storage - storage provider traits and types for saved documents.
//!
//! A saved document is the user-authored instance of a template. Backends keep
//! one record per document id, in insertion order, and every read goes through
//! [`migrate_document`] so older payloads are upgraded to
//! [`CURRENT_SCHEMA_VERSION`] before they reach the app.

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::bare_urls)]

pub mod document_id;
pub mod documents;
pub mod error;
pub mod legacy;
#[cfg(feature = "test-utils")]
pub mod test_utils;
pub mod versioning;

pub use document_id::DocumentId;
pub use documents::DocumentStorage;
pub use documents::types::SavedDocument;
pub use error::DocumentStorageError;
pub use versioning::{CURRENT_SCHEMA_VERSION, migrate_document};

/// Backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backend {
    /// Memory
    Memory,
    /// SQLite
    SQLite,
}

impl Backend {
    /// Check if it's a persistent backend
    ///
    /// All values different from [`Backend::Memory`] are considered persistent
    pub fn is_persistent(&self) -> bool {
        !matches!(self, Self::Memory)
    }
}
