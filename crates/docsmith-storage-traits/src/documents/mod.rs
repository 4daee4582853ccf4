//! Documents module
//!
//! Storage trait for saved documents. Each document is stored under its own id,
//! so appends and deletes touch a single record instead of rewriting the whole
//! list.

use crate::{Backend, DocumentId, DocumentStorageError};

pub mod types;

use self::types::SavedDocument;

/// Storage traits for the documents module
pub trait DocumentStorage {
    /// Returns the backend type.
    fn backend(&self) -> Backend;

    /// Store a new document as the newest entry.
    ///
    /// Fails with [`DocumentStorageError::DuplicateId`] if a document with the
    /// same id is already stored; the stored list is left unchanged.
    fn append_document(&self, document: SavedDocument) -> Result<(), DocumentStorageError>;

    /// Insert a document, or replace the stored document with the same id.
    ///
    /// A replaced document keeps its position in the list.
    fn upsert_document(&self, document: SavedDocument) -> Result<(), DocumentStorageError>;

    /// All documents in insertion order. An empty store yields an empty list.
    fn all_documents(&self) -> Result<Vec<SavedDocument>, DocumentStorageError>;

    /// Find a document by id
    fn find_document(&self, id: &DocumentId)
    -> Result<Option<SavedDocument>, DocumentStorageError>;

    /// All documents with the given type tag, in insertion order
    fn documents_by_type(&self, doc_type: &str)
    -> Result<Vec<SavedDocument>, DocumentStorageError>;

    /// Delete a document by id.
    ///
    /// Returns `false` without touching the store when the id is absent.
    fn delete_document(&self, id: &DocumentId) -> Result<bool, DocumentStorageError>;

    /// Number of stored documents
    fn document_count(&self) -> Result<usize, DocumentStorageError> {
        Ok(self.all_documents()?.len())
    }
}
