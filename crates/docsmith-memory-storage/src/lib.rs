//! Memory-based storage implementation for Docsmith.
//!
//! Implements the [`DocumentStorage`] trait in memory. Nothing survives the
//! process; the app uses it when persistence is switched off in config and the
//! tests use it as the reference backend.
//!
//! All state sits behind one [`RwLock`], so every operation observes a
//! consistent list even when the store is shared between threads.
//!
//! [`DocumentStorage`]: docsmith_storage_traits::DocumentStorage

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::bare_urls)]

use std::collections::HashMap;
use std::fmt;

use docsmith_storage_traits::{DocumentId, SavedDocument};
use parking_lot::RwLock;

mod documents;

/// In-memory document store
#[derive(Default)]
pub struct DocsmithMemoryStorage {
    inner: RwLock<MemoryStorageInner>,
}

#[derive(Default)]
struct MemoryStorageInner {
    /// Ids in insertion order
    order: Vec<DocumentId>,
    documents: HashMap<DocumentId, SavedDocument>,
}

impl DocsmithMemoryStorage {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-filled with documents, oldest first.
    ///
    /// Later duplicates of an id replace earlier ones in place.
    pub fn with_documents<I>(documents: I) -> Self
    where
        I: IntoIterator<Item = SavedDocument>,
    {
        let mut inner = MemoryStorageInner::default();
        for document in documents {
            inner.put(document);
        }
        Self {
            inner: RwLock::new(inner),
        }
    }
}

impl MemoryStorageInner {
    fn put(&mut self, document: SavedDocument) {
        if !self.documents.contains_key(&document.id) {
            self.order.push(document.id.clone());
        }
        self.documents.insert(document.id.clone(), document);
    }

    fn ordered(&self) -> impl Iterator<Item = &SavedDocument> {
        self.order.iter().filter_map(|id| self.documents.get(id))
    }
}

impl fmt::Debug for DocsmithMemoryStorage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.read();
        f.debug_struct("DocsmithMemoryStorage")
            .field("documents", &inner.order.len())
            .finish()
    }
}
