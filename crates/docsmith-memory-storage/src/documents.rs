//! Memory-based storage implementation of the DocumentStorage trait

use docsmith_storage_traits::{
    Backend, DocumentId, DocumentStorage, DocumentStorageError, SavedDocument,
};

use crate::DocsmithMemoryStorage;

impl DocumentStorage for DocsmithMemoryStorage {
    fn backend(&self) -> Backend {
        Backend::Memory
    }

    fn append_document(&self, document: SavedDocument) -> Result<(), DocumentStorageError> {
        let mut inner = self.inner.write();
        if inner.documents.contains_key(&document.id) {
            return Err(DocumentStorageError::DuplicateId(document.id.to_string()));
        }
        inner.put(document);
        Ok(())
    }

    fn upsert_document(&self, document: SavedDocument) -> Result<(), DocumentStorageError> {
        self.inner.write().put(document);
        Ok(())
    }

    fn all_documents(&self) -> Result<Vec<SavedDocument>, DocumentStorageError> {
        let inner = self.inner.read();
        Ok(inner.ordered().cloned().collect())
    }

    fn find_document(
        &self,
        id: &DocumentId,
    ) -> Result<Option<SavedDocument>, DocumentStorageError> {
        Ok(self.inner.read().documents.get(id).cloned())
    }

    fn documents_by_type(
        &self,
        doc_type: &str,
    ) -> Result<Vec<SavedDocument>, DocumentStorageError> {
        let inner = self.inner.read();
        Ok(inner
            .ordered()
            .filter(|d| d.doc_type == doc_type)
            .cloned()
            .collect())
    }

    fn delete_document(&self, id: &DocumentId) -> Result<bool, DocumentStorageError> {
        let mut inner = self.inner.write();
        if inner.documents.remove(id).is_none() {
            return Ok(false);
        }
        inner.order.retain(|existing| existing != id);
        Ok(true)
    }

    fn document_count(&self) -> Result<usize, DocumentStorageError> {
        Ok(self.inner.read().documents.len())
    }
}

#[cfg(test)]
mod tests {
    use docsmith_storage_traits::test_utils::create_test_document;

    use super::*;

    #[test]
    fn test_with_documents_replaces_duplicates_in_place() {
        let mut updated = create_test_document("1", "internal-memo");
        updated.title = Some("Updated".to_string());
        let storage = DocsmithMemoryStorage::with_documents([
            create_test_document("1", "internal-memo"),
            create_test_document("2", "newsletter"),
            updated,
        ]);

        let all = storage.all_documents().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].title(), "Updated");
        assert_eq!(all[1].id.as_str(), "2");
    }

    #[test]
    fn test_debug_does_not_dump_documents() {
        let storage =
            DocsmithMemoryStorage::with_documents([create_test_document("1", "internal-memo")]);
        let debug = format!("{storage:?}");
        assert!(debug.contains("documents: 1"));
        assert!(!debug.contains("Body of 1"));
    }

    #[test]
    fn test_delete_keeps_order_of_the_rest() {
        let storage = DocsmithMemoryStorage::new();
        for id in ["1", "2", "3"] {
            storage
                .append_document(create_test_document(id, "internal-memo"))
                .unwrap();
        }
        assert!(storage.delete_document(&DocumentId::from("2")).unwrap());
        let ids: Vec<String> = storage
            .all_documents()
            .unwrap()
            .into_iter()
            .map(|d| d.id.into())
            .collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert_eq!(storage.document_count().unwrap(), 2);
    }
}
