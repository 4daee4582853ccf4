//! Shared test functions run against every storage backend

#![allow(dead_code)]

use docsmith_storage_traits::{DocumentId, SavedDocument};
use serde_json::json;

pub mod document_tests;

/// Build a document with a title, a company and one section entry
pub fn create_test_document(id: &str, doc_type: &str) -> SavedDocument {
    let mut document = SavedDocument::new(
        DocumentId::from(id),
        doc_type,
        "2023-11-14T22:13:20.000Z".to_string(),
    );
    document.title = Some(format!("Document {id}"));
    document.company = Some("Acme".to_string());
    document
        .fields
        .insert("body".to_string(), json!(format!("Body of {id}")));
    document.fields.insert(
        "clauses".to_string(),
        json!([{ "id": 1, "title": "Scope", "content": "All work" }]),
    );
    document
}

/// Ids of the stored documents, in list order
pub fn stored_ids<S>(storage: &S) -> Vec<String>
where
    S: docsmith_storage_traits::DocumentStorage,
{
    storage
        .all_documents()
        .unwrap()
        .into_iter()
        .map(|d| d.id.to_string())
        .collect()
}
