//! Builders shared by the storage backends' tests.

use serde_json::json;

use crate::{DocumentId, SavedDocument};

/// A document with a title, a company and one template-specific field
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
    document
}
