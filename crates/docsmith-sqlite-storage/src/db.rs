//! Row mapping for the `documents` table.

use docsmith_storage_traits::{DocumentStorageError, SavedDocument};
use rusqlite::Row;

use crate::error::Error;
use crate::validation::check_document_limits;

/// Columns selected by every document query, in the order [`row_to_document`]
/// expects.
pub const DOCUMENT_COLUMNS: &str = "id, payload";

/// Column values written for one document
#[derive(Debug)]
pub struct DocumentRow<'a> {
    pub id: &'a str,
    pub doc_type: &'a str,
    pub title: &'a str,
    pub company: &'a str,
    pub schema_version: u32,
    pub payload: String,
    pub created_at: &'a str,
    pub updated_at: &'a str,
}

impl<'a> DocumentRow<'a> {
    /// Serialize a document into column values, enforcing size limits
    pub fn from_document(document: &'a SavedDocument) -> Result<Self, Error> {
        let payload = document.to_json()?;
        check_document_limits(&document.doc_type, &payload)?;

        Ok(Self {
            id: document.id.as_str(),
            doc_type: &document.doc_type,
            title: document.title(),
            company: document.company(),
            schema_version: document.schema_version,
            payload,
            created_at: &document.created_at,
            updated_at: &document.updated_at,
        })
    }
}

/// Decode a `(id, payload)` row, upgrading older payloads.
///
/// The row id wins over an id inside the payload so a hand-edited payload can
/// not make a row shadow another document.
pub fn row_to_document(row: &Row<'_>) -> rusqlite::Result<Result<SavedDocument, DocumentStorageError>> {
    let id: String = row.get(0)?;
    let payload: String = row.get(1)?;
    Ok(SavedDocument::from_json(&payload).map(|mut document| {
        document.id = id.into();
        document
    }))
}
