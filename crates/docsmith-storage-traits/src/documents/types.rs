//! Types for the documents module

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{CURRENT_SCHEMA_VERSION, DocumentId, DocumentStorageError};

/// A user-authored document produced by a template.
///
/// The JSON form keeps the shape older app versions wrote (camelCase keys and a
/// `type` tag). Template-specific fields live in [`SavedDocument::fields`] and
/// are flattened next to the common ones, so unknown keys survive a round-trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedDocument {
    /// Time-based document id
    pub id: DocumentId,
    /// Tag of the template that produced the document
    #[serde(rename = "type")]
    pub doc_type: String,
    /// Document title; `None` when the payload never had one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Issuing company; `None` when the payload never had one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    /// ISO-8601 creation time
    pub created_at: String,
    /// ISO-8601 time of the last save
    pub updated_at: String,
    /// Payload schema version
    #[serde(default = "current_schema_version")]
    pub schema_version: u32,
    /// Template-specific fields (strings and repeatable-section arrays)
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

fn current_schema_version() -> u32 {
    CURRENT_SCHEMA_VERSION
}

impl SavedDocument {
    /// Create a document with no template-specific fields
    pub fn new<S>(id: DocumentId, doc_type: S, created_at: String) -> Self
    where
        S: Into<String>,
    {
        Self {
            id,
            doc_type: doc_type.into(),
            title: None,
            company: None,
            updated_at: created_at.clone(),
            created_at,
            schema_version: CURRENT_SCHEMA_VERSION,
            fields: Map::new(),
        }
    }

    /// Title for listings, empty when absent
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// Company for listings, empty when absent
    pub fn company(&self) -> &str {
        self.company.as_deref().unwrap_or("")
    }

    /// Read a template-specific scalar field as text.
    ///
    /// Numbers and booleans are rendered as text since older editors stored a
    /// few numeric inputs unquoted.
    pub fn field_text(&self, key: &str) -> Option<String> {
        match self.fields.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// Entries of a repeatable section, if the document carries one
    pub fn section(&self, key: &str) -> Option<&Vec<Value>> {
        self.fields.get(key)?.as_array()
    }

    /// Serialize to the JSON payload stored on disk
    pub fn to_json(&self) -> Result<String, DocumentStorageError> {
        serde_json::to_string(self).map_err(|e| DocumentStorageError::Serialization(e.to_string()))
    }

    /// Parse a JSON payload, upgrading it to the current schema
    pub fn from_json(json: &str) -> Result<Self, DocumentStorageError> {
        let value: Value = serde_json::from_str(json)?;
        crate::migrate_document(value)
    }
}
