//! The single-blob format older app versions used.
//!
//! Before the per-document store, every saved document lived in one JSON array
//! under the key-value storage key `"documents"`. The app imports that blob
//! once; this module only knows how to read and write it.

use serde_json::Value;

use crate::{DocumentStorageError, SavedDocument, migrate_document};

/// Key-value storage key the blob was kept under
pub const LEGACY_DOCUMENTS_KEY: &str = "documents";

/// Parse the legacy blob into documents, upgrading each one.
///
/// An absent or blank blob (and a literal `null`) is an empty list. Anything
/// that is not a JSON array of documents is an error.
pub fn parse_legacy_documents(
    blob: Option<&str>,
) -> Result<Vec<SavedDocument>, DocumentStorageError> {
    let Some(blob) = blob.map(str::trim).filter(|b| !b.is_empty()) else {
        return Ok(Vec::new());
    };

    let entries = match serde_json::from_str::<Value>(blob)? {
        Value::Null => return Ok(Vec::new()),
        Value::Array(entries) => entries,
        other => {
            return Err(DocumentStorageError::Deserialization(format!(
                "expected a JSON array under \"{LEGACY_DOCUMENTS_KEY}\", got {}",
                json_kind(&other)
            )));
        }
    };

    entries.into_iter().map(migrate_document).collect()
}

/// Encode documents as a legacy blob (a JSON array), oldest first
pub fn encode_legacy_documents(
    documents: &[SavedDocument],
) -> Result<String, DocumentStorageError> {
    serde_json::to_string(documents).map_err(|e| DocumentStorageError::Serialization(e.to_string()))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CURRENT_SCHEMA_VERSION;

    #[test]
    fn test_absent_or_blank_blob_is_empty() {
        assert!(parse_legacy_documents(None).unwrap().is_empty());
        assert!(parse_legacy_documents(Some("")).unwrap().is_empty());
        assert!(parse_legacy_documents(Some("  \n")).unwrap().is_empty());
        assert!(parse_legacy_documents(Some("null")).unwrap().is_empty());
        assert!(parse_legacy_documents(Some("[]")).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_blob_is_an_error() {
        let err = parse_legacy_documents(Some("[{\"id\":")).unwrap_err();
        assert!(matches!(err, DocumentStorageError::Deserialization(_)));

        let err = parse_legacy_documents(Some("{\"id\":\"1\"}")).unwrap_err();
        assert!(err.to_string().contains("an object"));
    }

    #[test]
    fn test_blob_keeps_order_and_upgrades() {
        let blob = r#"[
            {"id":"1700000000000","type":"internal-memo","title":"Note X","company":"Acme","createdAt":"2023-11-14T22:13:20.000Z","updatedAt":"2023-11-14T22:13:20.000Z","to":"All"},
            {"id":1700000000500,"type":"employment-contract","title":"Contract","createdAt":"2023-11-14T22:13:20.500Z","clauses":[{"id":1,"title":"Scope","content":"x"}]}
        ]"#;
        let docs = parse_legacy_documents(Some(blob)).unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].id.as_str(), "1700000000000");
        assert_eq!(docs[1].id.as_str(), "1700000000500");
        assert!(docs.iter().all(|d| d.schema_version == CURRENT_SCHEMA_VERSION));
        assert_eq!(docs[1].section("clauses").map(Vec::len), Some(1));
    }

    #[test]
    fn test_encoded_blob_parses_back() {
        let docs = parse_legacy_documents(Some(
            r#"[{"id":"7","type":"newsletter","title":"T","company":"C","createdAt":"a","updatedAt":"b"}]"#,
        ))
        .unwrap();
        let blob = encode_legacy_documents(&docs).unwrap();
        assert_eq!(parse_legacy_documents(Some(blob.as_str())).unwrap(), docs);
    }
}
