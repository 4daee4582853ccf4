//! Per-row limits for the document table.
//!
//! Templates never validate their fields, so the store bounds what a single
//! row may hold.

use crate::error::Error;

/// Serialized document payload, in bytes (1 MiB)
pub const MAX_DOCUMENT_PAYLOAD_SIZE: usize = 1024 * 1024;

/// Template type tag, in UTF-8 bytes
pub const MAX_DOC_TYPE_LENGTH: usize = 255;

fn within(what: &'static str, actual: usize, limit: usize) -> Result<(), Error> {
    if actual > limit {
        return Err(Error::TooLarge {
            what,
            limit,
            actual,
        });
    }
    Ok(())
}

/// Reject a row whose type tag or encoded payload is over its limit.
pub fn check_document_limits(doc_type: &str, payload: &str) -> Result<(), Error> {
    within("document type", doc_type.len(), MAX_DOC_TYPE_LENGTH)?;
    within("document payload", payload.len(), MAX_DOCUMENT_PAYLOAD_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limits_are_inclusive() {
        let doc_type = "t".repeat(MAX_DOC_TYPE_LENGTH);
        assert!(check_document_limits(&doc_type, "{}").is_ok());
    }

    #[test]
    fn test_long_type_tag_is_rejected() {
        let doc_type = "é".repeat(MAX_DOC_TYPE_LENGTH / 2 + 1);
        match check_document_limits(&doc_type, "{}") {
            Err(Error::TooLarge {
                what,
                limit,
                actual,
            }) => {
                assert_eq!(what, "document type");
                assert_eq!(limit, MAX_DOC_TYPE_LENGTH);
                assert_eq!(actual, doc_type.len());
            }
            other => panic!("expected TooLarge, got {other:?}"),
        }
    }
}
