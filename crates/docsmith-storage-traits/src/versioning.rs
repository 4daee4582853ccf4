//! Schema versions of stored documents and the migrations between them.
//!
//! Version 1 is the shape written before documents carried a version tag: a
//! flat JSON object with `id`, `type`, `title`, `company`, template fields and
//! `createdAt`/`updatedAt`, where some editors wrote a numeric `id` and never
//! set `updatedAt`. Version 2 adds `schemaVersion`, a string `id` and both
//! timestamps. `title` and `company` stay optional in both versions.

use serde_json::{Map, Value};

use crate::{DocumentStorageError, SavedDocument};

/// Schema version written by this build
pub const CURRENT_SCHEMA_VERSION: u32 = 2;

/// Version assumed for payloads without a `schemaVersion` key
pub const LEGACY_SCHEMA_VERSION: u32 = 1;

const SCHEMA_VERSION_KEY: &str = "schemaVersion";

type Migration = fn(&mut Map<String, Value>) -> Result<(), DocumentStorageError>;

/// `MIGRATIONS[n - 1]` upgrades a version `n` payload to version `n + 1`.
const MIGRATIONS: &[Migration] = &[migrate_v1_to_v2];

/// Read the schema version of a raw payload
pub fn schema_version_of(object: &Map<String, Value>) -> Result<u32, DocumentStorageError> {
    match object.get(SCHEMA_VERSION_KEY) {
        None | Some(Value::Null) => Ok(LEGACY_SCHEMA_VERSION),
        Some(value) => value
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .ok_or_else(|| {
                DocumentStorageError::Deserialization(format!(
                    "invalid {SCHEMA_VERSION_KEY}: {value}"
                ))
            }),
    }
}

/// Upgrade a raw document payload to [`CURRENT_SCHEMA_VERSION`] and decode it.
pub fn migrate_document(mut value: Value) -> Result<SavedDocument, DocumentStorageError> {
    let Value::Object(object) = &mut value else {
        return Err(DocumentStorageError::Deserialization(
            "document is not a JSON object".to_string(),
        ));
    };

    let mut version = schema_version_of(object)?;
    if version > CURRENT_SCHEMA_VERSION {
        return Err(DocumentStorageError::UnsupportedVersion {
            found: version,
            supported: CURRENT_SCHEMA_VERSION,
        });
    }

    while version < CURRENT_SCHEMA_VERSION {
        let step = (version as usize)
            .checked_sub(1)
            .and_then(|index| MIGRATIONS.get(index))
            .ok_or_else(|| {
                DocumentStorageError::Other(format!("no migration from schema version {version}"))
            })?;
        step(object)?;
        version += 1;
        object.insert(SCHEMA_VERSION_KEY.to_string(), Value::from(version));
    }

    Ok(serde_json::from_value(value)?)
}

fn migrate_v1_to_v2(object: &mut Map<String, Value>) -> Result<(), DocumentStorageError> {
    match object.get("id") {
        Some(Value::String(_)) => {}
        Some(Value::Number(n)) => {
            let id = n.to_string();
            object.insert("id".to_string(), Value::String(id));
        }
        _ => {
            return Err(DocumentStorageError::Deserialization(
                "legacy document has no id".to_string(),
            ));
        }
    }

    for key in ["title", "company"] {
        if matches!(object.get(key), Some(v) if !v.is_string()) {
            object.remove(key);
        }
    }

    let created_at = match object.get("createdAt") {
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    };
    object.insert("createdAt".to_string(), Value::String(created_at.clone()));
    if !matches!(object.get("updatedAt"), Some(Value::String(_))) {
        object.insert("updatedAt".to_string(), Value::String(created_at));
    }

    Ok(())
}
