//! Document storage tests

use docsmith_storage_traits::{DocumentId, DocumentStorage, DocumentStorageError};
use serde_json::json;

use super::{create_test_document, stored_ids};

pub fn test_empty_store_lists_nothing<S>(storage: S)
where
    S: DocumentStorage,
{
    assert!(storage.all_documents().unwrap().is_empty());
    assert_eq!(storage.document_count().unwrap(), 0);
    assert!(
        storage
            .find_document(&DocumentId::from("1"))
            .unwrap()
            .is_none()
    );
    assert!(storage.documents_by_type("internal-memo").unwrap().is_empty());
}

pub fn test_append_and_find_document<S>(storage: S)
where
    S: DocumentStorage,
{
    let memo = create_test_document("1700000000000", "internal-memo");
    storage.append_document(memo.clone()).unwrap();

    let all = storage.all_documents().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0], memo);
    assert_eq!(all[0].id.as_str(), "1700000000000");
    assert_eq!(all[0].doc_type, "internal-memo");

    let found = storage
        .find_document(&DocumentId::from("1700000000000"))
        .unwrap()
        .unwrap();
    assert_eq!(found, memo);
    assert_eq!(
        found.section("clauses").unwrap()[0]["title"],
        json!("Scope")
    );
}

pub fn test_append_grows_list_by_one<S>(storage: S)
where
    S: DocumentStorage,
{
    for (n, id) in ["1", "2", "3"].into_iter().enumerate() {
        let before = storage.document_count().unwrap();
        storage
            .append_document(create_test_document(id, "newsletter"))
            .unwrap();
        assert_eq!(storage.document_count().unwrap(), before + 1);
        assert_eq!(before, n);
    }
    assert_eq!(stored_ids(&storage), vec!["1", "2", "3"]);
}

pub fn test_duplicate_id_is_rejected<S>(storage: S)
where
    S: DocumentStorage,
{
    storage
        .append_document(create_test_document("5", "newsletter"))
        .unwrap();

    let mut clash = create_test_document("5", "internal-memo");
    clash.title = Some("Other".to_string());
    let err = storage.append_document(clash).unwrap_err();
    assert_eq!(err, DocumentStorageError::DuplicateId("5".to_string()));

    let stored = storage
        .find_document(&DocumentId::from("5"))
        .unwrap()
        .unwrap();
    assert_eq!(stored.doc_type, "newsletter");
    assert_eq!(storage.document_count().unwrap(), 1);
}

pub fn test_delete_removes_exactly_one<S>(storage: S)
where
    S: DocumentStorage,
{
    for id in ["1", "2", "3"] {
        storage
            .append_document(create_test_document(id, "internal-memo"))
            .unwrap();
    }

    assert!(storage.delete_document(&DocumentId::from("2")).unwrap());
    assert_eq!(stored_ids(&storage), vec!["1", "3"]);
    assert!(
        storage
            .find_document(&DocumentId::from("2"))
            .unwrap()
            .is_none()
    );
}

pub fn test_delete_missing_id_is_noop<S>(storage: S)
where
    S: DocumentStorage,
{
    storage
        .append_document(create_test_document("1", "internal-memo"))
        .unwrap();

    assert!(!storage.delete_document(&DocumentId::from("42")).unwrap());
    assert_eq!(stored_ids(&storage), vec!["1"]);

    let deleted = storage.delete_document(&DocumentId::from("1")).unwrap();
    assert!(deleted);
    assert!(!storage.delete_document(&DocumentId::from("1")).unwrap());
    assert!(storage.all_documents().unwrap().is_empty());
}

pub fn test_upsert_replaces_in_place<S>(storage: S)
where
    S: DocumentStorage,
{
    for id in ["1", "2", "3"] {
        storage
            .append_document(create_test_document(id, "internal-memo"))
            .unwrap();
    }

    let mut edited = create_test_document("2", "internal-memo");
    edited.title = Some("Edited".to_string());
    edited.updated_at = "2024-01-01T00:00:00.000Z".to_string();
    storage.upsert_document(edited.clone()).unwrap();

    assert_eq!(stored_ids(&storage), vec!["1", "2", "3"]);
    let stored = storage
        .find_document(&DocumentId::from("2"))
        .unwrap()
        .unwrap();
    assert_eq!(stored, edited);

    storage
        .upsert_document(create_test_document("4", "newsletter"))
        .unwrap();
    assert_eq!(stored_ids(&storage), vec!["1", "2", "3", "4"]);
}

pub fn test_documents_by_type<S>(storage: S)
where
    S: DocumentStorage,
{
    storage
        .append_document(create_test_document("1", "employment-contract"))
        .unwrap();
    storage
        .append_document(create_test_document("2", "internal-memo"))
        .unwrap();
    storage
        .append_document(create_test_document("3", "employment-contract"))
        .unwrap();

    let contracts: Vec<String> = storage
        .documents_by_type("employment-contract")
        .unwrap()
        .into_iter()
        .map(|d| d.id.to_string())
        .collect();
    assert_eq!(contracts, vec!["1", "3"]);
    assert_eq!(storage.documents_by_type("internal-memo").unwrap().len(), 1);
    assert!(storage.documents_by_type("unknown").unwrap().is_empty());
}

pub fn test_unknown_fields_survive<S>(storage: S)
where
    S: DocumentStorage,
{
    let mut document = create_test_document("9", "event-program");
    document
        .fields
        .insert("venue".to_string(), json!("Main hall"));
    document.fields.insert(
        "sessions".to_string(),
        json!([
            { "id": 1, "time": "09:00", "title": "Welcome", "speaker": "Ana" },
            { "id": 2, "time": "10:00", "title": "Roadmap", "speaker": "Ben" }
        ]),
    );
    storage.append_document(document.clone()).unwrap();

    let stored = storage
        .find_document(&DocumentId::from("9"))
        .unwrap()
        .unwrap();
    assert_eq!(stored, document);
    assert_eq!(stored.field_text("venue").as_deref(), Some("Main hall"));
    assert_eq!(stored.section("sessions").unwrap().len(), 2);
}
