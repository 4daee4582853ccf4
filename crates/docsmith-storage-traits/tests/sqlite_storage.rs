//! SQLite storage implementation tests using shared test functions

use docsmith_sqlite_storage::DocsmithSqliteStorage;

mod shared;

/// Macro to generate tests that run against SQLite storage using shared test functions
macro_rules! test_sqlite_storage {
    ($test_name:ident, $test_fn:path) => {
        #[test]
        fn $test_name() {
            let storage = DocsmithSqliteStorage::new_in_memory().unwrap();
            $test_fn(storage);
        }
    };
}

test_sqlite_storage!(
    test_empty_store_lists_nothing_sqlite,
    shared::document_tests::test_empty_store_lists_nothing
);

test_sqlite_storage!(
    test_append_and_find_document_sqlite,
    shared::document_tests::test_append_and_find_document
);

test_sqlite_storage!(
    test_append_grows_list_by_one_sqlite,
    shared::document_tests::test_append_grows_list_by_one
);

test_sqlite_storage!(
    test_duplicate_id_is_rejected_sqlite,
    shared::document_tests::test_duplicate_id_is_rejected
);

test_sqlite_storage!(
    test_delete_removes_exactly_one_sqlite,
    shared::document_tests::test_delete_removes_exactly_one
);

test_sqlite_storage!(
    test_delete_missing_id_is_noop_sqlite,
    shared::document_tests::test_delete_missing_id_is_noop
);

test_sqlite_storage!(
    test_upsert_replaces_in_place_sqlite,
    shared::document_tests::test_upsert_replaces_in_place
);

test_sqlite_storage!(
    test_documents_by_type_sqlite,
    shared::document_tests::test_documents_by_type
);

test_sqlite_storage!(
    test_unknown_fields_survive_sqlite,
    shared::document_tests::test_unknown_fields_survive
);
