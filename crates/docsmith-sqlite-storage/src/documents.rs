//! Implementation of DocumentStorage trait for SQLite storage.

use docsmith_storage_traits::{
    Backend, DocumentId, DocumentStorage, DocumentStorageError, SavedDocument,
};
use rusqlite::{Connection, OptionalExtension, params};

use crate::db::{self, DOCUMENT_COLUMNS, DocumentRow};
use crate::DocsmithSqliteStorage;

#[inline]
fn into_document_err<T>(e: T) -> DocumentStorageError
where
    T: std::error::Error,
{
    DocumentStorageError::Database(e.to_string())
}

/// True only for a clash on the `id` primary key. Other constraint failures
/// stay database errors.
fn is_duplicate_id(e: &rusqlite::Error) -> bool {
    matches!(
        e,
        rusqlite::Error::SqliteFailure(inner, _)
            if inner.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY
    )
}

/// Collect decoded rows, skipping rows whose payload no longer decodes.
fn query_documents<P>(
    conn: &Connection,
    sql: &str,
    params: P,
) -> Result<Vec<SavedDocument>, DocumentStorageError>
where
    P: rusqlite::Params,
{
    let mut stmt = conn.prepare(sql).map_err(into_document_err)?;
    let rows = stmt
        .query_map(params, db::row_to_document)
        .map_err(into_document_err)?;

    let mut documents = Vec::new();
    for row in rows {
        match row.map_err(into_document_err)? {
            Ok(document) => documents.push(document),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "Failed to decode document row, skipping"
                );
            }
        }
    }
    Ok(documents)
}

impl DocumentStorage for DocsmithSqliteStorage {
    fn backend(&self) -> Backend {
        Backend::SQLite
    }

    fn append_document(&self, document: SavedDocument) -> Result<(), DocumentStorageError> {
        let row = DocumentRow::from_document(&document)?;

        self.with_connection(|conn| {
            let inserted = conn.execute(
                "INSERT INTO documents
                 (id, position, doc_type, title, company, schema_version, payload, created_at, updated_at)
                 VALUES (?1, (SELECT COALESCE(MAX(position), 0) + 1 FROM documents),
                         ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    row.id,
                    row.doc_type,
                    row.title,
                    row.company,
                    row.schema_version,
                    row.payload,
                    row.created_at,
                    row.updated_at,
                ],
            );

            match inserted {
                Ok(_) => Ok(()),
                Err(e) if is_duplicate_id(&e) => {
                    Err(DocumentStorageError::DuplicateId(row.id.to_string()))
                }
                Err(e) => Err(into_document_err(e)),
            }
        })
    }

    fn upsert_document(&self, document: SavedDocument) -> Result<(), DocumentStorageError> {
        let row = DocumentRow::from_document(&document)?;

        self.with_connection(|conn| {
            conn.execute(
                "INSERT INTO documents
                 (id, position, doc_type, title, company, schema_version, payload, created_at, updated_at)
                 VALUES (?1, (SELECT COALESCE(MAX(position), 0) + 1 FROM documents),
                         ?2, ?3, ?4, ?5, ?6, ?7, ?8)
                 ON CONFLICT(id) DO UPDATE SET
                    doc_type = excluded.doc_type,
                    title = excluded.title,
                    company = excluded.company,
                    schema_version = excluded.schema_version,
                    payload = excluded.payload,
                    created_at = excluded.created_at,
                    updated_at = excluded.updated_at",
                params![
                    row.id,
                    row.doc_type,
                    row.title,
                    row.company,
                    row.schema_version,
                    row.payload,
                    row.created_at,
                    row.updated_at,
                ],
            )
            .map_err(into_document_err)?;

            Ok(())
        })
    }

    fn all_documents(&self) -> Result<Vec<SavedDocument>, DocumentStorageError> {
        self.with_connection(|conn| {
            query_documents(
                conn,
                &format!("SELECT {DOCUMENT_COLUMNS} FROM documents ORDER BY position ASC"),
                [],
            )
        })
    }

    fn find_document(
        &self,
        id: &DocumentId,
    ) -> Result<Option<SavedDocument>, DocumentStorageError> {
        self.with_connection(|conn| {
            let mut stmt = conn
                .prepare(&format!(
                    "SELECT {DOCUMENT_COLUMNS} FROM documents WHERE id = ?"
                ))
                .map_err(into_document_err)?;

            let decoded = stmt
                .query_row([id.as_str()], db::row_to_document)
                .optional()
                .map_err(into_document_err)?;

            decoded.transpose()
        })
    }

    fn documents_by_type(
        &self,
        doc_type: &str,
    ) -> Result<Vec<SavedDocument>, DocumentStorageError> {
        self.with_connection(|conn| {
            query_documents(
                conn,
                &format!(
                    "SELECT {DOCUMENT_COLUMNS} FROM documents WHERE doc_type = ? ORDER BY position ASC"
                ),
                [doc_type],
            )
        })
    }

    fn delete_document(&self, id: &DocumentId) -> Result<bool, DocumentStorageError> {
        self.with_connection(|conn| {
            let removed = conn
                .execute("DELETE FROM documents WHERE id = ?", [id.as_str()])
                .map_err(into_document_err)?;
            Ok(removed > 0)
        })
    }

    fn document_count(&self) -> Result<usize, DocumentStorageError> {
        self.with_connection(|conn| {
            let count: i64 = conn
                .query_row("SELECT COUNT(*) FROM documents", [], |row| row.get(0))
                .map_err(into_document_err)?;
            Ok(usize::try_from(count).unwrap_or_default())
        })
    }
}
