//! SQLite-based storage implementation for Docsmith.
//!
//! Implements the [`DocumentStorage`] trait on top of a single SQLite file,
//! one row per document. Appends, upserts and deletes are single statements,
//! so a crash can never lose documents other than the one being written.
//!
//! # Example
//!
//! ```no_run
//! use docsmith_sqlite_storage::DocsmithSqliteStorage;
//! use docsmith_storage_traits::DocumentStorage;
//!
//! let storage = DocsmithSqliteStorage::new("/path/to/documents.sqlite3")?;
//! let documents = storage.all_documents()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! [`DocumentStorage`]: docsmith_storage_traits::DocumentStorage

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::bare_urls)]

use std::path::Path;
use std::sync::{Arc, Mutex};

use rusqlite::Connection;

mod db;
mod documents;
pub mod error;
mod migrations;
mod permissions;
mod validation;

use self::error::Error;
use self::permissions::{is_special_path, precreate_secure_database_file, set_secure_file_permissions};

/// A SQLite-based storage implementation for Docsmith.
///
/// The connection is shared behind a mutex, so every statement runs
/// serialized even when the store is used from several threads.
pub struct DocsmithSqliteStorage {
    connection: Arc<Mutex<Connection>>,
}

impl DocsmithSqliteStorage {
    /// Opens (or creates) the database at `file_path` and applies migrations.
    ///
    /// The file and its parent directory are created with owner-only
    /// permissions on Unix.
    pub fn new<P>(file_path: P) -> Result<Self, Error>
    where
        P: AsRef<Path>,
    {
        let file_path = file_path.as_ref();
        precreate_secure_database_file(file_path)?;

        let mut connection = Connection::open(file_path)?;
        migrations::run_migrations(&mut connection)?;

        Self::apply_secure_permissions(file_path)?;

        Ok(Self {
            connection: Arc::new(Mutex::new(connection)),
        })
    }

    /// Creates a new in-memory [`DocsmithSqliteStorage`].
    ///
    /// In-memory databases do not persist data.
    pub fn new_in_memory() -> Result<Self, Error> {
        let mut connection = Connection::open_in_memory()?;
        migrations::run_migrations(&mut connection)?;

        Ok(Self {
            connection: Arc::new(Mutex::new(connection)),
        })
    }

    /// Applies owner-only permissions to the database file and any SQLite
    /// sidecar files present at open time.
    fn apply_secure_permissions(db_path: &Path) -> Result<(), Error> {
        if is_special_path(db_path) {
            return Ok(());
        }

        set_secure_file_permissions(db_path)?;

        let parent = db_path.parent();
        let stem = db_path.file_name().and_then(|n| n.to_str());
        if let (Some(parent), Some(stem)) = (parent, stem) {
            for suffix in &["-wal", "-shm", "-journal"] {
                set_secure_file_permissions(parent.join(format!("{}{}", stem, suffix)))?;
            }
        }

        Ok(())
    }

    /// Provides access to the underlying connection for the storage
    /// implementations.
    pub(crate) fn with_connection<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&mut Connection) -> T,
    {
        let mut conn = match self.connection.lock() {
            Ok(guard) => guard,
            Err(poison) => poison.into_inner(),
        };
        f(&mut conn)
    }
}

#[cfg(test)]
mod tests {
    use docsmith_storage_traits::test_utils::create_test_document;
    use docsmith_storage_traits::{Backend, DocumentId, DocumentStorage};

    use super::*;

    #[test]
    fn test_documents_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("documents.sqlite3");

        {
            let storage = DocsmithSqliteStorage::new(&path).unwrap();
            assert_eq!(storage.backend(), Backend::SQLite);
            storage
                .append_document(create_test_document("1", "internal-memo"))
                .unwrap();
            storage
                .append_document(create_test_document("2", "newsletter"))
                .unwrap();
        }

        let storage = DocsmithSqliteStorage::new(&path).unwrap();
        let all = storage.all_documents().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0], create_test_document("1", "internal-memo"));
        assert_eq!(all[1].id, DocumentId::from("2"));
    }

    #[test]
    fn test_migrations_are_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("documents.sqlite3");
        drop(DocsmithSqliteStorage::new(&path).unwrap());
        drop(DocsmithSqliteStorage::new(&path).unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn test_database_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("documents.sqlite3");
        let _storage = DocsmithSqliteStorage::new(&path).unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o077, 0);
    }
}
