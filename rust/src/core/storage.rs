// Document store lifecycle + storage-derived state refresh.

use std::path::{Path, PathBuf};

use anyhow::Context;
use docsmith_memory_storage::DocsmithMemoryStorage;
use docsmith_sqlite_storage::DocsmithSqliteStorage;
use docsmith_storage_traits::legacy::parse_legacy_documents;
use docsmith_storage_traits::{Backend, DocumentStorage, SavedDocument};

use super::AppCore;
use crate::state::{DocumentStats, SavedDocumentSummary};
use crate::templates::{find_template, type_label_and_icon, CONTRACT_TYPE, MEMO_TYPE};

const DATABASE_FILE_NAME: &str = "documents.sqlite3";
const LEGACY_BLOB_FILE_NAME: &str = "documents.json";
const LEGACY_IMPORTED_SUFFIX: &str = "imported";

pub(super) fn database_path(data_dir: &str) -> PathBuf {
    Path::new(data_dir).join(DATABASE_FILE_NAME)
}

fn open_sqlite_store(data_dir: &str) -> anyhow::Result<DocsmithSqliteStorage> {
    let path = database_path(data_dir);
    DocsmithSqliteStorage::new(&path)
        .with_context(|| format!("open document database at {}", path.display()))
}

/// Move documents from the single-blob file older versions exported into the
/// store. Ids already stored are skipped; the file is renamed once read so the
/// import runs at most once.
pub(super) fn import_legacy_blob(
    store: &dyn DocumentStorage,
    data_dir: &str,
) -> anyhow::Result<usize> {
    let path = Path::new(data_dir).join(LEGACY_BLOB_FILE_NAME);
    if !path.exists() {
        return Ok(0);
    }

    let blob = std::fs::read_to_string(&path)
        .with_context(|| format!("read legacy documents at {}", path.display()))?;
    let documents = parse_legacy_documents(Some(blob.as_str())).context("parse legacy documents")?;

    let mut imported = 0;
    for document in documents {
        if store.find_document(&document.id)?.is_some() {
            tracing::debug!(id = %document.id, "legacy document already stored");
            continue;
        }
        store
            .append_document(document)
            .context("store legacy document")?;
        imported += 1;
    }

    let done = path.with_extension(format!("json.{LEGACY_IMPORTED_SUFFIX}"));
    std::fs::rename(&path, &done)
        .with_context(|| format!("rename {} after import", path.display()))?;
    Ok(imported)
}

pub(super) fn summarize(document: &SavedDocument) -> SavedDocumentSummary {
    let (type_label, icon) = type_label_and_icon(&document.doc_type);
    SavedDocumentSummary {
        id: document.id.to_string(),
        doc_type: document.doc_type.clone(),
        type_label: type_label.to_string(),
        icon: icon.to_string(),
        title: document.title().to_string(),
        company: document.company().to_string(),
        created_at: document.created_at.clone(),
        updated_at: document.updated_at.clone(),
        supported: find_template(&document.doc_type).is_some(),
    }
}

pub(super) fn document_stats(documents: &[SavedDocumentSummary]) -> DocumentStats {
    let count = |doc_type: &str| documents.iter().filter(|d| d.doc_type == doc_type).count() as u32;
    DocumentStats {
        total: documents.len() as u32,
        contracts: count(CONTRACT_TYPE),
        memos: count(MEMO_TYPE),
    }
}

impl AppCore {
    /// Open the configured store. A persistent store that fails to open falls
    /// back to memory so the app stays usable; the user is told documents will
    /// not survive a restart.
    pub(super) fn open_store(&mut self) {
        let backend = self.storage_backend();
        let store: Box<dyn DocumentStorage> = match backend {
            Backend::Memory => Box::new(DocsmithMemoryStorage::new()),
            Backend::SQLite => match open_sqlite_store(&self.data_dir) {
                Ok(store) => Box::new(store),
                Err(e) => {
                    tracing::error!(err = %format!("{e:#}"), "document database unavailable");
                    self.store = Box::new(DocsmithMemoryStorage::new());
                    self.toast(format!(
                        "Saved documents are unavailable and new ones will not be kept: {e:#}"
                    ));
                    return;
                }
            },
        };
        self.store = store;
        tracing::info!(backend = ?backend, "document store opened");

        if !self.legacy_import_enabled() {
            return;
        }
        // The blob is renamed once imported, so only import into a store that
        // outlives this process.
        if !backend.is_persistent() {
            tracing::debug!(backend = ?backend, "legacy import skipped for non-persistent store");
            return;
        }
        match import_legacy_blob(self.store.as_ref(), &self.data_dir) {
            Ok(0) => {}
            Ok(n) => tracing::info!(imported = n, "imported legacy documents"),
            Err(e) => {
                tracing::warn!(err = %format!("{e:#}"), "legacy import failed");
                self.toast(format!("Could not import older documents: {e:#}"));
            }
        }
    }

    /// Reload the saved documents list. On failure the previous list stays.
    ///
    /// Does not emit; callers emit once their own state changes are applied.
    pub(super) fn refresh_saved_documents(&mut self) {
        self.state.saved.persistent = self.store.backend().is_persistent();
        match self.store.all_documents() {
            Ok(documents) => {
                let summaries: Vec<SavedDocumentSummary> = documents.iter().map(summarize).collect();
                self.state.saved.stats = document_stats(&summaries);
                self.state.saved.documents = summaries;
                let pending_gone = self.state.saved.pending_delete.as_ref().is_some_and(|p| {
                    !self.state.saved.documents.iter().any(|d| d.id == p.document_id)
                });
                if pending_gone {
                    self.state.saved.pending_delete = None;
                }
            }
            Err(e) => {
                tracing::error!(%e, "failed to load saved documents");
                self.toast(format!("Could not load saved documents: {e}"));
            }
        }
    }
}
