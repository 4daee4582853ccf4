// Save/view/delete/export flows for documents.

use chrono::{DateTime, SecondsFormat, Utc};
use docsmith_storage_traits::{DocumentId, DocumentStorageError, SavedDocument};

use super::AppCore;
use crate::editor::{EditorSession, SourceDocument};
use crate::pdf_export::{current_bridge, run_export, PdfExportRequest};
use crate::schema::TemplateSpec;
use crate::state::{ExportedFile, PendingDelete};
use crate::templates::find_template;
use crate::updates::{CoreMsg, InternalEvent};

// A clash means another document got the same millisecond; bump and retry.
const MAX_ID_ATTEMPTS: usize = 8;

fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn export_date(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d").to_string()
}

impl AppCore {
    /// Next time-based document id, strictly increasing within this process.
    fn next_document_millis(&mut self, now: DateTime<Utc>) -> i64 {
        let millis = now.timestamp_millis().max(self.last_document_millis + 1);
        self.last_document_millis = millis;
        millis
    }

    pub(super) fn open_editor_with_json(
        &mut self,
        template_id: &str,
        document_json: Option<&str>,
        editing: bool,
    ) {
        let Some(template) = find_template(template_id) else {
            self.toast(format!("Unsupported document type: {template_id}"));
            return;
        };

        let session = match document_json.map(str::trim).filter(|j| !j.is_empty()) {
            None => EditorSession::new(template),
            Some(json) => match SavedDocument::from_json(json) {
                Ok(document) => EditorSession::from_document(template, &document, editing),
                Err(e) => {
                    tracing::warn!(%e, template_id, "bad document parameter");
                    self.toast(format!("Could not open document: {e}"));
                    return;
                }
            },
        };
        self.open_editor(template_id, Some(session));
    }

    pub(super) fn save_document(&mut self) {
        let Some(editor) = self.editor.as_ref() else {
            tracing::warn!("save without an open editor");
            return;
        };
        if self.state.busy.saving {
            return;
        }

        let now = Utc::now();
        let updated_at = iso_timestamp(now);
        let replace = self
            .update_on_resave()
            .then(|| editor.source().cloned())
            .flatten();

        self.set_busy(|b| b.saving = true);

        let result = match replace {
            Some(source) => self.replace_document(source, updated_at),
            None => self.append_new_document(now, updated_at),
        };

        self.set_busy(|b| b.saving = false);
        match result {
            Ok(source) => {
                let document_id = source.id.to_string();
                tracing::info!(id = %document_id, "document saved");
                if self.update_on_resave() {
                    if let Some(editor) = self.editor.as_mut() {
                        editor.set_source(source);
                    }
                }
                self.refresh_saved_documents();
                self.state.editor = self.editor.as_ref().map(EditorSession::view);
                self.emit_document_saved(document_id);
                self.toast("Document saved");
            }
            Err(e) => {
                tracing::error!(%e, "save failed");
                self.toast(format!("Could not save document: {e}"));
            }
        }
    }

    fn append_new_document(
        &mut self,
        now: DateTime<Utc>,
        created_at: String,
    ) -> Result<SourceDocument, DocumentStorageError> {
        let mut last_err = None;
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = DocumentId::from_millis(self.next_document_millis(now));
            let Some(editor) = self.editor.as_ref() else {
                break;
            };
            let document = editor.to_document(id.clone(), created_at.clone(), created_at.clone());
            match self.store.append_document(document) {
                Ok(()) => {
                    return Ok(SourceDocument {
                        id,
                        created_at,
                    });
                }
                Err(e @ DocumentStorageError::DuplicateId(_)) => {
                    tracing::debug!(%e, "document id taken, retrying");
                    last_err = Some(e);
                }
                Err(e) => return Err(e),
            }
        }
        Err(last_err.unwrap_or_else(|| DocumentStorageError::Other("no open editor".to_string())))
    }

    fn replace_document(
        &mut self,
        source: SourceDocument,
        updated_at: String,
    ) -> Result<SourceDocument, DocumentStorageError> {
        let Some(editor) = self.editor.as_ref() else {
            return Err(DocumentStorageError::Other("no open editor".to_string()));
        };
        let document = editor.to_document(source.id.clone(), source.created_at.clone(), updated_at);
        self.store.upsert_document(document)?;
        Ok(source)
    }

    pub(super) fn share_document(&mut self) {
        let Some(editor) = self.editor.as_ref() else {
            return;
        };
        let request = editor.export_request(self.default_author(), export_date(Utc::now()));
        self.start_pdf_export(request);
    }

    fn load_supported_document(
        &mut self,
        document_id: &str,
    ) -> Option<(&'static TemplateSpec, SavedDocument)> {
        let document = match self.store.find_document(&DocumentId::from(document_id)) {
            Ok(Some(document)) => document,
            Ok(None) => {
                self.toast("Document not found");
                self.refresh_saved_documents();
                self.emit_state();
                return None;
            }
            Err(e) => {
                tracing::error!(%e, id = document_id, "failed to load document");
                self.toast(format!("Could not open document: {e}"));
                return None;
            }
        };
        match find_template(&document.doc_type) {
            Some(template) => Some((template, document)),
            None => {
                self.toast(format!("Unsupported document type: {}", document.doc_type));
                None
            }
        }
    }

    pub(super) fn view_document(&mut self, document_id: &str) {
        let Some((template, document)) = self.load_supported_document(document_id) else {
            return;
        };
        let session = EditorSession::from_document(template, &document, true);
        self.open_editor(template.id, Some(session));
    }

    pub(super) fn export_saved_document(&mut self, document_id: &str) {
        let Some((template, document)) = self.load_supported_document(document_id) else {
            return;
        };
        let session = EditorSession::from_document(template, &document, false);
        let request = session.export_request(self.default_author(), export_date(Utc::now()));
        self.start_pdf_export(request);
    }

    pub(super) fn request_delete_document(&mut self, document_id: String) {
        let title = self
            .state
            .saved
            .documents
            .iter()
            .find(|d| d.id == document_id)
            .map(|d| d.title.clone())
            .unwrap_or_default();
        self.state.saved.pending_delete = Some(PendingDelete { document_id, title });
        self.emit_state();
    }

    pub(super) fn confirm_delete_document(&mut self) {
        let Some(pending) = self.state.saved.pending_delete.take() else {
            return;
        };

        self.set_busy(|b| b.deleting = true);
        let result = self
            .store
            .delete_document(&DocumentId::from(pending.document_id.as_str()));
        self.set_busy(|b| b.deleting = false);

        match result {
            Ok(removed) => {
                if !removed {
                    tracing::debug!(id = %pending.document_id, "delete of absent document");
                }
                self.refresh_saved_documents();
                self.emit_state();
            }
            Err(e) => {
                tracing::error!(%e, id = %pending.document_id, "delete failed");
                self.toast(format!("Could not delete document: {e}"));
            }
        }
    }

    fn start_pdf_export(&mut self, request: PdfExportRequest) {
        if self.state.busy.exporting {
            return;
        }
        let Some(bridge) = current_bridge(&self.pdf_export_bridge) else {
            self.toast("PDF export is not available");
            return;
        };

        self.set_busy(|b| b.exporting = true);
        let tx = self.core_sender.clone();
        let title = request.title.clone();
        // Navigation away does not cancel an export in flight.
        self.runtime.spawn_blocking(move || {
            let result = run_export(bridge.as_ref(), request);
            let _ = tx.send(CoreMsg::Internal(Box::new(
                InternalEvent::PdfExportFinished { title, result },
            )));
        });
    }

    pub(super) fn finish_pdf_export(&mut self, title: String, result: Result<String, String>) {
        self.state.busy.exporting = false;
        match result {
            Ok(file_path) => {
                tracing::info!(path = %file_path, "pdf exported");
                self.state.last_export = Some(ExportedFile { title, file_path });
                self.emit_state();
            }
            Err(msg) => {
                tracing::error!(error = %msg, "pdf export failed");
                self.toast(format!("PDF export failed: {msg}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn timestamps_use_millisecond_utc_iso() {
        let at = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
        assert_eq!(iso_timestamp(at), "2023-11-14T22:13:20.000Z");
        assert_eq!(export_date(at), "2023-11-14");
    }
}
