mod config;
mod documents;
mod storage;

use std::sync::{Arc, RwLock};

use docsmith_storage_traits::DocumentStorage;
use flume::Sender;

use crate::actions::AppAction;
use crate::catalog::{category_descriptors, StyleVariant, TemplateCategory};
use crate::editor::EditorSession;
use crate::pdf_export::SharedPdfExportBridge;
use crate::state::{BusyState, CategoryState, Screen};
use crate::templates::find_template;
use crate::updates::{AppUpdate, CoreMsg, InternalEvent};

pub(crate) use config::default_app_config_json;

pub struct AppCore {
    pub state: crate::state::AppState,
    rev: u64,

    update_sender: Sender<AppUpdate>,
    core_sender: Sender<CoreMsg>,
    shared_state: Arc<RwLock<crate::state::AppState>>,

    data_dir: String,
    config: config::AppConfig,
    runtime: tokio::runtime::Runtime,

    store: Box<dyn DocumentStorage>,
    // Actor-internal editor session; `state.editor` is its projection.
    editor: Option<EditorSession>,
    // Last millisecond value handed out as a document id.
    last_document_millis: i64,
    pdf_export_bridge: SharedPdfExportBridge,
}

impl AppCore {
    pub fn new(
        update_sender: Sender<AppUpdate>,
        core_sender: Sender<CoreMsg>,
        data_dir: String,
        shared_state: Arc<RwLock<crate::state::AppState>>,
        pdf_export_bridge: SharedPdfExportBridge,
    ) -> Self {
        let config = config::load_app_config(&data_dir);
        let state = crate::state::AppState::empty();

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("docsmith-export")
            .build()
            .expect("tokio runtime");

        let mut this = Self {
            state,
            rev: 0,
            update_sender,
            core_sender,
            shared_state,
            data_dir,
            config,
            runtime,
            store: Box::new(docsmith_memory_storage::DocsmithMemoryStorage::new()),
            editor: None,
            last_document_millis: 0,
            pdf_export_bridge,
        };

        this.open_store();
        this.refresh_saved_documents();

        // Ensure FfiApp.state() has an immediately-available snapshot.
        let snapshot = this.state.clone();
        this.commit_state_snapshot(&snapshot);
        this
    }

    fn next_rev(&mut self) -> u64 {
        self.rev += 1;
        self.state.rev = self.rev;
        self.rev
    }

    fn commit_state_snapshot(&self, snapshot: &crate::state::AppState) {
        match self.shared_state.write() {
            Ok(mut g) => *g = snapshot.clone(),
            Err(poison) => *poison.into_inner() = snapshot.clone(),
        }
    }

    fn emit_state(&mut self) {
        self.next_rev();
        let snapshot = self.state.clone();
        self.commit_state_snapshot(&snapshot);
        let _ = self.update_sender.send(AppUpdate::FullState(snapshot));
    }

    fn emit_router(&mut self) {
        self.emit_state();
    }

    fn emit_editor(&mut self) {
        self.state.editor = self.editor.as_ref().map(EditorSession::view);
        self.emit_state();
    }

    fn emit_busy(&mut self) {
        self.emit_state();
    }

    fn emit_toast(&mut self) {
        self.emit_state();
    }

    fn emit_document_saved(&mut self, document_id: String) {
        let rev = self.next_rev();
        // Keep snapshot rev in sync with the update stream even though this is a side-effect update.
        let snapshot = self.state.clone();
        self.commit_state_snapshot(&snapshot);
        let _ = self
            .update_sender
            .send(AppUpdate::DocumentSaved { rev, document_id });
    }

    fn toast(&mut self, msg: impl Into<String>) {
        // Keep toast in state until the UI explicitly clears it.
        self.state.toast = Some(msg.into());
        self.emit_toast();
    }

    fn set_busy(&mut self, f: impl FnOnce(&mut BusyState)) {
        let mut next = self.state.busy.clone();
        f(&mut next);
        if next != self.state.busy {
            self.state.busy = next;
            self.emit_busy();
        }
    }

    fn enter_category(&mut self, category: TemplateCategory) {
        let variant = StyleVariant::default();
        self.state.category = Some(CategoryState {
            category,
            title: category.title().to_string(),
            variant,
            variants: StyleVariant::all().to_vec(),
            templates: category_descriptors(category, variant),
        });
    }

    /// Open the editor for a template and push its screen. Returns `false`
    /// (after a toast) when the template is unknown.
    fn open_editor(&mut self, template_id: &str, session: Option<EditorSession>) -> bool {
        let Some(template) = find_template(template_id) else {
            self.toast(format!("Unsupported document type: {template_id}"));
            return false;
        };
        self.editor = Some(session.unwrap_or_else(|| EditorSession::new(template)));

        let screen = Screen::Editor {
            template_id: template.id.to_string(),
        };
        // Reopening from the editor itself replaces it rather than stacking.
        if matches!(self.state.router.screen_stack.last(), Some(Screen::Editor { .. })) {
            self.state.router.screen_stack.pop();
        }
        self.state.router.screen_stack.push(screen);
        self.state.editor = self.editor.as_ref().map(EditorSession::view);
        self.emit_router();
        true
    }

    /// Drop screen-local state for screens that left the stack, and load
    /// state for screens that just arrived.
    fn sync_screens_to_router(&mut self) {
        let stack = self.state.router.screen_stack.clone();

        let category_on_stack = stack.iter().rev().find_map(|s| match s {
            Screen::Category { category } => Some(*category),
            _ => None,
        });
        match category_on_stack {
            None => self.state.category = None,
            Some(category) => {
                if self.state.category.as_ref().map(|c| c.category) != Some(category) {
                    self.enter_category(category);
                }
            }
        }

        let editor_template = stack.iter().rev().find_map(|s| match s {
            Screen::Editor { template_id } => Some(template_id.clone()),
            _ => None,
        });
        match editor_template {
            None => self.editor = None,
            Some(template_id) => {
                let matches = self
                    .editor
                    .as_ref()
                    .is_some_and(|e| e.template().id == template_id);
                if !matches {
                    self.editor = find_template(&template_id).map(EditorSession::new);
                }
            }
        }
        self.state.editor = self.editor.as_ref().map(EditorSession::view);

        if !stack.contains(&Screen::SavedDocuments) {
            self.state.saved.pending_delete = None;
        }
    }

    pub fn handle_message(&mut self, msg: CoreMsg) {
        match msg {
            CoreMsg::Action(ref action) => {
                // Never log `?action` directly: it carries document content.
                tracing::info!(action = action.tag(), "dispatch");
                self.handle_action(action.clone());
            }
            CoreMsg::Internal(internal) => self.handle_internal(*internal),
        }
    }

    fn handle_internal(&mut self, internal: InternalEvent) {
        match internal {
            InternalEvent::PdfExportFinished { title, result } => {
                self.finish_pdf_export(title, result);
            }
        }
    }

    fn handle_action(&mut self, action: AppAction) {
        match action {
            // Navigation
            AppAction::PushScreen { screen } => {
                match &screen {
                    Screen::Home => {
                        self.state.router.screen_stack.clear();
                    }
                    Screen::Category { category } => {
                        // Every visit starts from the default variant.
                        self.enter_category(*category);
                        self.state.router.screen_stack.push(screen.clone());
                    }
                    Screen::Editor { template_id } => {
                        let template_id = template_id.clone();
                        self.open_editor(&template_id, None);
                        return;
                    }
                    Screen::SavedDocuments => {
                        if self.state.router.screen_stack.last() != Some(&Screen::SavedDocuments) {
                            self.state.router.screen_stack.push(screen.clone());
                        }
                        self.refresh_saved_documents();
                    }
                }
                self.sync_screens_to_router();
                self.emit_router();
            }
            AppAction::UpdateScreenStack { stack } => {
                let was_on_saved =
                    self.state.router.screen_stack.last() == Some(&Screen::SavedDocuments);
                self.state.router.screen_stack = stack;
                self.sync_screens_to_router();
                let now_on_saved =
                    self.state.router.screen_stack.last() == Some(&Screen::SavedDocuments);
                if now_on_saved && !was_on_saved {
                    self.refresh_saved_documents();
                }
                self.emit_router();
            }

            // Catalog
            AppAction::SelectCatalogVariant { variant } => {
                let Some(category) = self.state.category.as_mut() else {
                    return;
                };
                if category.variant == variant {
                    return;
                }
                category.variant = variant;
                category.templates = category_descriptors(category.category, variant);
                self.emit_state();
            }
            AppAction::OpenTemplate { template_id } => {
                self.open_editor(&template_id, None);
            }

            // Editor
            AppAction::OpenEditor {
                template_id,
                document_json,
                editing,
            } => self.open_editor_with_json(&template_id, document_json.as_deref(), editing),
            AppAction::UpdateField { key, value } => {
                let Some(editor) = self.editor.as_mut() else {
                    return;
                };
                if !editor.set_field(&key, value) {
                    tracing::debug!(key = %key, "ignoring unknown field");
                    return;
                }
                self.emit_editor();
            }
            AppAction::AddSectionEntry { section } => {
                let Some(editor) = self.editor.as_mut() else {
                    return;
                };
                if editor.add_section_entry(&section).is_none() {
                    tracing::debug!(section = %section, "ignoring unknown section");
                    return;
                }
                self.emit_editor();
            }
            AppAction::RemoveSectionEntry { section, entry_id } => {
                let Some(editor) = self.editor.as_mut() else {
                    return;
                };
                if editor.remove_section_entry(&section, entry_id) {
                    self.emit_editor();
                }
            }
            AppAction::UpdateSectionField {
                section,
                entry_id,
                key,
                value,
            } => {
                let Some(editor) = self.editor.as_mut() else {
                    return;
                };
                if editor.set_section_field(&section, entry_id, &key, value) {
                    self.emit_editor();
                } else {
                    tracing::debug!(section = %section, entry_id, key = %key, "ignoring unknown section field");
                }
            }
            AppAction::TogglePreview => {
                let Some(editor) = self.editor.as_mut() else {
                    return;
                };
                let previewing = editor.toggle_preview();
                tracing::debug!(previewing, "preview toggled");
                self.emit_editor();
            }
            AppAction::SaveDocument => self.save_document(),
            AppAction::ShareDocument => self.share_document(),

            // Saved documents
            AppAction::RefreshDocuments => {
                self.refresh_saved_documents();
                self.emit_state();
            }
            AppAction::ViewDocument { document_id } => self.view_document(&document_id),
            AppAction::ExportSavedDocument { document_id } => {
                self.export_saved_document(&document_id)
            }
            AppAction::RequestDeleteDocument { document_id } => {
                self.request_delete_document(document_id)
            }
            AppAction::ConfirmDeleteDocument => self.confirm_delete_document(),
            AppAction::CancelDeleteDocument => {
                if self.state.saved.pending_delete.take().is_some() {
                    self.emit_state();
                }
            }

            // UI
            AppAction::ClearToast => {
                if self.state.toast.is_some() {
                    self.state.toast = None;
                    self.emit_toast();
                }
            }

            // Lifecycle
            AppAction::Foregrounded => {
                // Native should send lifecycle signals as actions. Rust owns all state changes.
                if self.state.router.screen_stack.contains(&Screen::SavedDocuments) {
                    self.refresh_saved_documents();
                    self.emit_state();
                }
            }
        }
    }
}
