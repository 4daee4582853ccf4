use crate::catalog::StyleVariant;
use crate::state::Screen;

#[derive(uniffi::Enum, Debug, Clone)]
pub enum AppAction {
    // Navigation
    PushScreen {
        screen: Screen,
    },
    UpdateScreenStack {
        stack: Vec<Screen>,
    },

    // Catalog
    SelectCatalogVariant {
        variant: StyleVariant,
    },
    OpenTemplate {
        template_id: String,
    },

    // Editor
    /// Open an editor, optionally seeded from a JSON-encoded saved document.
    OpenEditor {
        template_id: String,
        document_json: Option<String>,
        editing: bool,
    },
    UpdateField {
        key: String,
        value: String,
    },
    AddSectionEntry {
        section: String,
    },
    RemoveSectionEntry {
        section: String,
        entry_id: u32,
    },
    UpdateSectionField {
        section: String,
        entry_id: u32,
        key: String,
        value: String,
    },
    TogglePreview,
    SaveDocument,
    ShareDocument,

    // Saved documents
    RefreshDocuments,
    ViewDocument {
        document_id: String,
    },
    ExportSavedDocument {
        document_id: String,
    },
    RequestDeleteDocument {
        document_id: String,
    },
    ConfirmDeleteDocument,
    CancelDeleteDocument,

    // UI
    ClearToast,

    // Lifecycle
    Foregrounded,
}

impl AppAction {
    /// Log-safe action tag (never includes user-entered document content).
    pub fn tag(&self) -> &'static str {
        match self {
            // Navigation
            AppAction::PushScreen { .. } => "PushScreen",
            AppAction::UpdateScreenStack { .. } => "UpdateScreenStack",

            // Catalog
            AppAction::SelectCatalogVariant { .. } => "SelectCatalogVariant",
            AppAction::OpenTemplate { .. } => "OpenTemplate",

            // Editor
            AppAction::OpenEditor { .. } => "OpenEditor",
            AppAction::UpdateField { .. } => "UpdateField",
            AppAction::AddSectionEntry { .. } => "AddSectionEntry",
            AppAction::RemoveSectionEntry { .. } => "RemoveSectionEntry",
            AppAction::UpdateSectionField { .. } => "UpdateSectionField",
            AppAction::TogglePreview => "TogglePreview",
            AppAction::SaveDocument => "SaveDocument",
            AppAction::ShareDocument => "ShareDocument",

            // Saved documents
            AppAction::RefreshDocuments => "RefreshDocuments",
            AppAction::ViewDocument { .. } => "ViewDocument",
            AppAction::ExportSavedDocument { .. } => "ExportSavedDocument",
            AppAction::RequestDeleteDocument { .. } => "RequestDeleteDocument",
            AppAction::ConfirmDeleteDocument => "ConfirmDeleteDocument",
            AppAction::CancelDeleteDocument => "CancelDeleteDocument",

            // UI
            AppAction::ClearToast => "ClearToast",

            // Lifecycle
            AppAction::Foregrounded => "Foregrounded",
        }
    }
}
