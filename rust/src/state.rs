use crate::catalog::{category_summaries, CategorySummary, StyleVariant, TemplateCategory, TemplateDescriptor};
use crate::schema::{DocumentLayout, FieldKind};

#[derive(uniffi::Record, Clone, Debug)]
pub struct AppState {
    pub rev: u64,
    pub router: Router,
    pub categories: Vec<CategorySummary>,
    pub category: Option<CategoryState>,
    pub editor: Option<EditorState>,
    pub saved: SavedDocumentsState,
    pub busy: BusyState,
    pub last_export: Option<ExportedFile>,
    pub toast: Option<String>,
}

impl AppState {
    pub fn empty() -> Self {
        Self {
            rev: 0,
            router: Router {
                default_screen: Screen::Home,
                screen_stack: vec![],
            },
            categories: category_summaries(),
            category: None,
            editor: None,
            saved: SavedDocumentsState::empty(),
            busy: BusyState::idle(),
            last_export: None,
            toast: None,
        }
    }
}

/// "In flight" flags for store and export operations that the UI should reflect.
#[derive(uniffi::Record, Clone, Debug, PartialEq, Eq)]
pub struct BusyState {
    pub saving: bool,
    pub deleting: bool,
    pub exporting: bool,
}

impl BusyState {
    pub fn idle() -> Self {
        Self {
            saving: false,
            deleting: false,
            exporting: false,
        }
    }
}

#[derive(uniffi::Record, Clone, Debug)]
pub struct Router {
    pub default_screen: Screen,
    pub screen_stack: Vec<Screen>,
}

#[derive(uniffi::Enum, Clone, Debug, PartialEq)]
pub enum Screen {
    Home,
    Category { category: TemplateCategory },
    Editor { template_id: String },
    SavedDocuments,
}

/// Gallery of one category. Rebuilt (variant back to Classic) on every visit.
#[derive(uniffi::Record, Clone, Debug, PartialEq)]
pub struct CategoryState {
    pub category: TemplateCategory,
    pub title: String,
    pub variant: StyleVariant,
    pub variants: Vec<StyleVariant>,
    pub templates: Vec<TemplateDescriptor>,
}

#[derive(uniffi::Record, Clone, Debug, PartialEq)]
pub struct EditorField {
    pub key: String,
    pub label: String,
    pub kind: FieldKind,
    pub value: String,
}

#[derive(uniffi::Record, Clone, Debug, PartialEq)]
pub struct SectionEntryState {
    pub id: u32,
    pub fields: Vec<EditorField>,
}

#[derive(uniffi::Record, Clone, Debug, PartialEq)]
pub struct EditorSectionState {
    pub key: String,
    pub label: String,
    pub item_label: String,
    pub entries: Vec<SectionEntryState>,
}

#[derive(uniffi::Record, Clone, Debug, PartialEq)]
pub struct EditorState {
    pub template_id: String,
    pub template_title: String,
    pub layout: DocumentLayout,
    pub accent_color: String,
    /// Id of the saved document the editor was opened from, if any.
    pub source_document_id: Option<String>,
    pub editing: bool,
    pub previewing: bool,
    pub fields: Vec<EditorField>,
    pub sections: Vec<EditorSectionState>,
    /// Rendered document; present only while previewing.
    pub preview_html: Option<String>,
}

#[derive(uniffi::Record, Clone, Debug, PartialEq)]
pub struct SavedDocumentSummary {
    pub id: String,
    pub doc_type: String,
    pub type_label: String,
    pub icon: String,
    pub title: String,
    pub company: String,
    pub created_at: String,
    pub updated_at: String,
    pub supported: bool,
}

#[derive(uniffi::Record, Clone, Debug, PartialEq, Eq, Default)]
pub struct DocumentStats {
    pub total: u32,
    pub contracts: u32,
    pub memos: u32,
}

#[derive(uniffi::Record, Clone, Debug, PartialEq)]
pub struct PendingDelete {
    pub document_id: String,
    pub title: String,
}

#[derive(uniffi::Record, Clone, Debug, PartialEq)]
pub struct SavedDocumentsState {
    pub documents: Vec<SavedDocumentSummary>,
    pub stats: DocumentStats,
    pub pending_delete: Option<PendingDelete>,
    pub persistent: bool,
}

impl SavedDocumentsState {
    pub fn empty() -> Self {
        Self {
            documents: vec![],
            stats: DocumentStats::default(),
            pending_delete: None,
            persistent: false,
        }
    }
}

/// Result of the last successful PDF export, for the platform share sheet.
#[derive(uniffi::Record, Clone, Debug, PartialEq)]
pub struct ExportedFile {
    pub title: String,
    pub file_path: String,
}
