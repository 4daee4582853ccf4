//! The generic template editor.
//!
//! One `EditorSession` serves every template: values live in vectors parallel
//! to the template's field and section tables, so a key lookup is the only
//! place a string key is matched.

use docsmith_storage_traits::{DocumentId, SavedDocument};
use serde_json::{Map, Value};

use crate::pdf_export::PdfExportRequest;
use crate::render::render_document;
use crate::schema::{FieldSpec, SectionSpec, TemplateSpec};
use crate::state::{EditorField, EditorSectionState, EditorState, SectionEntryState};

/// Document the editor was reopened from.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceDocument {
    pub id: DocumentId,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionEntry {
    pub id: u32,
    pub values: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct EditorSession {
    template: &'static TemplateSpec,
    values: Vec<String>,
    sections: Vec<Vec<SectionEntry>>,
    source: Option<SourceDocument>,
    editing: bool,
    previewing: bool,
}

impl EditorSession {
    /// Fresh editor holding the template defaults.
    pub fn new(template: &'static TemplateSpec) -> Self {
        let values = template.fields.iter().map(|f| f.default.to_string()).collect();
        let sections = template
            .sections
            .iter()
            .map(|section| {
                section
                    .initial
                    .iter()
                    .zip(1u32..)
                    .map(|(entry, id)| SectionEntry {
                        id,
                        values: entry.iter().map(|v| v.to_string()).collect(),
                    })
                    .collect()
            })
            .collect();

        Self {
            template,
            values,
            sections,
            source: None,
            editing: false,
            previewing: false,
        }
    }

    /// Editor pre-populated from a saved document.
    ///
    /// Every field and section the template knows is taken from the document
    /// when present; everything else keeps its default. Document keys the
    /// template does not know are ignored.
    pub fn from_document(
        template: &'static TemplateSpec,
        document: &SavedDocument,
        editing: bool,
    ) -> Self {
        let mut session = Self::new(template);

        for (spec, value) in template.fields.iter().zip(session.values.iter_mut()) {
            if let Some(stored) = document_value(document, spec.key) {
                *value = stored;
            }
        }

        for (spec, entries) in template.sections.iter().zip(session.sections.iter_mut()) {
            if let Some(stored) = document.section(spec.key) {
                *entries = entries_from_json(spec, stored);
            }
        }

        session.source = Some(SourceDocument {
            id: document.id.clone(),
            created_at: document.created_at.clone(),
        });
        session.editing = editing;
        session
    }

    pub fn template(&self) -> &'static TemplateSpec {
        self.template
    }

    pub fn source(&self) -> Option<&SourceDocument> {
        self.source.as_ref()
    }

    pub fn set_source(&mut self, source: SourceDocument) {
        self.source = Some(source);
    }

    pub fn value(&self, key: &str) -> Option<&str> {
        self.template
            .field_index(key)
            .map(|i| self.values[i].as_str())
    }

    pub fn fields(&self) -> impl Iterator<Item = (&'static FieldSpec, &str)> + '_ {
        self.template
            .fields
            .iter()
            .zip(self.values.iter().map(String::as_str))
    }

    pub fn sections(&self) -> impl Iterator<Item = (&'static SectionSpec, &[SectionEntry])> + '_ {
        self.template
            .sections
            .iter()
            .zip(self.sections.iter().map(Vec::as_slice))
    }

    pub fn section_entries(&self, section: &str) -> Option<&[SectionEntry]> {
        let index = self.section_index(section)?;
        Some(&self.sections[index])
    }

    /// Replace a field value. Returns `false` for keys the template lacks.
    pub fn set_field(&mut self, key: &str, value: String) -> bool {
        match self.template.field_index(key) {
            Some(i) => {
                self.values[i] = value;
                true
            }
            None => false,
        }
    }

    /// Append an entry at the section defaults and return its id, one more
    /// than the largest id in the section (1 when the section is empty).
    /// A section already holding `u32::MAX` is renumbered 1..=n first.
    pub fn add_section_entry(&mut self, section: &str) -> Option<u32> {
        let index = self.section_index(section)?;
        let spec = &self.template.sections[index];
        let entries = &mut self.sections[index];
        let id = next_entry_id(entries);
        entries.push(SectionEntry {
            id,
            values: spec.fields.iter().map(|f| f.default.to_string()).collect(),
        });
        Some(id)
    }

    pub fn remove_section_entry(&mut self, section: &str, entry_id: u32) -> bool {
        let Some(index) = self.section_index(section) else {
            return false;
        };
        let entries = &mut self.sections[index];
        let before = entries.len();
        entries.retain(|e| e.id != entry_id);
        entries.len() != before
    }

    pub fn set_section_field(
        &mut self,
        section: &str,
        entry_id: u32,
        key: &str,
        value: String,
    ) -> bool {
        let Some(index) = self.section_index(section) else {
            return false;
        };
        let Some(field) = self.template.sections[index].field_index(key) else {
            return false;
        };
        match self.sections[index].iter_mut().find(|e| e.id == entry_id) {
            Some(entry) => {
                entry.values[field] = value;
                true
            }
            None => false,
        }
    }

    /// Flip between form and preview. Values are untouched.
    pub fn toggle_preview(&mut self) -> bool {
        self.previewing = !self.previewing;
        self.previewing
    }

    /// Build the document to persist from the current values.
    pub fn to_document(&self, id: DocumentId, created_at: String, updated_at: String) -> SavedDocument {
        let mut document = SavedDocument::new(id, self.template.id, created_at);
        document.updated_at = updated_at;

        for (spec, value) in self.fields() {
            match spec.key {
                "title" => document.title = Some(value.to_string()),
                "company" => document.company = Some(value.to_string()),
                key => {
                    document
                        .fields
                        .insert(key.to_string(), Value::String(value.to_string()));
                }
            }
        }

        for (spec, entries) in self.sections() {
            let items = entries
                .iter()
                .map(|entry| {
                    let mut item = Map::new();
                    item.insert("id".to_string(), Value::from(entry.id));
                    for (field, value) in spec.fields.iter().zip(&entry.values) {
                        item.insert(field.key.to_string(), Value::String(value.clone()));
                    }
                    Value::Object(item)
                })
                .collect();
            document
                .fields
                .insert(spec.key.to_string(), Value::Array(items));
        }

        document
    }

    /// Title used for exports and list entries, falling back to the template
    /// name when the user cleared it.
    pub fn display_title(&self) -> String {
        match self.value("title").map(str::trim) {
            Some(title) if !title.is_empty() => title.to_string(),
            _ => self.template.title.to_string(),
        }
    }

    pub fn export_request(&self, default_author: &str, date: String) -> PdfExportRequest {
        let author = match self.value("company").map(str::trim) {
            Some(company) if !company.is_empty() => company.to_string(),
            _ => default_author.to_string(),
        };
        PdfExportRequest {
            title: self.display_title(),
            author,
            date,
            html: render_document(self),
        }
    }

    pub fn view(&self) -> EditorState {
        let fields = self.fields().map(|(spec, value)| editor_field(spec, value)).collect();
        let sections = self
            .sections()
            .map(|(spec, entries)| EditorSectionState {
                key: spec.key.to_string(),
                label: spec.label.to_string(),
                item_label: spec.item_label.to_string(),
                entries: entries
                    .iter()
                    .map(|entry| SectionEntryState {
                        id: entry.id,
                        fields: spec
                            .fields
                            .iter()
                            .zip(&entry.values)
                            .map(|(f, v)| editor_field(f, v))
                            .collect(),
                    })
                    .collect(),
            })
            .collect();

        EditorState {
            template_id: self.template.id.to_string(),
            template_title: self.template.title.to_string(),
            layout: self.template.layout,
            accent_color: self.template.accent_color.to_string(),
            source_document_id: self.source.as_ref().map(|s| s.id.to_string()),
            editing: self.editing,
            previewing: self.previewing,
            fields,
            sections,
            preview_html: self.previewing.then(|| render_document(self)),
        }
    }

    fn section_index(&self, key: &str) -> Option<usize> {
        self.template.section_index(key)
    }
}

fn editor_field(spec: &FieldSpec, value: &str) -> EditorField {
    EditorField {
        key: spec.key.to_string(),
        label: spec.label.to_string(),
        kind: spec.kind,
        value: value.to_string(),
    }
}

fn next_entry_id(entries: &mut [SectionEntry]) -> u32 {
    let max = entries.iter().map(|e| e.id).max().unwrap_or(0);
    if let Some(id) = max.checked_add(1) {
        return id;
    }
    // No id left above the maximum: compact to 1..=n, keeping order.
    for (entry, id) in entries.iter_mut().zip(1u32..) {
        entry.id = id;
    }
    u32::try_from(entries.len()).map_or(u32::MAX, |n| n.saturating_add(1))
}

fn document_value(document: &SavedDocument, key: &str) -> Option<String> {
    match key {
        "title" => document.title.clone(),
        "company" => document.company.clone(),
        _ => document.field_text(key),
    }
}

fn json_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn json_entry_id(value: Option<&Value>) -> Option<u32> {
    match value? {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Rebuild section entries from stored JSON. Entries without a usable id, or
/// repeating an earlier id, get the next free one.
fn entries_from_json(spec: &SectionSpec, stored: &[Value]) -> Vec<SectionEntry> {
    let mut entries: Vec<SectionEntry> = Vec::with_capacity(stored.len());
    let mut unassigned = Vec::new();

    for item in stored {
        let Some(object) = item.as_object() else {
            continue;
        };
        let values = spec
            .fields
            .iter()
            .map(|f| {
                object
                    .get(f.key)
                    .and_then(json_text)
                    .unwrap_or_else(|| f.default.to_string())
            })
            .collect();

        match json_entry_id(object.get("id")) {
            Some(id) if !entries.iter().any(|e| e.id == id) => {
                entries.push(SectionEntry { id, values });
            }
            _ => {
                unassigned.push(entries.len());
                entries.push(SectionEntry { id: 0, values });
            }
        }
    }

    for index in unassigned {
        entries[index].id = next_entry_id(&mut entries);
    }
    entries
}
