//! Declarative template schemas.
//!
//! Every template is plain data: a list of scalar fields plus optional
//! repeatable sections. The generic editor, the preview renderer and the
//! catalog all read from these tables; nothing here holds behavior beyond
//! lookups.

use crate::catalog::TemplateCategory;

#[derive(uniffi::Enum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Multiline,
    Date,
    Number,
    Email,
    Phone,
}

/// One editable input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub default: &'static str,
}

/// A repeatable list of small records (contract clauses, agenda items, ...).
///
/// `initial` holds the entries a fresh editor starts with, each one listing
/// values in `fields` order. New entries start from each field's `default`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub item_label: &'static str,
    pub fields: &'static [FieldSpec],
    pub initial: &'static [&'static [&'static str]],
}

impl SectionSpec {
    /// Position of a field in `fields`, which is also its slot in every entry.
    pub fn field_index(&self, key: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.key == key)
    }
}

/// How the preview arranges a document.
#[derive(uniffi::Enum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentLayout {
    /// Letterhead, addressee block, flowing body.
    Letter,
    /// Numbered sections under a centered title.
    Contract,
    /// Header grid (to/from/date) over a body.
    Memo,
    /// Banner title with a table of section entries.
    Program,
    /// Boxed label/value rows.
    Form,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateSpec {
    pub id: &'static str,
    pub category: TemplateCategory,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub accent_color: &'static str,
    pub layout: DocumentLayout,
    pub fields: &'static [FieldSpec],
    pub sections: &'static [SectionSpec],
}

impl TemplateSpec {
    /// Navigation route of the editor for this template.
    pub fn route(&self) -> String {
        format!("/templates/{}", self.id)
    }

    pub fn field_index(&self, key: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.key == key)
    }

    pub fn section_index(&self, key: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.key == key)
    }
}

pub(crate) const fn field(
    key: &'static str,
    label: &'static str,
    kind: FieldKind,
    default: &'static str,
) -> FieldSpec {
    FieldSpec {
        key,
        label,
        kind,
        default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::{all_templates, find_template};

    #[test]
    fn every_template_has_title_and_company() {
        for template in all_templates() {
            assert!(template.field_index("title").is_some(), "{} lacks title", template.id);
            assert!(template.field_index("company").is_some(), "{} lacks company", template.id);
        }
    }

    #[test]
    fn keys_are_unique_within_a_template() {
        for template in all_templates() {
            let mut keys: Vec<&str> = template.fields.iter().map(|f| f.key).collect();
            keys.extend(template.sections.iter().map(|s| s.key));
            let before = keys.len();
            keys.sort_unstable();
            keys.dedup();
            assert_eq!(keys.len(), before, "duplicate key in {}", template.id);
            for reserved in ["id", "type", "createdAt", "updatedAt", "schemaVersion"] {
                assert!(!keys.contains(&reserved), "{} uses {reserved}", template.id);
            }

            for section in template.sections {
                assert!(section.field_index("id").is_none(), "{} reuses id", section.key);
                for entry in section.initial {
                    assert_eq!(entry.len(), section.fields.len(), "{}", section.key);
                }
            }
        }
    }

    #[test]
    fn route_is_derived_from_id() {
        let contract = find_template("employment-contract").unwrap();
        assert_eq!(contract.route(), "/templates/employment-contract");
        assert!(contract.section_index("clauses").is_some());
        assert!(contract.section_index("missing").is_none());
    }
}
