use crate::schema::TemplateSpec;
use crate::templates::{all_templates, templates_in};

#[derive(uniffi::Enum, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TemplateCategory {
    Institutional,
    HumanResources,
    Events,
    Marketing,
    InternalCommunications,
    Forms,
}

impl TemplateCategory {
    pub fn all() -> [TemplateCategory; 6] {
        [
            Self::Institutional,
            Self::HumanResources,
            Self::Events,
            Self::Marketing,
            Self::InternalCommunications,
            Self::Forms,
        ]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Institutional => "Institutional",
            Self::HumanResources => "Human Resources",
            Self::Events => "Events",
            Self::Marketing => "Marketing",
            Self::InternalCommunications => "Internal Communications",
            Self::Forms => "Forms",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Institutional => "building.columns",
            Self::HumanResources => "person.2",
            Self::Events => "calendar",
            Self::Marketing => "megaphone",
            Self::InternalCommunications => "bubble.left.and.bubble.right",
            Self::Forms => "list.clipboard",
        }
    }
}

/// Visual variant of a category gallery. Variants only restyle the cards; the
/// set of templates and their routes never change.
#[derive(uniffi::Enum, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StyleVariant {
    #[default]
    Classic,
    Vibrant,
    Minimal,
}

impl StyleVariant {
    pub fn all() -> [StyleVariant; 3] {
        [Self::Classic, Self::Vibrant, Self::Minimal]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Classic => "Classic",
            Self::Vibrant => "Vibrant",
            Self::Minimal => "Minimal",
        }
    }
}

const VIBRANT_PALETTE: &[&str] = &["#F43F5E", "#8B5CF6", "#06B6D4", "#F97316", "#22C55E", "#EAB308"];
const MINIMAL_ACCENT: &str = "#374151";

#[derive(uniffi::Record, Clone, Debug, PartialEq)]
pub struct TemplateDescriptor {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub accent_color: String,
    pub route: String,
}

#[derive(uniffi::Record, Clone, Debug, PartialEq)]
pub struct CategorySummary {
    pub category: TemplateCategory,
    pub title: String,
    pub icon: String,
    pub template_count: u32,
}

pub fn describe(template: &TemplateSpec, variant: StyleVariant, position: usize) -> TemplateDescriptor {
    let (icon, accent_color) = match variant {
        StyleVariant::Classic => (template.icon.to_string(), template.accent_color.to_string()),
        StyleVariant::Vibrant => (
            format!("{}.fill", template.icon),
            VIBRANT_PALETTE[position % VIBRANT_PALETTE.len()].to_string(),
        ),
        StyleVariant::Minimal => (template.icon.to_string(), MINIMAL_ACCENT.to_string()),
    };
    TemplateDescriptor {
        id: template.id.to_string(),
        title: template.title.to_string(),
        description: template.description.to_string(),
        icon,
        accent_color,
        route: template.route(),
    }
}

pub fn category_descriptors(
    category: TemplateCategory,
    variant: StyleVariant,
) -> Vec<TemplateDescriptor> {
    templates_in(category)
        .enumerate()
        .map(|(position, template)| describe(template, variant, position))
        .collect()
}

pub fn category_summaries() -> Vec<CategorySummary> {
    TemplateCategory::all()
        .into_iter()
        .map(|category| CategorySummary {
            category,
            title: category.title().to_string(),
            icon: category.icon().to_string(),
            template_count: all_templates()
                .iter()
                .filter(|t| t.category == category)
                .count() as u32,
        })
        .collect()
}
