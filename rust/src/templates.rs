//! The built-in template catalog.

use crate::catalog::TemplateCategory;
use crate::schema::FieldKind::{Date, Email, Multiline, Number, Phone, Text};
use crate::schema::{field, DocumentLayout, SectionSpec, TemplateSpec};

/// Document type tag of employment contracts (counted on the saved list).
pub const CONTRACT_TYPE: &str = "employment-contract";
/// Document type tag of internal memos (counted on the saved list).
pub const MEMO_TYPE: &str = "internal-memo";

const TITLE: &str = "title";
const COMPANY: &str = "company";

static TEMPLATES: &[TemplateSpec] = &[
    // Institutional
    TemplateSpec {
        id: "company-profile",
        category: TemplateCategory::Institutional,
        title: "Company Profile",
        description: "Present who you are, what you do and what you stand for.",
        icon: "building",
        accent_color: "#1E3A8A",
        layout: DocumentLayout::Letter,
        fields: &[
            field(TITLE, "Title", Text, "Company Profile"),
            field(COMPANY, "Company", Text, "Your Company"),
            field("founded", "Founded", Number, "2010"),
            field("mission", "Mission", Multiline, "Our mission is to deliver lasting value to our clients."),
            field("vision", "Vision", Multiline, "To be the reference partner in our market."),
            field("website", "Website", Text, "www.example.com"),
        ],
        sections: &[SectionSpec {
            key: "values",
            label: "Values",
            item_label: "Value",
            fields: &[
                field("name", "Name", Text, "New value"),
                field("description", "Description", Multiline, ""),
            ],
            initial: &[
                &["Integrity", "We do what we say."],
                &["Excellence", "We raise the bar every day."],
            ],
        }],
    },
    TemplateSpec {
        id: "official-letter",
        category: TemplateCategory::Institutional,
        title: "Official Letter",
        description: "Formal correspondence on company letterhead.",
        icon: "envelope",
        accent_color: "#334155",
        layout: DocumentLayout::Letter,
        fields: &[
            field(TITLE, "Subject", Text, "Official Letter"),
            field(COMPANY, "Company", Text, "Your Company"),
            field("date", "Date", Date, ""),
            field("recipient", "Recipient", Text, "Recipient Name"),
            field("recipient_address", "Recipient Address", Multiline, ""),
            field("body", "Body", Multiline, "Dear Sir or Madam,"),
            field("signatory", "Signatory", Text, "Director"),
        ],
        sections: &[],
    },
    TemplateSpec {
        id: "certificate",
        category: TemplateCategory::Institutional,
        title: "Certificate of Recognition",
        description: "Recognize achievements with a formal certificate.",
        icon: "rosette",
        accent_color: "#B45309",
        layout: DocumentLayout::Letter,
        fields: &[
            field(TITLE, "Title", Text, "Certificate of Recognition"),
            field(COMPANY, "Company", Text, "Your Company"),
            field("recipient", "Awarded To", Text, "Recipient Name"),
            field("reason", "In Recognition Of", Multiline, "Outstanding contribution"),
            field("date", "Date", Date, ""),
            field("signatory", "Signatory", Text, "Director"),
        ],
        sections: &[],
    },
    // Human resources
    TemplateSpec {
        id: CONTRACT_TYPE,
        category: TemplateCategory::HumanResources,
        title: "Employment Contract",
        description: "Employment agreement with editable clauses.",
        icon: "doc.text",
        accent_color: "#0F766E",
        layout: DocumentLayout::Contract,
        fields: &[
            field(TITLE, "Title", Text, "Employment Contract"),
            field(COMPANY, "Employer", Text, "Your Company"),
            field("employee_name", "Employee", Text, "Employee Name"),
            field("position", "Position", Text, "Position"),
            field("start_date", "Start Date", Date, ""),
            field("salary", "Salary", Number, ""),
            field("work_hours", "Working Hours", Text, "40 hours per week"),
        ],
        sections: &[SectionSpec {
            key: "clauses",
            label: "Clauses",
            item_label: "Clause",
            fields: &[
                field("title", "Title", Text, "New clause"),
                field("content", "Content", Multiline, ""),
            ],
            initial: &[
                &["Purpose", "The employee is hired to perform the duties of the position above."],
                &["Term", "This contract is entered into for an indefinite period."],
                &["Confidentiality", "The employee keeps all company information confidential."],
            ],
        }],
    },
    TemplateSpec {
        id: "job-offer",
        category: TemplateCategory::HumanResources,
        title: "Job Offer",
        description: "Offer letter with role, compensation and start date.",
        icon: "briefcase",
        accent_color: "#047857",
        layout: DocumentLayout::Letter,
        fields: &[
            field(TITLE, "Title", Text, "Job Offer"),
            field(COMPANY, "Company", Text, "Your Company"),
            field("candidate", "Candidate", Text, "Candidate Name"),
            field("position", "Position", Text, "Position"),
            field("salary", "Salary", Number, ""),
            field("start_date", "Start Date", Date, ""),
            field("benefits", "Benefits", Multiline, "Health plan, meal allowance"),
            field("response_deadline", "Reply By", Date, ""),
        ],
        sections: &[],
    },
    TemplateSpec {
        id: "training-plan",
        category: TemplateCategory::HumanResources,
        title: "Training Plan",
        description: "Structured training program split into modules.",
        icon: "graduationcap",
        accent_color: "#7C3AED",
        layout: DocumentLayout::Program,
        fields: &[
            field(TITLE, "Title", Text, "Training Plan"),
            field(COMPANY, "Company", Text, "Your Company"),
            field("audience", "Audience", Text, "New hires"),
            field("objective", "Objective", Multiline, "Prepare the team for the new process."),
            field("start_date", "Start Date", Date, ""),
        ],
        sections: &[SectionSpec {
            key: "modules",
            label: "Modules",
            item_label: "Module",
            fields: &[
                field("title", "Title", Text, "New module"),
                field("duration", "Duration", Text, "1h"),
                field("instructor", "Instructor", Text, ""),
                field("content", "Content", Multiline, ""),
            ],
            initial: &[&["Introduction", "2h", "", "Company overview and goals."]],
        }],
    },
    // Events
    TemplateSpec {
        id: "event-invitation",
        category: TemplateCategory::Events,
        title: "Event Invitation",
        description: "Invite guests with date, venue and RSVP details.",
        icon: "calendar",
        accent_color: "#DB2777",
        layout: DocumentLayout::Letter,
        fields: &[
            field(TITLE, "Event", Text, "You're Invited"),
            field(COMPANY, "Host", Text, "Your Company"),
            field("date", "Date", Date, ""),
            field("time", "Time", Text, "19:00"),
            field("venue", "Venue", Text, "Main Hall"),
            field("message", "Message", Multiline, "We would be delighted to have you with us."),
            field("rsvp", "RSVP", Email, "events@example.com"),
        ],
        sections: &[],
    },
    TemplateSpec {
        id: "event-program",
        category: TemplateCategory::Events,
        title: "Event Program",
        description: "Schedule of sessions and speakers.",
        icon: "list.bullet.rectangle",
        accent_color: "#C026D3",
        layout: DocumentLayout::Program,
        fields: &[
            field(TITLE, "Event", Text, "Event Program"),
            field(COMPANY, "Organizer", Text, "Your Company"),
            field("date", "Date", Date, ""),
            field("venue", "Venue", Text, "Main Hall"),
        ],
        sections: &[SectionSpec {
            key: "sessions",
            label: "Sessions",
            item_label: "Session",
            fields: &[
                field("time", "Time", Text, "00:00"),
                field("title", "Title", Text, "New session"),
                field("speaker", "Speaker", Text, ""),
            ],
            initial: &[
                &["09:00", "Welcome", ""],
                &["10:00", "Keynote", ""],
            ],
        }],
    },
    TemplateSpec {
        id: "event-budget",
        category: TemplateCategory::Events,
        title: "Event Budget",
        description: "Itemized cost estimate for an event.",
        icon: "dollarsign.circle",
        accent_color: "#9333EA",
        layout: DocumentLayout::Form,
        fields: &[
            field(TITLE, "Event", Text, "Event Budget"),
            field(COMPANY, "Company", Text, "Your Company"),
            field("date", "Date", Date, ""),
            field("attendees", "Expected Attendees", Number, "50"),
            field("notes", "Notes", Multiline, ""),
        ],
        sections: &[SectionSpec {
            key: "items",
            label: "Items",
            item_label: "Item",
            fields: &[
                field("description", "Description", Text, "New item"),
                field("amount", "Amount", Number, "0"),
            ],
            initial: &[&["Venue", "0"], &["Catering", "0"]],
        }],
    },
    // Marketing
    TemplateSpec {
        id: "press-release",
        category: TemplateCategory::Marketing,
        title: "Press Release",
        description: "Announce news to the press.",
        icon: "megaphone",
        accent_color: "#DC2626",
        layout: DocumentLayout::Letter,
        fields: &[
            field(TITLE, "Headline", Text, "Press Release"),
            field(COMPANY, "Company", Text, "Your Company"),
            field("city", "City", Text, ""),
            field("date", "Date", Date, ""),
            field("lead", "Lead", Multiline, ""),
            field("body", "Body", Multiline, ""),
            field("contact_email", "Press Contact", Email, "press@example.com"),
        ],
        sections: &[],
    },
    TemplateSpec {
        id: "newsletter",
        category: TemplateCategory::Marketing,
        title: "Newsletter",
        description: "Periodic newsletter made of articles.",
        icon: "newspaper",
        accent_color: "#EA580C",
        layout: DocumentLayout::Program,
        fields: &[
            field(TITLE, "Title", Text, "Newsletter"),
            field(COMPANY, "Company", Text, "Your Company"),
            field("edition", "Edition", Text, "#1"),
            field("date", "Date", Date, ""),
            field("intro", "Introduction", Multiline, ""),
        ],
        sections: &[SectionSpec {
            key: "articles",
            label: "Articles",
            item_label: "Article",
            fields: &[
                field("headline", "Headline", Text, "New article"),
                field("body", "Body", Multiline, ""),
            ],
            initial: &[&["Highlights", ""]],
        }],
    },
    TemplateSpec {
        id: "product-flyer",
        category: TemplateCategory::Marketing,
        title: "Product Flyer",
        description: "One-page product presentation.",
        icon: "tag",
        accent_color: "#F59E0B",
        layout: DocumentLayout::Program,
        fields: &[
            field(TITLE, "Product", Text, "Product Name"),
            field(COMPANY, "Company", Text, "Your Company"),
            field("tagline", "Tagline", Text, ""),
            field("price", "Price", Number, ""),
            field("call_to_action", "Call to Action", Text, "Order now"),
            field("phone", "Phone", Phone, ""),
        ],
        sections: &[SectionSpec {
            key: "features",
            label: "Features",
            item_label: "Feature",
            fields: &[
                field("name", "Name", Text, "New feature"),
                field("description", "Description", Multiline, ""),
            ],
            initial: &[],
        }],
    },
    // Internal communications
    TemplateSpec {
        id: MEMO_TYPE,
        category: TemplateCategory::InternalCommunications,
        title: "Internal Memo",
        description: "Short internal note to a team or department.",
        icon: "note.text",
        accent_color: "#2563EB",
        layout: DocumentLayout::Memo,
        fields: &[
            field(TITLE, "Subject", Text, "Internal Memo"),
            field(COMPANY, "Company", Text, "Your Company"),
            field("to", "To", Text, "All staff"),
            field("from", "From", Text, "Management"),
            field("date", "Date", Date, ""),
            field("body", "Message", Multiline, ""),
        ],
        sections: &[],
    },
    TemplateSpec {
        id: "meeting-minutes",
        category: TemplateCategory::InternalCommunications,
        title: "Meeting Minutes",
        description: "Record attendees, agenda and decisions.",
        icon: "person.3",
        accent_color: "#0284C7",
        layout: DocumentLayout::Program,
        fields: &[
            field(TITLE, "Title", Text, "Meeting Minutes"),
            field(COMPANY, "Company", Text, "Your Company"),
            field("date", "Date", Date, ""),
            field("location", "Location", Text, "Meeting room"),
            field("attendees", "Attendees", Multiline, ""),
        ],
        sections: &[SectionSpec {
            key: "agenda",
            label: "Agenda",
            item_label: "Topic",
            fields: &[
                field("topic", "Topic", Text, "New topic"),
                field("owner", "Owner", Text, ""),
                field("decision", "Decision", Multiline, ""),
            ],
            initial: &[&["Opening", "", ""]],
        }],
    },
    TemplateSpec {
        id: "announcement",
        category: TemplateCategory::InternalCommunications,
        title: "Announcement",
        description: "Company-wide announcement.",
        icon: "bell",
        accent_color: "#4F46E5",
        layout: DocumentLayout::Memo,
        fields: &[
            field(TITLE, "Headline", Text, "Announcement"),
            field(COMPANY, "Company", Text, "Your Company"),
            field("audience", "Audience", Text, "Everyone"),
            field("date", "Date", Date, ""),
            field("body", "Message", Multiline, ""),
        ],
        sections: &[],
    },
    // Forms
    TemplateSpec {
        id: "leave-request",
        category: TemplateCategory::Forms,
        title: "Leave Request",
        description: "Request days off from work.",
        icon: "airplane",
        accent_color: "#059669",
        layout: DocumentLayout::Form,
        fields: &[
            field(TITLE, "Title", Text, "Leave Request"),
            field(COMPANY, "Company", Text, "Your Company"),
            field("employee_name", "Employee", Text, ""),
            field("department", "Department", Text, ""),
            field("start_date", "First Day", Date, ""),
            field("end_date", "Last Day", Date, ""),
            field("reason", "Reason", Multiline, ""),
        ],
        sections: &[],
    },
    TemplateSpec {
        id: "expense-report",
        category: TemplateCategory::Forms,
        title: "Expense Report",
        description: "List expenses for reimbursement.",
        icon: "creditcard",
        accent_color: "#65A30D",
        layout: DocumentLayout::Form,
        fields: &[
            field(TITLE, "Title", Text, "Expense Report"),
            field(COMPANY, "Company", Text, "Your Company"),
            field("employee_name", "Employee", Text, ""),
            field("period", "Period", Text, ""),
            field("email", "Email", Email, ""),
        ],
        sections: &[SectionSpec {
            key: "expenses",
            label: "Expenses",
            item_label: "Expense",
            fields: &[
                field("date", "Date", Date, ""),
                field("description", "Description", Text, "New expense"),
                field("amount", "Amount", Number, "0"),
            ],
            initial: &[],
        }],
    },
    TemplateSpec {
        id: "feedback-form",
        category: TemplateCategory::Forms,
        title: "Feedback Form",
        description: "Collect answers to a list of questions.",
        icon: "checklist",
        accent_color: "#16A34A",
        layout: DocumentLayout::Form,
        fields: &[
            field(TITLE, "Title", Text, "Feedback Form"),
            field(COMPANY, "Company", Text, "Your Company"),
            field("respondent", "Respondent", Text, ""),
            field("date", "Date", Date, ""),
        ],
        sections: &[SectionSpec {
            key: "questions",
            label: "Questions",
            item_label: "Question",
            fields: &[
                field("question", "Question", Text, "New question"),
                field("answer", "Answer", Multiline, ""),
            ],
            initial: &[
                &["How satisfied are you overall?", ""],
                &["What should we improve?", ""],
            ],
        }],
    },
];

pub fn all_templates() -> &'static [TemplateSpec] {
    TEMPLATES
}

pub fn find_template(id: &str) -> Option<&'static TemplateSpec> {
    TEMPLATES.iter().find(|t| t.id == id)
}

pub fn templates_in(category: TemplateCategory) -> impl Iterator<Item = &'static TemplateSpec> {
    TEMPLATES.iter().filter(move |t| t.category == category)
}

/// Label and icon shown on the saved documents list for a type tag.
pub fn type_label_and_icon(doc_type: &str) -> (&'static str, &'static str) {
    match find_template(doc_type) {
        Some(template) => (template.title, template.icon),
        None => ("Document", "doc"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<&str> = all_templates().iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), all_templates().len());
    }

    #[test]
    fn every_category_has_templates() {
        for category in TemplateCategory::all() {
            assert!(templates_in(category).count() >= 3, "{category:?}");
        }
    }

    #[test]
    fn unknown_type_falls_back_to_generic_label() {
        assert_eq!(type_label_and_icon("mystery"), ("Document", "doc"));
        assert_eq!(
            type_label_and_icon(CONTRACT_TYPE),
            ("Employment Contract", "doc.text")
        );
    }
}
