//! HTML rendering of a document, shared by the preview and PDF export.

use crate::editor::{EditorSession, SectionEntry};
use crate::schema::{DocumentLayout, FieldKind, FieldSpec, SectionSpec, TemplateSpec};

struct Theme {
    accent: &'static str,
    font: &'static str,
    title_align: &'static str,
}

impl Theme {
    fn for_template(template: &TemplateSpec) -> Self {
        let (font, title_align) = match template.layout {
            DocumentLayout::Letter => ("Georgia, 'Times New Roman', serif", "left"),
            DocumentLayout::Contract => ("Georgia, 'Times New Roman', serif", "center"),
            DocumentLayout::Memo => ("Helvetica, Arial, sans-serif", "left"),
            DocumentLayout::Program => ("Helvetica, Arial, sans-serif", "center"),
            DocumentLayout::Form => ("Helvetica, Arial, sans-serif", "left"),
        };
        Self {
            accent: template.accent_color,
            font,
            title_align,
        }
    }

    fn css(&self) -> String {
        format!(
            "body{{font-family:{font};color:#111827;margin:40px;line-height:1.5}}\
             header{{border-bottom:3px solid {accent};margin-bottom:24px;padding-bottom:8px}}\
             .company{{color:{accent};font-weight:bold;text-transform:uppercase;letter-spacing:1px}}\
             h1{{color:{accent};text-align:{align};margin:8px 0}}\
             h2{{color:{accent};font-size:1.1em;margin-top:24px}}\
             table{{border-collapse:collapse;width:100%}}\
             th{{background:{accent};color:#fff;text-align:left;padding:6px}}\
             td{{border:1px solid #E5E7EB;padding:6px;vertical-align:top}}\
             .label{{color:#6B7280;font-size:0.85em}}\
             footer{{margin-top:40px;font-size:0.8em;color:#9CA3AF;text-align:center}}",
            font = self.font,
            accent = self.accent,
            align = self.title_align,
        )
    }
}

pub fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

fn rich_text(text: &str) -> String {
    html_escape(text).replace('\n', "<br>")
}

fn is_header_field(spec: &FieldSpec) -> bool {
    matches!(spec.key, "title" | "company")
}

pub fn render_document(session: &EditorSession) -> String {
    let template = session.template();
    let theme = Theme::for_template(template);
    let title = session.display_title();
    let company = session.value("company").unwrap_or_default();

    let mut html = String::with_capacity(4096);
    html.push_str("<!DOCTYPE html><html><head><meta charset=\"utf-8\">");
    html.push_str(&format!("<title>{}</title>", html_escape(&title)));
    html.push_str(&format!("<style>{}</style></head><body>", theme.css()));

    html.push_str("<header>");
    if !company.trim().is_empty() {
        html.push_str(&format!("<div class=\"company\">{}</div>", html_escape(company)));
    }
    html.push_str(&format!("<h1>{}</h1></header>", html_escape(&title)));

    let body_fields: Vec<(&FieldSpec, &str)> = session
        .fields()
        .filter(|(spec, _)| !is_header_field(spec))
        .collect();

    match template.layout {
        DocumentLayout::Letter | DocumentLayout::Contract => render_flowing(&mut html, &body_fields),
        DocumentLayout::Memo => render_memo(&mut html, &body_fields),
        DocumentLayout::Program | DocumentLayout::Form => render_rows(&mut html, &body_fields),
    }

    for (spec, entries) in session.sections() {
        match template.layout {
            DocumentLayout::Contract | DocumentLayout::Letter => {
                render_numbered_section(&mut html, spec, entries)
            }
            _ => render_section_table(&mut html, spec, entries),
        }
    }

    html.push_str(&format!(
        "<footer>{} &middot; {}</footer></body></html>",
        html_escape(template.title),
        html_escape(company)
    ));
    html
}

fn render_flowing(html: &mut String, fields: &[(&FieldSpec, &str)]) {
    for (spec, value) in fields {
        if value.trim().is_empty() {
            continue;
        }
        match spec.kind {
            FieldKind::Multiline => html.push_str(&format!("<p>{}</p>", rich_text(value))),
            _ => html.push_str(&format!(
                "<p><span class=\"label\">{}:</span> {}</p>",
                html_escape(spec.label),
                html_escape(value)
            )),
        }
    }
}

fn render_memo(html: &mut String, fields: &[(&FieldSpec, &str)]) {
    let (body, heading): (Vec<_>, Vec<_>) = fields
        .iter()
        .partition(|(spec, _)| spec.kind == FieldKind::Multiline);

    html.push_str("<table>");
    for (spec, value) in heading {
        html.push_str(&format!(
            "<tr><td class=\"label\">{}</td><td>{}</td></tr>",
            html_escape(spec.label),
            html_escape(value)
        ));
    }
    html.push_str("</table>");
    for (_, value) in body {
        html.push_str(&format!("<p>{}</p>", rich_text(value)));
    }
}

fn render_rows(html: &mut String, fields: &[(&FieldSpec, &str)]) {
    if fields.is_empty() {
        return;
    }
    html.push_str("<table>");
    for (spec, value) in fields {
        html.push_str(&format!(
            "<tr><td class=\"label\">{}</td><td>{}</td></tr>",
            html_escape(spec.label),
            rich_text(value)
        ));
    }
    html.push_str("</table>");
}

fn render_numbered_section(html: &mut String, spec: &SectionSpec, entries: &[SectionEntry]) {
    if entries.is_empty() {
        return;
    }
    html.push_str(&format!("<h2>{}</h2>", html_escape(spec.label)));
    for (n, entry) in entries.iter().enumerate() {
        let mut values = spec.fields.iter().zip(&entry.values);
        let heading = values.next().map(|(_, v)| v.as_str()).unwrap_or_default();
        html.push_str(&format!("<h3>{}. {}</h3>", n + 1, html_escape(heading)));
        for (_, value) in values {
            if !value.trim().is_empty() {
                html.push_str(&format!("<p>{}</p>", rich_text(value)));
            }
        }
    }
}

fn render_section_table(html: &mut String, spec: &SectionSpec, entries: &[SectionEntry]) {
    if entries.is_empty() {
        return;
    }
    html.push_str(&format!("<h2>{}</h2><table><tr>", html_escape(spec.label)));
    for field in spec.fields {
        html.push_str(&format!("<th>{}</th>", html_escape(field.label)));
    }
    html.push_str("</tr>");
    for entry in entries {
        html.push_str("<tr>");
        for value in &entry.values {
            html.push_str(&format!("<td>{}</td>", rich_text(value)));
        }
        html.push_str("</tr>");
    }
    html.push_str("</table>");
}
