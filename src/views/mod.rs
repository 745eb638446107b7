//! HTML rendering for every dashboard page.
//!
//! Pages are self-contained documents built with `format!`; every value
//! taken from the store passes through [`escape_html`] first.

mod appointments;
mod dashboard;
mod history;
mod labs;
mod medications;
mod messages;
mod vitals;

pub use appointments::render_appointments;
pub use dashboard::render_dashboard;
pub use history::render_history;
pub use labs::render_labs;
pub use medications::render_medications;
pub use messages::render_messages;
pub use vitals::render_vitals;

use chrono::{NaiveDate, NaiveDateTime};

/// Navigation entries: (path, label).
const NAV: [(&str, &str); 7] = [
    ("/", "Dashboard"),
    ("/appointments", "Appointments"),
    ("/vitals", "Vitals"),
    ("/medications", "Medications"),
    ("/labs", "Lab Results"),
    ("/history", "Medical History"),
    ("/messages", "Messages"),
];

/// Rendered for absent optional values.
pub(crate) const EMPTY_CELL: &str = "&mdash;";

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escaped text, or the empty-cell marker.
pub(crate) fn text_or_empty(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => escape_html(v),
        _ => EMPTY_CELL.to_string(),
    }
}

pub(crate) fn format_date(date: &NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

pub(crate) fn format_date_time(at: &NaiveDateTime) -> String {
    at.format("%b %d, %Y %I:%M %p").to_string()
}

pub(crate) fn optional_date(date: Option<&NaiveDate>) -> String {
    date.map(format_date)
        .unwrap_or_else(|| EMPTY_CELL.to_string())
}

pub(crate) fn number_or_empty<T: std::fmt::Display>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| EMPTY_CELL.to_string())
}

/// Wrap a page body in the shared document shell.
pub(crate) fn layout(title: &str, current_path: &str, patient_name: &str, body: &str) -> String {
    let nav: String = NAV
        .iter()
        .map(|(path, label)| {
            let class = if *path == current_path { " class=\"active\"" } else { "" };
            format!(r#"<a href="{path}"{class}>{label}</a>"#)
        })
        .collect();
    let title = escape_html(title);
    let patient_name = escape_html(patient_name);

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | {patient_name}</title>
<style>
*,*::before,*::after{{box-sizing:border-box}}
body{{margin:0;font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',Roboto,sans-serif;background:#f8fafc;color:#0f172a}}
header{{background:#0f766e;color:#fff;padding:16px 24px}}
header h1{{margin:0;font-size:1.25rem}}
nav{{display:flex;flex-wrap:wrap;gap:4px;padding:8px 24px;background:#fff;border-bottom:1px solid #e2e8f0}}
nav a{{padding:8px 12px;border-radius:8px;color:#334155;text-decoration:none}}
nav a.active{{background:#ccfbf1;color:#0f766e;font-weight:600}}
main{{padding:24px;max-width:1100px;margin:0 auto}}
.cards{{display:grid;grid-template-columns:repeat(auto-fill,minmax(240px,1fr));gap:16px}}
.card{{background:#fff;border-radius:12px;box-shadow:0 1px 4px rgba(0,0,0,.06);padding:16px}}
.card h3{{margin:0 0 8px;font-size:.85rem;color:#64748b;text-transform:uppercase}}
.stat{{font-size:1.75rem;font-weight:700}}
table{{width:100%;border-collapse:collapse;background:#fff;border-radius:12px;overflow:hidden}}
th,td{{text-align:left;padding:10px 12px;border-bottom:1px solid #e2e8f0;vertical-align:top}}
th{{background:#f1f5f9;font-size:.8rem;color:#475569;text-transform:uppercase}}
.badge{{display:inline-block;padding:2px 8px;border-radius:999px;font-size:.75rem;background:#e2e8f0}}
.badge.active,.badge.unread{{background:#fee2e2;color:#991b1b}}
.message{{background:#fff;border-radius:12px;padding:16px;margin-bottom:12px}}
.message.unread{{border-left:4px solid #0f766e}}
.muted{{color:#64748b;font-size:.85rem}}
.empty{{color:#64748b;font-style:italic}}
</style>
</head>
<body>
<header><h1>{patient_name}</h1></header>
<nav>{nav}</nav>
<main>
<h2>{title}</h2>
{body}
</main>
</body>
</html>"##
    )
}

/// Generic failure page; never includes error details.
pub fn render_error_page() -> String {
    r##"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>Internal Server Error</title></head>
<body>
<h1>Internal Server Error</h1>
<p>The server encountered an error and could not complete your request.</p>
</body>
</html>"##
        .to_string()
}

/// Shown in place of a table when a list is empty.
pub(crate) fn empty_notice(what: &str) -> String {
    format!(r#"<p class="empty">No {what} on record.</p>"#)
}
