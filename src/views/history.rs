use crate::models::HistoryEntry;

use super::{empty_notice, escape_html, layout, optional_date, text_or_empty};

pub fn render_history(patient_name: &str, history: &[HistoryEntry]) -> String {
    let body = if history.is_empty() {
        empty_notice("medical history")
    } else {
        let rows: String = history
            .iter()
            .map(|h| {
                let badge = if h.is_active() { "badge active" } else { "badge" };
                format!(
                    "<tr><td><strong>{}</strong></td><td>{}</td><td><span class=\"{badge}\">{}</span></td><td>{}</td></tr>\n",
                    escape_html(&h.condition_name),
                    optional_date(h.diagnosis_date.as_ref()),
                    escape_html(&h.status),
                    text_or_empty(h.notes.as_deref()),
                )
            })
            .collect();
        format!(
            "<table>\n<thead><tr><th>Condition</th><th>Diagnosed</th><th>Status</th><th>Notes</th></tr></thead>\n<tbody>\n{rows}</tbody>\n</table>"
        )
    };

    layout("Medical History", "/history", patient_name, &body)
}
