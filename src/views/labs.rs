use crate::models::LabResult;

use super::{empty_notice, escape_html, format_date, layout, text_or_empty};

pub fn render_labs(patient_name: &str, labs: &[LabResult]) -> String {
    let body = if labs.is_empty() {
        empty_notice("lab results")
    } else {
        let rows: String = labs
            .iter()
            .map(|l| {
                format!(
                    "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td><span class=\"badge\">{}</span></td><td>{}</td></tr>\n",
                    format_date(&l.test_date),
                    escape_html(&l.test_name),
                    text_or_empty(l.result_value.as_deref()),
                    text_or_empty(l.normal_range.as_deref()),
                    text_or_empty(l.status.as_deref()),
                    text_or_empty(l.ordering_doctor.as_deref()),
                )
            })
            .collect();
        format!(
            "<table>\n<thead><tr><th>Date</th><th>Test</th><th>Result</th><th>Normal range</th><th>Status</th><th>Ordered by</th></tr></thead>\n<tbody>\n{rows}</tbody>\n</table>"
        )
    };

    layout("Lab Results", "/labs", patient_name, &body)
}
