use crate::models::Medication;

use super::{empty_notice, escape_html, layout, optional_date, text_or_empty};

pub fn render_medications(patient_name: &str, medications: &[Medication]) -> String {
    let body = if medications.is_empty() {
        empty_notice("medications")
    } else {
        let rows: String = medications
            .iter()
            .map(|m| {
                format!(
                    "<tr><td><strong>{}</strong></td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                    escape_html(&m.medication_name),
                    text_or_empty(m.dosage.as_deref()),
                    text_or_empty(m.frequency.as_deref()),
                    text_or_empty(m.instructions.as_deref()),
                    optional_date(m.start_date.as_ref()),
                    text_or_empty(m.prescribing_doctor.as_deref()),
                )
            })
            .collect();
        format!(
            "<table>\n<thead><tr><th>Medication</th><th>Dosage</th><th>Frequency</th><th>Instructions</th><th>Started</th><th>Prescribed by</th></tr></thead>\n<tbody>\n{rows}</tbody>\n</table>"
        )
    };

    layout("Medications", "/medications", patient_name, &body)
}
