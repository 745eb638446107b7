use crate::models::{Appointment, STATUS_SCHEDULED};

use super::{empty_notice, escape_html, format_date_time, layout, text_or_empty};

pub fn render_appointments(patient_name: &str, appointments: &[Appointment]) -> String {
    let body = if appointments.is_empty() {
        empty_notice("appointments")
    } else {
        let rows: String = appointments
            .iter()
            .map(|a| {
                let badge = if a.status == STATUS_SCHEDULED { "badge active" } else { "badge" };
                format!(
                    "<tr><td>{}</td><td>{}</td><td>{}</td><td><span class=\"{badge}\">{}</span></td><td>{}</td></tr>\n",
                    format_date_time(&a.appointment_date),
                    escape_html(&a.provider_name),
                    text_or_empty(a.appointment_type.as_deref()),
                    escape_html(&a.status),
                    text_or_empty(a.location.as_deref()),
                )
            })
            .collect();
        format!(
            "<table>\n<thead><tr><th>Date</th><th>Provider</th><th>Type</th><th>Status</th><th>Location</th></tr></thead>\n<tbody>\n{rows}</tbody>\n</table>"
        )
    };

    layout("Appointments", "/appointments", patient_name, &body)
}
