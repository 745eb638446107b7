use crate::dashboard::DashboardSummary;

use super::{escape_html, format_date, format_date_time, layout, number_or_empty, text_or_empty};

pub fn render_dashboard(summary: &DashboardSummary) -> String {
    let appointment = match &summary.next_appointment {
        Some(a) => format!(
            r#"<div class="stat">{date}</div>
<p>{provider}<br><span class="muted">{kind} &middot; {location}</span></p>"#,
            date = format_date_time(&a.appointment_date),
            provider = escape_html(&a.provider_name),
            kind = text_or_empty(a.appointment_type.as_deref()),
            location = text_or_empty(a.location.as_deref()),
        ),
        None => r#"<p class="empty">None scheduled</p>"#.to_string(),
    };

    let vitals = match &summary.recent_vitals {
        Some(v) => format!(
            r#"<div class="stat">{bp}</div>
<p>Heart rate {hr} bpm<br><span class="muted">Recorded {date}</span></p>"#,
            bp = v.blood_pressure().unwrap_or_else(|| super::EMPTY_CELL.to_string()),
            hr = number_or_empty(v.heart_rate),
            date = format_date(&v.recorded_date),
        ),
        None => r#"<p class="empty">Not available</p>"#.to_string(),
    };

    let lab = match &summary.recent_lab {
        Some(l) => format!(
            r#"<div class="stat">{value}</div>
<p>{name} <span class="badge">{status}</span><br><span class="muted">{date}</span></p>"#,
            value = text_or_empty(l.result_value.as_deref()),
            name = escape_html(&l.test_name),
            status = text_or_empty(l.status.as_deref()),
            date = format_date(&l.test_date),
        ),
        None => r#"<p class="empty">Not available</p>"#.to_string(),
    };

    let body = format!(
        r#"<div class="cards">
<section class="card"><h3><a href="/appointments">Next Appointment</a></h3>{appointment}</section>
<section class="card"><h3><a href="/vitals">Latest Vitals</a></h3>{vitals}</section>
<section class="card"><h3><a href="/medications">Medications</a></h3><div class="stat" id="med-count">{meds}</div><p class="muted">on record</p></section>
<section class="card"><h3><a href="/labs">Latest Lab Result</a></h3>{lab}</section>
<section class="card"><h3><a href="/history">Active Conditions</a></h3><div class="stat" id="active-conditions">{conditions}</div></section>
<section class="card"><h3><a href="/messages">Unread Messages</a></h3><div class="stat" id="unread-messages">{unread}</div></section>
</div>"#,
        meds = summary.medication_count,
        conditions = summary.active_conditions,
        unread = summary.unread_messages,
    );

    layout("Dashboard", "/", &summary.patient_name, &body)
}
