use crate::models::VitalsReading;
use crate::vitals::ChartPoint;

use super::{empty_notice, format_date, layout, number_or_empty, EMPTY_CELL};

/// Table of readings (newest first) plus the chart series as embedded JSON.
pub fn render_vitals(patient_name: &str, readings: &[VitalsReading], chart: &[ChartPoint]) -> String {
    let table = if readings.is_empty() {
        empty_notice("vitals")
    } else {
        let rows: String = readings
            .iter()
            .map(|v| {
                format!(
                    "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                    format_date(&v.recorded_date),
                    v.blood_pressure().unwrap_or_else(|| EMPTY_CELL.to_string()),
                    number_or_empty(v.heart_rate),
                    number_or_empty(v.weight),
                    number_or_empty(v.temperature),
                )
            })
            .collect();
        format!(
            "<table>\n<thead><tr><th>Date</th><th>Blood pressure</th><th>Heart rate</th><th>Weight</th><th>Temperature</th></tr></thead>\n<tbody>\n{rows}</tbody>\n</table>"
        )
    };

    let body = format!(
        "<script type=\"application/json\" id=\"chart-data\">{}</script>\n{table}",
        chart_json(chart)
    );

    layout("Vitals", "/vitals", patient_name, &body)
}

/// JSON safe to inline in a `<script>` element.
fn chart_json(chart: &[ChartPoint]) -> String {
    serde_json::to_string(chart)
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Chart data serialization failed");
            "[]".to_string()
        })
        .replace('<', "\\u003c")
}
