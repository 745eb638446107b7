//! Chart series for the vitals page.

use serde::Serialize;

use crate::models::VitalsReading;

/// Date label used on the chart axis, e.g. "Jan 05".
pub const CHART_DATE_FORMAT: &str = "%b %d";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub date: String,
    pub systolic: Option<i64>,
    pub diastolic: Option<i64>,
    #[serde(rename = "heartRate")]
    pub heart_rate: Option<i64>,
    pub weight: Option<f64>,
}

/// Build the oldest-to-newest series from readings listed newest first.
///
/// Reuses the table's rows, so chart and table always describe the same data.
pub fn chart_series(readings_desc: &[VitalsReading]) -> Vec<ChartPoint> {
    readings_desc
        .iter()
        .rev()
        .map(|v| ChartPoint {
            date: v.recorded_date.format(CHART_DATE_FORMAT).to_string(),
            systolic: v.systolic_bp,
            diastolic: v.diastolic_bp,
            heart_rate: v.heart_rate,
            weight: v.weight.map(round_one_decimal),
        })
        .collect()
}

/// Ties round half away from zero (`150.25` → `150.3`).
fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
