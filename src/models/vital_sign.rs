use chrono::NaiveDate;
use serde::Serialize;

/// One row of the `vitals` time series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VitalsReading {
    pub recorded_date: NaiveDate,
    pub systolic_bp: Option<i64>,
    pub diastolic_bp: Option<i64>,
    pub heart_rate: Option<i64>,
    pub weight: Option<f64>,
    pub temperature: Option<f64>,
}

impl VitalsReading {
    /// "120/80" when both pressures are present.
    pub fn blood_pressure(&self) -> Option<String> {
        match (self.systolic_bp, self.diastolic_bp) {
            (Some(sys), Some(dia)) => Some(format!("{sys}/{dia}")),
            _ => None,
        }
    }
}
