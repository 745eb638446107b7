use chrono::NaiveDate;
use serde::Serialize;

/// A lab result as recorded. `status` is displayed verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabResult {
    pub test_date: NaiveDate,
    pub test_name: String,
    pub result_value: Option<String>,
    pub normal_range: Option<String>,
    pub status: Option<String>,
    pub ordering_doctor: Option<String>,
}
