use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Medication {
    pub medication_name: String,
    pub dosage: Option<String>,
    pub frequency: Option<String>,
    pub instructions: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub prescribing_doctor: Option<String>,
}
