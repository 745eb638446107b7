use chrono::NaiveDateTime;
use serde::Serialize;

/// Status value that makes an appointment eligible as "next appointment".
pub const STATUS_SCHEDULED: &str = "Scheduled";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Appointment {
    pub appointment_date: NaiveDateTime,
    pub provider_name: String,
    pub appointment_type: Option<String>,
    pub status: String,
    pub location: Option<String>,
}
