use chrono::NaiveDate;
use serde::Serialize;

/// History entries with this status are listed first and counted on the dashboard.
pub const STATUS_ACTIVE: &str = "Active";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
    pub condition_name: String,
    pub diagnosis_date: Option<NaiveDate>,
    pub status: String,
    pub notes: Option<String>,
}

impl HistoryEntry {
    pub fn is_active(&self) -> bool {
        self.status == STATUS_ACTIVE
    }
}
