use serde::Serialize;

/// Shown when the patient row is missing.
pub const PLACEHOLDER_PATIENT_NAME: &str = "Patient";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Patient {
    pub first_name: String,
    pub last_name: String,
}

impl Patient {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Display name for an optional patient row.
pub fn display_name_or_placeholder(patient: Option<&Patient>) -> String {
    patient
        .map(Patient::display_name)
        .unwrap_or_else(|| PLACEHOLDER_PATIENT_NAME.to_string())
}
