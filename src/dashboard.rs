//! Home page summary bundle.
//!
//! Seven independent facts about the patient, read inside one deferred
//! transaction so they all come from the same snapshot of the store.

use chrono::NaiveDateTime;
use rusqlite::Connection;
use serde::Serialize;

use crate::db::repository;
use crate::db::DatabaseError;
use crate::models::{Appointment, LabResult, VitalsReading};

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub patient_name: String,
    pub next_appointment: Option<Appointment>,
    pub recent_vitals: Option<VitalsReading>,
    pub medication_count: u32,
    pub recent_lab: Option<LabResult>,
    pub active_conditions: u32,
    pub unread_messages: u32,
}

/// Read the summary bundle. `now` bounds which appointments count as upcoming.
pub fn fetch_summary(
    conn: &mut Connection,
    patient_id: i64,
    now: NaiveDateTime,
) -> Result<DashboardSummary, DatabaseError> {
    let tx = conn.transaction()?;

    let summary = DashboardSummary {
        patient_name: repository::fetch_patient_name(&tx, patient_id)?,
        next_appointment: repository::next_scheduled_appointment(&tx, patient_id, now)?,
        recent_vitals: repository::latest_vitals(&tx, patient_id)?,
        medication_count: repository::count_medications(&tx, patient_id)?,
        recent_lab: repository::latest_lab_result(&tx, patient_id)?,
        active_conditions: repository::count_active_conditions(&tx, patient_id)?,
        unread_messages: repository::count_unread_messages(&tx, patient_id)?,
    };

    // Nothing was written.
    tx.rollback()?;
    Ok(summary)
}
