//! Seed helpers shared by unit and handler tests.
//!
//! The application never inserts rows; tests populate the store directly.

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection};
use tempfile::TempDir;

use crate::db::sqlite::initialize_database;

pub const PATIENT_ID: i64 = 1;

/// On-disk store with the full schema. Keep the `TempDir` alive for the test.
pub fn temp_store() -> (TempDir, PathBuf) {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("dashboard.db");
    initialize_database(&path).unwrap();
    (tmp, path)
}

/// `temp_store` with the row for [`PATIENT_ID`] present, so child rows
/// satisfy their foreign keys.
pub fn seeded_store() -> (TempDir, PathBuf) {
    let (tmp, path) = temp_store();
    insert_patient(&open(&path), PATIENT_ID, "Sarah", "Johnson");
    (tmp, path)
}

pub fn open(path: &Path) -> Connection {
    Connection::open(path).unwrap()
}

pub fn insert_patient(conn: &Connection, id: i64, first: &str, last: &str) {
    conn.execute(
        "INSERT INTO patients (id, first_name, last_name) VALUES (?1, ?2, ?3)",
        params![id, first, last],
    )
    .unwrap();
}

pub fn insert_appointment(
    conn: &Connection,
    patient_id: i64,
    date: &str,
    provider: &str,
    status: &str,
) {
    conn.execute(
        "INSERT INTO appointments
            (patient_id, appointment_date, provider_name, appointment_type, status, location)
         VALUES (?1, ?2, ?3, 'Follow-up', ?4, 'Main Clinic')",
        params![patient_id, date, provider, status],
    )
    .unwrap();
}

pub fn insert_vitals(
    conn: &Connection,
    patient_id: i64,
    date: &str,
    systolic: i64,
    diastolic: i64,
    heart_rate: i64,
    weight: f64,
) {
    conn.execute(
        "INSERT INTO vitals
            (patient_id, recorded_date, systolic_bp, diastolic_bp, heart_rate, weight, temperature)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, 98.6)",
        params![patient_id, date, systolic, diastolic, heart_rate, weight],
    )
    .unwrap();
}

pub fn insert_medication(conn: &Connection, patient_id: i64, name: &str) {
    conn.execute(
        "INSERT INTO medications
            (patient_id, medication_name, dosage, frequency, instructions, start_date, prescribing_doctor)
         VALUES (?1, ?2, '10mg', 'Once daily', 'Take with food', '2023-01-15', 'Dr. Chen')",
        params![patient_id, name],
    )
    .unwrap();
}

pub fn insert_lab(conn: &Connection, patient_id: i64, date: &str, test: &str, status: &str) {
    conn.execute(
        "INSERT INTO lab_results
            (patient_id, test_date, test_name, result_value, normal_range, status, ordering_doctor)
         VALUES (?1, ?2, ?3, '5.4', '4.0-5.6', ?4, 'Dr. Patel')",
        params![patient_id, date, test, status],
    )
    .unwrap();
}

pub fn insert_history(
    conn: &Connection,
    patient_id: i64,
    condition: &str,
    date: &str,
    status: &str,
) {
    conn.execute(
        "INSERT INTO medical_history (patient_id, condition_name, diagnosis_date, status, notes)
         VALUES (?1, ?2, ?3, ?4, NULL)",
        params![patient_id, condition, date, status],
    )
    .unwrap();
}

/// Returns the new message id.
pub fn insert_message(
    conn: &Connection,
    patient_id: i64,
    subject: &str,
    sent_date: &str,
    is_read: bool,
) -> i64 {
    conn.execute(
        "INSERT INTO messages (patient_id, sender, subject, message_text, sent_date, is_read)
         VALUES (?1, 'Care Team', ?2, 'Body text', ?3, ?4)",
        params![patient_id, subject, sent_date, is_read],
    )
    .unwrap();
    conn.last_insert_rowid()
}

pub fn is_read(conn: &Connection, message_id: i64) -> bool {
    conn.query_row(
        "SELECT is_read FROM messages WHERE id = ?1",
        params![message_id],
        |row| row.get(0),
    )
    .unwrap()
}
