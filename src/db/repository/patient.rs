use rusqlite::{params, Connection, OptionalExtension};

use crate::db::DatabaseError;
use crate::models::{display_name_or_placeholder, Patient};

pub fn get_patient(conn: &Connection, patient_id: i64) -> Result<Option<Patient>, DatabaseError> {
    conn.query_row(
        "SELECT first_name, last_name FROM patients WHERE id = ?1",
        params![patient_id],
        |row| {
            Ok(Patient {
                first_name: row.get(0)?,
                last_name: row.get(1)?,
            })
        },
    )
    .optional()
    .map_err(DatabaseError::from)
}

/// "First Last", or the placeholder name when the row is missing.
pub fn fetch_patient_name(conn: &Connection, patient_id: i64) -> Result<String, DatabaseError> {
    let patient = get_patient(conn, patient_id)?;
    Ok(display_name_or_placeholder(patient.as_ref()))
}
