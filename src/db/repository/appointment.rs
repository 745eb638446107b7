use chrono::NaiveDateTime;
use rusqlite::{params, Connection, OptionalExtension};

use crate::db::DatabaseError;
use crate::models::{Appointment, STATUS_SCHEDULED};

/// `datetime()` canonicalises stored text, so date-only and `T`-separated
/// values read and compare the same as `YYYY-MM-DD HH:MM:SS`.
const APPOINTMENT_COLUMNS: &str =
    "datetime(appointment_date), provider_name, appointment_type, status, location";

/// All appointments, most recent first.
pub fn list_appointments(
    conn: &Connection,
    patient_id: i64,
) -> Result<Vec<Appointment>, DatabaseError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {APPOINTMENT_COLUMNS}
         FROM appointments
         WHERE patient_id = ?1
         ORDER BY datetime(appointment_date) DESC, id DESC"
    ))?;
    let rows = stmt.query_map(params![patient_id], row_to_appointment)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(DatabaseError::from)
}

/// Earliest scheduled appointment strictly after `now`.
pub fn next_scheduled_appointment(
    conn: &Connection,
    patient_id: i64,
    now: NaiveDateTime,
) -> Result<Option<Appointment>, DatabaseError> {
    conn.query_row(
        &format!(
            "SELECT {APPOINTMENT_COLUMNS}
             FROM appointments
             WHERE patient_id = ?1 AND status = ?2 AND datetime(appointment_date) > datetime(?3)
             ORDER BY datetime(appointment_date) ASC, id ASC
             LIMIT 1"
        ),
        params![patient_id, STATUS_SCHEDULED, now],
        row_to_appointment,
    )
    .optional()
    .map_err(DatabaseError::from)
}

fn row_to_appointment(row: &rusqlite::Row) -> Result<Appointment, rusqlite::Error> {
    Ok(Appointment {
        appointment_date: row.get(0)?,
        provider_name: row.get(1)?,
        appointment_type: row.get(2)?,
        status: row.get(3)?,
        location: row.get(4)?,
    })
}
