use rusqlite::{params, Connection, OptionalExtension};

use crate::db::DatabaseError;
use crate::models::VitalsReading;

/// `date()` drops any time-of-day part stored with the reading.
const VITALS_COLUMNS: &str =
    "date(recorded_date), systolic_bp, diastolic_bp, heart_rate, weight, temperature";

/// All readings, most recent first.
pub fn list_vitals(conn: &Connection, patient_id: i64) -> Result<Vec<VitalsReading>, DatabaseError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {VITALS_COLUMNS}
         FROM vitals
         WHERE patient_id = ?1
         ORDER BY datetime(recorded_date) DESC, id DESC"
    ))?;
    let rows = stmt.query_map(params![patient_id], row_to_vitals)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(DatabaseError::from)
}

pub fn latest_vitals(
    conn: &Connection,
    patient_id: i64,
) -> Result<Option<VitalsReading>, DatabaseError> {
    conn.query_row(
        &format!(
            "SELECT {VITALS_COLUMNS}
             FROM vitals
             WHERE patient_id = ?1
             ORDER BY datetime(recorded_date) DESC, id DESC
             LIMIT 1"
        ),
        params![patient_id],
        row_to_vitals,
    )
    .optional()
    .map_err(DatabaseError::from)
}

fn row_to_vitals(row: &rusqlite::Row) -> Result<VitalsReading, rusqlite::Error> {
    Ok(VitalsReading {
        recorded_date: row.get(0)?,
        systolic_bp: row.get(1)?,
        diastolic_bp: row.get(2)?,
        heart_rate: row.get(3)?,
        weight: row.get(4)?,
        temperature: row.get(5)?,
    })
}
