use rusqlite::{params, Connection};

use crate::db::DatabaseError;
use crate::models::Medication;

/// All medications, alphabetical by name.
pub fn list_medications(
    conn: &Connection,
    patient_id: i64,
) -> Result<Vec<Medication>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT medication_name, dosage, frequency, instructions, date(start_date), prescribing_doctor
         FROM medications
         WHERE patient_id = ?1
         ORDER BY medication_name ASC, id ASC",
    )?;
    let rows = stmt.query_map(params![patient_id], |row| {
        Ok(Medication {
            medication_name: row.get(0)?,
            dosage: row.get(1)?,
            frequency: row.get(2)?,
            instructions: row.get(3)?,
            start_date: row.get(4)?,
            prescribing_doctor: row.get(5)?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(DatabaseError::from)
}

pub fn count_medications(conn: &Connection, patient_id: i64) -> Result<u32, DatabaseError> {
    let count = conn.query_row(
        "SELECT COUNT(*) FROM medications WHERE patient_id = ?1",
        params![patient_id],
        |row| row.get::<_, u32>(0),
    )?;
    Ok(count)
}
