use rusqlite::{params, Connection};

use crate::db::DatabaseError;
use crate::models::{HistoryEntry, STATUS_ACTIVE};

/// Active conditions first, then everything else; newest diagnosis first
/// within each group.
pub fn list_history(conn: &Connection, patient_id: i64) -> Result<Vec<HistoryEntry>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT condition_name, date(diagnosis_date), status, notes
         FROM medical_history
         WHERE patient_id = ?1
         ORDER BY
             CASE WHEN status = ?2 THEN 0 ELSE 1 END,
             datetime(diagnosis_date) DESC,
             id DESC",
    )?;
    let rows = stmt.query_map(params![patient_id, STATUS_ACTIVE], |row| {
        Ok(HistoryEntry {
            condition_name: row.get(0)?,
            diagnosis_date: row.get(1)?,
            status: row.get(2)?,
            notes: row.get(3)?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(DatabaseError::from)
}

pub fn count_active_conditions(conn: &Connection, patient_id: i64) -> Result<u32, DatabaseError> {
    let count = conn.query_row(
        "SELECT COUNT(*) FROM medical_history WHERE patient_id = ?1 AND status = ?2",
        params![patient_id, STATUS_ACTIVE],
        |row| row.get::<_, u32>(0),
    )?;
    Ok(count)
}
