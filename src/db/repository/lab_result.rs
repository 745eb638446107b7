use rusqlite::{params, Connection, OptionalExtension};

use crate::db::DatabaseError;
use crate::models::LabResult;

const LAB_COLUMNS: &str =
    "date(test_date), test_name, result_value, normal_range, status, ordering_doctor";

/// All lab results, most recent test first.
pub fn list_lab_results(conn: &Connection, patient_id: i64) -> Result<Vec<LabResult>, DatabaseError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {LAB_COLUMNS}
         FROM lab_results
         WHERE patient_id = ?1
         ORDER BY datetime(test_date) DESC, id DESC"
    ))?;
    let rows = stmt.query_map(params![patient_id], row_to_lab_result)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(DatabaseError::from)
}

pub fn latest_lab_result(
    conn: &Connection,
    patient_id: i64,
) -> Result<Option<LabResult>, DatabaseError> {
    conn.query_row(
        &format!(
            "SELECT {LAB_COLUMNS}
             FROM lab_results
             WHERE patient_id = ?1
             ORDER BY datetime(test_date) DESC, id DESC
             LIMIT 1"
        ),
        params![patient_id],
        row_to_lab_result,
    )
    .optional()
    .map_err(DatabaseError::from)
}

fn row_to_lab_result(row: &rusqlite::Row) -> Result<LabResult, rusqlite::Error> {
    Ok(LabResult {
        test_date: row.get(0)?,
        test_name: row.get(1)?,
        result_value: row.get(2)?,
        normal_range: row.get(3)?,
        status: row.get(4)?,
        ordering_doctor: row.get(5)?,
    })
}
