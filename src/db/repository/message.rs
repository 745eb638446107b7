use rusqlite::{params, Connection};

use crate::db::DatabaseError;
use crate::models::Message;

/// Shared by the list view and position lookup so both see the same order.
const MESSAGE_ORDER: &str = "ORDER BY datetime(sent_date) DESC, id DESC";

/// All messages, newest first.
pub fn list_messages(conn: &Connection, patient_id: i64) -> Result<Vec<Message>, DatabaseError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT id, sender, subject, message_text, datetime(sent_date), is_read
         FROM messages
         WHERE patient_id = ?1
         {MESSAGE_ORDER}"
    ))?;
    let rows = stmt.query_map(params![patient_id], |row| {
        Ok(Message {
            id: row.get(0)?,
            sender: row.get(1)?,
            subject: row.get(2)?,
            message_text: row.get(3)?,
            sent_date: row.get(4)?,
            is_read: row.get(5)?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(DatabaseError::from)
}

/// Message ids in list order.
pub fn list_message_ids(conn: &Connection, patient_id: i64) -> Result<Vec<i64>, DatabaseError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT id FROM messages WHERE patient_id = ?1 {MESSAGE_ORDER}"
    ))?;
    let rows = stmt.query_map(params![patient_id], |row| row.get(0))?;
    rows.collect::<Result<Vec<_>, _>>().map_err(DatabaseError::from)
}

pub fn count_unread_messages(conn: &Connection, patient_id: i64) -> Result<u32, DatabaseError> {
    let count = conn.query_row(
        "SELECT COUNT(*) FROM messages WHERE patient_id = ?1 AND is_read = 0",
        params![patient_id],
        |row| row.get::<_, u32>(0),
    )?;
    Ok(count)
}

/// Set `is_read` on one of the patient's messages.
///
/// Returns whether a row matched. Already-read messages match and stay read.
pub fn set_message_read(
    conn: &Connection,
    patient_id: i64,
    message_id: i64,
) -> Result<bool, DatabaseError> {
    let affected = conn.execute(
        "UPDATE messages SET is_read = 1 WHERE id = ?1 AND patient_id = ?2",
        params![message_id, patient_id],
    )?;
    Ok(affected > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::sqlite::open_memory_database;
    use crate::test_fixtures::{insert_message, insert_patient, is_read};

    fn seeded() -> Connection {
        let conn = open_memory_database().unwrap();
        insert_patient(&conn, 1, "Sarah", "Johnson");
        insert_patient(&conn, 2, "Other", "Person");
        conn
    }

    #[test]
    fn ids_follow_list_order() {
        let conn = seeded();
        let c = insert_message(&conn, 1, "C", "2024-01-01 08:00:00", false);
        let a = insert_message(&conn, 1, "A", "2024-01-03 08:00:00", false);
        let b = insert_message(&conn, 1, "B", "2024-01-02 08:00:00", true);

        assert_eq!(list_message_ids(&conn, 1).unwrap(), vec![a, b, c]);
        let subjects: Vec<_> = list_messages(&conn, 1)
            .unwrap()
            .into_iter()
            .map(|m| m.subject)
            .collect();
        assert_eq!(subjects, ["A", "B", "C"]);
    }

    #[test]
    fn unread_count_ignores_read_and_other_patients() {
        let conn = seeded();
        insert_message(&conn, 1, "A", "2024-01-03 08:00:00", false);
        insert_message(&conn, 1, "B", "2024-01-02 08:00:00", true);
        insert_message(&conn, 2, "X", "2024-01-02 08:00:00", false);
        assert_eq!(count_unread_messages(&conn, 1).unwrap(), 1);
    }

    #[test]
    fn set_read_is_scoped_to_patient() {
        let conn = seeded();
        let theirs = insert_message(&conn, 2, "X", "2024-01-02 08:00:00", false);

        assert!(!set_message_read(&conn, 1, theirs).unwrap());
        assert!(!is_read(&conn, theirs));
    }

    #[test]
    fn set_read_on_read_message_keeps_it_read() {
        let conn = seeded();
        let id = insert_message(&conn, 1, "A", "2024-01-03 08:00:00", false);

        assert!(set_message_read(&conn, 1, id).unwrap());
        assert!(set_message_read(&conn, 1, id).unwrap());
        assert!(is_read(&conn, id));
    }
}
