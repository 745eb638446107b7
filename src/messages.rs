//! Marking inbox messages as read.
//!
//! Two addressing modes. By position into the current newest-first order
//! (kept for existing links) and by durable message id. Both are silent
//! no-ops when nothing matches.

use rusqlite::{Connection, TransactionBehavior};

use crate::db::repository;
use crate::db::DatabaseError;

/// What a mark-read call found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkReadOutcome {
    Marked { message_id: i64 },
    NoMatch,
}

/// Mark the message at `index` in the newest-first list as read.
///
/// The lookup and the update share one IMMEDIATE transaction, so no other
/// writer can reorder the inbox between them.
pub fn mark_read_at_position(
    conn: &mut Connection,
    patient_id: i64,
    index: usize,
) -> Result<MarkReadOutcome, DatabaseError> {
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

    let ids = repository::list_message_ids(&tx, patient_id)?;
    let outcome = match ids.get(index) {
        Some(&message_id) => {
            repository::set_message_read(&tx, patient_id, message_id)?;
            MarkReadOutcome::Marked { message_id }
        }
        None => MarkReadOutcome::NoMatch,
    };

    tx.commit()?;
    Ok(outcome)
}

/// Mark one of the patient's messages read by its id.
pub fn mark_read_by_id(
    conn: &Connection,
    patient_id: i64,
    message_id: i64,
) -> Result<MarkReadOutcome, DatabaseError> {
    if repository::set_message_read(conn, patient_id, message_id)? {
        Ok(MarkReadOutcome::Marked { message_id })
    } else {
        Ok(MarkReadOutcome::NoMatch)
    }
}
