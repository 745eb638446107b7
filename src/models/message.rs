use chrono::NaiveDateTime;
use serde::Serialize;

/// A message in the patient's inbox.
///
/// `is_read` only ever moves from `false` to `true`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    pub id: i64,
    pub sender: String,
    pub subject: String,
    pub message_text: Option<String>,
    pub sent_date: NaiveDateTime,
    pub is_read: bool,
}
