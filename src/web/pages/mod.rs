//! Page handlers, one module per view.
//!
//! Each handler reads the patient name and its entity rows, hands them to
//! the matching renderer in [`crate::views`], and returns HTML.

pub mod appointments;
pub mod dashboard;
pub mod health;
pub mod history;
pub mod labs;
pub mod medications;
pub mod messages;
pub mod vitals;
