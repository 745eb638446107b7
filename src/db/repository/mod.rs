//! Repository layer: entity-scoped read queries plus the one write.
//!
//! Every function takes the patient id explicitly; no query hardcodes it.
//! Orderings are part of each function's contract and carry an `id`
//! tiebreak so positions are stable between two identical reads.

mod appointment;
mod history;
mod lab_result;
mod medication;
mod message;
mod patient;
mod vital_sign;

pub use appointment::*;
pub use history::*;
pub use lab_result::*;
pub use medication::*;
pub use message::*;
pub use patient::*;
pub use vital_sign::*;
