//! Row types read from the patient store.
//!
//! Each struct mirrors the columns a page shows, not the full table.
//! All of them serialize so views can embed them as JSON where needed.

pub mod appointment;
pub mod history;
pub mod lab;
pub mod medication;
pub mod message;
pub mod patient;
pub mod vital_sign;

pub use appointment::*;
pub use history::*;
pub use lab::*;
pub use medication::*;
pub use message::*;
pub use patient::*;
pub use vital_sign::*;
