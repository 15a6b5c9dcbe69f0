//! Pure domain types and logic; no I/O happens below this module.

pub mod enrollment;
pub mod grade;
pub mod history;
pub mod records;
pub mod selection;
pub mod session;
pub mod types;
