//! Data models for CrewRoster

pub mod duty;
pub mod roster;

// Re-export commonly used types
pub use duty::{DutyCatalog, DutyKind, DutyTemplate};
pub use roster::RosterMonth;
