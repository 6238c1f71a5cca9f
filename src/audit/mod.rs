//! Audit logging system for budget-tracker
//!
//! Every add, delete and reset is appended to a line-delimited JSON log with
//! the affected entry, so removed data can always be found again.

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
