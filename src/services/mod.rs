//! Service layer for budget-tracker
//!
//! Applies user commands on top of the storage layer, handling validation,
//! persistence and audit logging.

pub mod ledger;

pub use ledger::{parse_amount, Command, Ledger, Outcome};
