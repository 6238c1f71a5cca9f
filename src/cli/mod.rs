//! CLI command handlers
//!
//! Bridges clap argument parsing with the ledger service.

pub mod expense;
pub mod export;
pub mod history;
pub mod income;
pub mod reset;

pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportArgs};
pub use history::handle_history_command;
pub use income::{handle_income_command, IncomeCommands};
pub use reset::{confirm, handle_reset_command};
