//! budget-tracker - Terminal-based personal budget tracker
//!
//! Record expenses and income, see running totals and a per-category
//! breakdown, and export everything as CSV.
//!
//! # Architecture
//!
//! - `config`: Data directory resolution and user settings
//! - `error`: Custom error types
//! - `models`: Money, expenses, income and the budget that owns them
//! - `storage`: Key-value persistence of the two entry lists
//! - `reports`: Totals, balance and category breakdown
//! - `display`: Render model and terminal tables
//! - `export`: CSV, JSON and YAML export
//! - `audit`: Append-only log of every change
//! - `services`: The ledger that applies user commands
//! - `cli`: clap subcommands and their handlers
//!
//! # Example
//!
//! ```rust
//! use budget_tracker::services::{Command, Ledger};
//! use budget_tracker::storage::{MemoryStore, Storage};
//!
//! let mut ledger = Ledger::open(Storage::with_store(MemoryStore::new())).unwrap();
//! ledger
//!     .dispatch(Command::AddExpense {
//!         name: "Coffee".into(),
//!         category: "Food".into(),
//!         amount: "3.50".into(),
//!     })
//!     .unwrap();
//! assert_eq!(ledger.summary().total_expenses.cents(), 350);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{BudgetError, BudgetResult};
