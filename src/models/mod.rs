//! Core data models for budget-tracker
//!
//! Expenses and income entries, the money amount they carry, and the
//! [`Budget`] that owns both lists.

pub mod budget;
pub mod expense;
pub mod income;
pub mod money;

pub use budget::Budget;
pub use expense::Expense;
pub use income::Income;
pub use money::{Money, MoneyParseError, MAX_CENTS};
