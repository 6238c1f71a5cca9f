//! Reports module for budget-tracker
//!
//! Pure aggregates over the current budget: totals, balance and the
//! per-category breakdown.

pub mod category;
pub mod summary;

pub use category::{category_breakdown, percentage_of, CategoryShare};
pub use summary::{balance, total_expenses, total_income, BalanceStatus, BudgetSummary};
