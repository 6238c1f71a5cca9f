//! Display formatting for terminal output
//!
//! Builds the render model of a budget and formats it as tables.

pub mod table;
pub mod view;

pub use table::{
    format_budget_view, format_category_table, format_expense_table, format_income_table,
    format_summary,
};
pub use view::{BudgetView, CategoryRow, ExpenseRow, IncomeRow, SummaryFields};
