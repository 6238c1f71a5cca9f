//! CSV Export functionality
//!
//! Writes both entry lists into one spreadsheet-friendly document:
//!
//! ```text
//! Type,Name,Category,Amount
//! Expense,Coffee,Food,3.5
//! Income,Salary,,100
//! ```
//!
//! Amounts use [`Money::to_canonical_string`](crate::models::Money::to_canonical_string).

use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::models::Budget;

/// Header row of the CSV export
pub const CSV_HEADER: &str = "Type,Name,Category,Amount";

/// Export every expense, then every income entry, to CSV
///
/// Returns the number of data rows written (the header is not counted).
pub fn export_budget_csv<W: Write>(budget: &Budget, writer: &mut W) -> BudgetResult<usize> {
    writeln!(writer, "{}", CSV_HEADER).map_err(|e| BudgetError::Export(e.to_string()))?;

    for expense in &budget.expenses {
        writeln!(
            writer,
            "Expense,{},{},{}",
            escape_csv(&expense.name),
            escape_csv(&expense.category),
            expense.amount.to_canonical_string()
        )
        .map_err(|e| BudgetError::Export(e.to_string()))?;
    }

    for income in &budget.income {
        writeln!(
            writer,
            "Income,{},,{}",
            escape_csv(&income.name),
            income.amount.to_canonical_string()
        )
        .map_err(|e| BudgetError::Export(e.to_string()))?;
    }

    Ok(budget.entry_count())
}

/// Escape a string for CSV format
fn escape_csv(s: &str) -> String {
    if s.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
