//! JSON Export functionality
//!
//! Exports the whole budget, with its totals, as a versioned snapshot.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Budget, Expense, Income, Money};
use crate::reports::BudgetSummary;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full budget export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetSnapshot {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub expenses: Vec<Expense>,

    pub income: Vec<Income>,

    pub totals: SnapshotTotals,
}

/// Aggregates at export time, for reference only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotTotals {
    pub total_income: Money,
    pub total_expenses: Money,
    pub balance: Money,
    pub expense_count: usize,
    pub income_count: usize,
}

impl BudgetSnapshot {
    pub fn from_budget(budget: &Budget) -> Self {
        let summary = BudgetSummary::from_budget(budget);

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            expenses: budget.expenses.clone(),
            income: budget.income.clone(),
            totals: SnapshotTotals {
                total_income: summary.total_income,
                total_expenses: summary.total_expenses,
                balance: summary.balance,
                expense_count: budget.expenses.len(),
                income_count: budget.income.len(),
            },
        }
    }

    /// The budget this snapshot was taken from
    pub fn budget(&self) -> Budget {
        Budget::new(self.expenses.clone(), self.income.clone())
    }
}

/// Export the budget as a JSON snapshot
pub fn export_budget_json<W: Write>(
    budget: &Budget,
    writer: &mut W,
    pretty: bool,
) -> BudgetResult<()> {
    let snapshot = BudgetSnapshot::from_budget(budget);

    let written = if pretty {
        serde_json::to_writer_pretty(&mut *writer, &snapshot)
    } else {
        serde_json::to_writer(&mut *writer, &snapshot)
    };
    written.map_err(|e| BudgetError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| BudgetError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn budget() -> Budget {
        Budget::new(
            vec![Expense::new("Coffee", "Food", Money::from_cents(350))],
            vec![Income::new("Salary", Money::from_cents(10000))],
        )
    }

    #[test]
    fn test_json_export_round_trip() {
        let mut output = Vec::new();
        export_budget_json(&budget(), &mut output, true).unwrap();

        let snapshot: BudgetSnapshot = serde_json::from_slice(&output).unwrap();
        assert_eq!(snapshot.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(snapshot.budget(), budget());
        assert_eq!(snapshot.totals.balance.cents(), 9650);
        assert_eq!(snapshot.totals.expense_count, 1);
    }

    #[test]
    fn test_compact_json_is_single_line() {
        let mut output = Vec::new();
        export_budget_json(&budget(), &mut output, false).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.contains(r#""amount":3.5"#));
    }
}
