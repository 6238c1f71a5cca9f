//! YAML Export functionality
//!
//! Same snapshot as the JSON export, in a human-readable form.

use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::export::json::BudgetSnapshot;
use crate::models::Budget;

/// Export the budget as a YAML snapshot
pub fn export_budget_yaml<W: Write>(budget: &Budget, writer: &mut W) -> BudgetResult<()> {
    let snapshot = BudgetSnapshot::from_budget(budget);

    writeln!(writer, "# budget-tracker export")
        .map_err(|e| BudgetError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", snapshot.exported_at)
        .map_err(|e| BudgetError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", snapshot.app_version)
        .map_err(|e| BudgetError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| BudgetError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &snapshot).map_err(|e| BudgetError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, Income, Money};

    #[test]
    fn test_yaml_export() {
        let budget = Budget::new(
            vec![Expense::new("Groceries", "Food", Money::from_cents(4599))],
            vec![Income::new("Salary", Money::from_cents(250000))],
        );

        let mut output = Vec::new();
        export_budget_yaml(&budget, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.starts_with("# budget-tracker export"));
        assert!(text.contains("Groceries"));
        assert!(text.contains("schema_version"));

        let snapshot: BudgetSnapshot = serde_yaml::from_str(&text).unwrap();
        assert_eq!(snapshot.budget(), budget);
    }
}
