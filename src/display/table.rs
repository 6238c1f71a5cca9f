//! Terminal formatting of a [`BudgetView`]

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::view::{BudgetView, CategoryRow, ExpenseRow, IncomeRow, SummaryFields};

fn table<T: Tabled>(rows: &[T]) -> String {
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

/// Format the expense rows, with the index used by `expense delete`
pub fn format_expense_table(rows: &[ExpenseRow]) -> String {
    if rows.is_empty() {
        return "No expenses recorded.".to_string();
    }
    table(rows)
}

/// Format the income rows, with the index used by `income delete`
pub fn format_income_table(rows: &[IncomeRow]) -> String {
    if rows.is_empty() {
        return "No income recorded.".to_string();
    }
    table(rows)
}

pub fn format_category_table(rows: &[CategoryRow]) -> String {
    if rows.is_empty() {
        return "No expenses to break down.".to_string();
    }
    table(rows)
}

pub fn format_summary(summary: &SummaryFields) -> String {
    let mut output = String::new();
    output.push_str(&format!("Total income:   {}\n", summary.total_income));
    output.push_str(&format!("Total expenses: {}\n", summary.total_expenses));
    output.push_str(&format!(
        "Balance:        {} ({})\n",
        summary.balance, summary.status
    ));
    output
}

/// Format all four regions
pub fn format_budget_view(view: &BudgetView) -> String {
    let sections = [
        ("Expenses", format_expense_table(&view.expense_rows)),
        ("Income", format_income_table(&view.income_rows)),
        ("Category Breakdown", format_category_table(&view.category_rows)),
        ("Summary", format_summary(&view.summary)),
    ];

    let mut output = String::new();
    for (i, (title, body)) in sections.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(title);
        output.push('\n');
        output.push_str(&"─".repeat(title.chars().count()));
        output.push('\n');
        output.push_str(body.trim_end());
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Budget, Expense, Income, Money};

    fn view() -> BudgetView {
        let budget = Budget::new(
            vec![
                Expense::new("Coffee", "Food", Money::from_cents(350)),
                Expense::new("Bus", "Transport", Money::from_cents(200)),
            ],
            vec![Income::new("Salary", Money::from_cents(10000))],
        );
        BudgetView::render(&budget, "£")
    }

    #[test]
    fn test_empty_tables() {
        assert_eq!(format_expense_table(&[]), "No expenses recorded.");
        assert_eq!(format_income_table(&[]), "No income recorded.");
        assert!(format_category_table(&[]).contains("No expenses"));
    }

    #[test]
    fn test_expense_table_has_headers_and_rows() {
        let output = format_expense_table(&view().expense_rows);
        assert!(output.contains("Name"));
        assert!(output.contains("Category"));
        assert!(output.contains("Coffee"));
        assert!(output.contains("£3.50"));
    }

    #[test]
    fn test_summary_lines() {
        let output = format_summary(&view().summary);
        assert!(output.contains("Total income:   £100.00"));
        assert!(output.contains("Total expenses: £5.50"));
        assert!(output.contains("Balance:        £94.50 (surplus)"));
    }

    #[test]
    fn test_full_view_has_all_sections() {
        let output = format_budget_view(&view());
        for heading in ["Expenses", "Income", "Category Breakdown", "Summary"] {
            assert!(output.contains(heading), "missing {}", heading);
        }
        assert!(output.contains("63.6%"));
        assert!(output.contains("36.4%"));
    }
}
