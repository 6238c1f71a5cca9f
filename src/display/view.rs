//! Render model for the budget
//!
//! [`BudgetView`] is rebuilt from scratch on every render. Each entry row
//! carries the position it has right now; that is the index a delete command
//! must be given, and it changes whenever an earlier entry is removed.

use tabled::Tabled;

use crate::models::Budget;
use crate::reports::{BalanceStatus, BudgetSummary};

/// One row of the expense table
#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct ExpenseRow {
    #[tabled(rename = "#")]
    pub index: usize,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Category")]
    pub category: String,
    #[tabled(rename = "Amount")]
    pub amount: String,
}

/// One row of the income table
#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct IncomeRow {
    #[tabled(rename = "#")]
    pub index: usize,
    #[tabled(rename = "Source")]
    pub name: String,
    #[tabled(rename = "Amount")]
    pub amount: String,
}

/// One row of the category breakdown
#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct CategoryRow {
    #[tabled(rename = "Category")]
    pub category: String,
    #[tabled(rename = "Amount")]
    pub amount: String,
    #[tabled(rename = "Percentage")]
    pub percentage: String,
}

/// Formatted summary fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryFields {
    pub total_income: String,
    pub total_expenses: String,
    pub balance: String,
    pub status: BalanceStatus,
}

/// Everything the terminal shows for a budget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetView {
    pub expense_rows: Vec<ExpenseRow>,
    pub income_rows: Vec<IncomeRow>,
    pub category_rows: Vec<CategoryRow>,
    pub summary: SummaryFields,
}

impl BudgetView {
    /// Build all four regions from the current budget
    pub fn render(budget: &Budget, currency_symbol: &str) -> Self {
        let summary = BudgetSummary::from_budget(budget);
        let money = |m: crate::models::Money| m.format_with_symbol(currency_symbol);

        let expense_rows = budget
            .expenses
            .iter()
            .enumerate()
            .map(|(index, e)| ExpenseRow {
                index,
                name: e.name.clone(),
                category: e.category.clone(),
                amount: money(e.amount),
            })
            .collect();

        let income_rows = budget
            .income
            .iter()
            .enumerate()
            .map(|(index, i)| IncomeRow {
                index,
                name: i.name.clone(),
                amount: money(i.amount),
            })
            .collect();

        let category_rows = summary
            .categories
            .iter()
            .map(|share| CategoryRow {
                category: share.category.clone(),
                amount: money(share.amount),
                percentage: format!("{:.1}%", share.percentage),
            })
            .collect();

        Self {
            expense_rows,
            income_rows,
            category_rows,
            summary: SummaryFields {
                total_income: money(summary.total_income),
                total_expenses: money(summary.total_expenses),
                balance: money(summary.balance),
                status: summary.status,
            },
        }
    }
}
