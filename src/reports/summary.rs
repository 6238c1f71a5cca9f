//! Budget summary
//!
//! Totals and balance derived from the current budget. Nothing here is
//! cached; every call recomputes from the entry lists.

use crate::models::{Budget, Expense, Income, Money};

use super::category::{category_breakdown, CategoryShare};

/// Sum of all expense amounts
pub fn total_expenses(expenses: &[Expense]) -> Money {
    expenses.iter().map(|e| e.amount).sum()
}

/// Sum of all income amounts
pub fn total_income(income: &[Income]) -> Money {
    income.iter().map(|i| i.amount).sum()
}

/// Total income minus total expenses
pub fn balance(budget: &Budget) -> Money {
    total_income(&budget.income) - total_expenses(&budget.expenses)
}

/// Display classification of the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceStatus {
    /// Spending exceeds income
    Deficit,
    /// Income covers spending (a zero balance counts as surplus)
    Surplus,
}

impl BalanceStatus {
    pub fn of(balance: Money) -> Self {
        if balance.is_negative() {
            Self::Deficit
        } else {
            Self::Surplus
        }
    }
}

impl std::fmt::Display for BalanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BalanceStatus::Deficit => write!(f, "deficit"),
            BalanceStatus::Surplus => write!(f, "surplus"),
        }
    }
}

/// All aggregates of a budget in one place
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetSummary {
    pub total_income: Money,
    pub total_expenses: Money,
    pub balance: Money,
    pub status: BalanceStatus,
    pub categories: Vec<CategoryShare>,
}

impl BudgetSummary {
    pub fn from_budget(budget: &Budget) -> Self {
        let total_income = total_income(&budget.income);
        let total_expenses = total_expenses(&budget.expenses);
        let balance = total_income - total_expenses;

        Self {
            total_income,
            total_expenses,
            balance,
            status: BalanceStatus::of(balance),
            categories: category_breakdown(&budget.expenses),
        }
    }
}
