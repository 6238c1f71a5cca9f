//! Budget state
//!
//! The single owned application state: the expense list and the income list,
//! both in insertion order and addressed by position.

use serde::{Deserialize, Serialize};

use super::expense::Expense;
use super::income::Income;

/// Both entry sequences of the tracker
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    #[serde(default)]
    pub expenses: Vec<Expense>,

    #[serde(default)]
    pub income: Vec<Income>,
}

impl Budget {
    pub fn new(expenses: Vec<Expense>, income: Vec<Income>) -> Self {
        Self { expenses, income }
    }

    /// Append an expense, returning its position
    pub fn push_expense(&mut self, expense: Expense) -> usize {
        self.expenses.push(expense);
        self.expenses.len() - 1
    }

    /// Append an income entry, returning its position
    pub fn push_income(&mut self, income: Income) -> usize {
        self.income.push(income);
        self.income.len() - 1
    }

    /// Remove the expense at `index`, shifting later entries down by one
    pub fn remove_expense(&mut self, index: usize) -> Option<Expense> {
        (index < self.expenses.len()).then(|| self.expenses.remove(index))
    }

    /// Remove the income entry at `index`, shifting later entries down by one
    pub fn remove_income(&mut self, index: usize) -> Option<Income> {
        (index < self.income.len()).then(|| self.income.remove(index))
    }

    pub fn clear(&mut self) {
        self.expenses.clear();
        self.income.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty() && self.income.is_empty()
    }

    /// Total number of entries across both lists
    pub fn entry_count(&self) -> usize {
        self.expenses.len() + self.income.len()
    }
}
