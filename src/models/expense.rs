//! Expense model
//!
//! A single spending entry: what it was, which category it belongs to and
//! how much it cost.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// A recorded expense
///
/// Expenses have no identity of their own. Two entries with equal fields are
/// interchangeable and are addressed only by their position in the budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    #[serde(default)]
    pub name: String,

    /// Free-text category; grouping is by exact, case-sensitive match
    #[serde(default)]
    pub category: String,

    pub amount: Money,
}

impl Expense {
    pub fn new(name: impl Into<String>, category: impl Into<String>, amount: Money) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            amount,
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.name, self.category, self.amount)
    }
}
