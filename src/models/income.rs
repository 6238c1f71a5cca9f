//! Income model

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// A recorded income entry (salary, refund, gift, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Income {
    /// Source of the income
    #[serde(default)]
    pub name: String,

    pub amount: Money,
}

impl Income {
    pub fn new(name: impl Into<String>, amount: Money) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }
}

impl fmt::Display for Income {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.amount)
    }
}
