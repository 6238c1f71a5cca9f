//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Budget, Expense, Income};

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Entry was appended
    Create,
    /// Entry was removed by position
    Delete,
    /// Both lists were cleared
    Reset,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Delete => write!(f, "DELETE"),
            Operation::Reset => write!(f, "RESET"),
        }
    }
}

/// Types of entities that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Expense,
    Income,
    Budget,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::Expense => write!(f, "Expense"),
            EntityType::Income => write!(f, "Income"),
            EntityType::Budget => write!(f, "Budget"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub entity_type: EntityType,

    /// Position of the entry at the time of the operation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,

    /// Human-readable description of the entity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    /// Entity state before the operation (deletes and resets)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// Entity state after the operation (creates)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,
}

impl AuditEntry {
    fn new(operation: Operation, entity_type: EntityType) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entity_type,
            index: None,
            entity_name: None,
            before: None,
            after: None,
        }
    }

    pub fn expense_added(index: usize, expense: &Expense) -> Self {
        Self {
            index: Some(index),
            entity_name: Some(expense.name.clone()),
            after: serde_json::to_value(expense).ok(),
            ..Self::new(Operation::Create, EntityType::Expense)
        }
    }

    pub fn income_added(index: usize, income: &Income) -> Self {
        Self {
            index: Some(index),
            entity_name: Some(income.name.clone()),
            after: serde_json::to_value(income).ok(),
            ..Self::new(Operation::Create, EntityType::Income)
        }
    }

    pub fn expense_deleted(index: usize, expense: &Expense) -> Self {
        Self {
            index: Some(index),
            entity_name: Some(expense.name.clone()),
            before: serde_json::to_value(expense).ok(),
            ..Self::new(Operation::Delete, EntityType::Expense)
        }
    }

    pub fn income_deleted(index: usize, income: &Income) -> Self {
        Self {
            index: Some(index),
            entity_name: Some(income.name.clone()),
            before: serde_json::to_value(income).ok(),
            ..Self::new(Operation::Delete, EntityType::Income)
        }
    }

    /// Record a reset, keeping the cleared budget so it can be recovered by hand
    pub fn reset(cleared: &Budget) -> Self {
        Self {
            entity_name: Some(format!("{} entries", cleared.entry_count())),
            before: serde_json::to_value(cleared).ok(),
            ..Self::new(Operation::Reset, EntityType::Budget)
        }
    }

    /// One-line description for `history`
    pub fn summary_line(&self) -> String {
        let mut line = format!(
            "{} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.operation,
            self.entity_type
        );
        if let Some(index) = self.index {
            line.push_str(&format!(" #{}", index));
        }
        if let Some(name) = &self.entity_name {
            line.push_str(&format!(" \"{}\"", name));
        }
        line
    }
}
