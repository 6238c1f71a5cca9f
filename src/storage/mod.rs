//! Storage layer for budget-tracker
//!
//! Persists the two entry lists as JSON arrays under the keys `expenses` and
//! `income` of a [`KeyValueStore`]. Every save rewrites both keys in full.

pub mod file_io;
pub mod kv;

pub use file_io::{read_json, write_json_atomic};
pub use kv::{FileStore, KeyValueStore, MemoryStore};

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::paths::BudgetPaths;
use crate::error::{BudgetError, BudgetResult};
use crate::models::Budget;

/// Key holding the expense list
pub const EXPENSES_KEY: &str = "expenses";

/// Key holding the income list
pub const INCOME_KEY: &str = "income";

/// Key under which unreadable content of `key`, found at `at`, is preserved
pub fn corrupt_key(key: &str, at: DateTime<Utc>) -> String {
    format!("{}.corrupt-{}", key, at.format("%Y%m%dT%H%M%S%3fZ"))
}

/// Storage coordinator reading and writing the budget through a key-value backend
pub struct Storage<S: KeyValueStore = FileStore> {
    store: S,
}

impl Storage<FileStore> {
    /// Open the file-backed store under the data directory
    pub fn open(paths: &BudgetPaths) -> BudgetResult<Self> {
        paths.ensure_directories()?;
        Ok(Self::with_store(FileStore::new(paths.data_dir())))
    }
}

impl<S: KeyValueStore> Storage<S> {
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load both lists
    ///
    /// A missing key yields an empty list. A key whose content cannot be
    /// parsed is logged, copied to a timestamped `.corrupt-*` key and also
    /// treated as empty.
    pub fn load(&mut self) -> BudgetResult<Budget> {
        let expenses = self.load_list(EXPENSES_KEY)?;
        let income = self.load_list(INCOME_KEY)?;

        tracing::debug!(
            expenses = expenses.len(),
            income = income.len(),
            "loaded budget"
        );

        Ok(Budget::new(expenses, income))
    }

    /// Write both lists, overwriting whatever was stored before
    ///
    /// If the income write fails the previous expenses value is put back, so
    /// a failed save leaves the store as it was.
    pub fn save(&mut self, budget: &Budget) -> BudgetResult<()> {
        let expenses = to_json(&budget.expenses)?;
        let income = to_json(&budget.income)?;

        let previous_expenses = self.store.get(EXPENSES_KEY)?;
        self.store.set(EXPENSES_KEY, &expenses)?;
        if let Err(e) = self.store.set(INCOME_KEY, &income) {
            self.restore(EXPENSES_KEY, previous_expenses.as_deref());
            return Err(e);
        }

        tracing::debug!(
            expenses = budget.expenses.len(),
            income = budget.income.len(),
            "saved budget"
        );

        Ok(())
    }

    /// Put `key` back to `previous`, removing it if it did not exist
    fn restore(&mut self, key: &str, previous: Option<&str>) {
        let restored = match previous {
            Some(text) => self.store.set(key, text),
            None => self.store.remove(key),
        };
        if let Err(e) = restored {
            tracing::warn!(key, error = %e, "failed to restore stored entries after a failed save");
        }
    }

    /// Copy unreadable `text` of `key` to a fresh backup key and return that key
    ///
    /// Earlier backups are never overwritten.
    pub fn preserve_corrupt(
        &mut self,
        key: &str,
        text: &str,
        at: DateTime<Utc>,
    ) -> BudgetResult<String> {
        let base = corrupt_key(key, at);
        let mut backup = base.clone();
        let mut attempt = 1;
        while self.store.get(&backup)?.is_some() {
            backup = format!("{}-{}", base, attempt);
            attempt += 1;
        }
        self.store.set(&backup, text)?;
        Ok(backup)
    }

    fn load_list<T: DeserializeOwned>(&mut self, key: &str) -> BudgetResult<Vec<T>> {
        let Some(text) = self.store.get(key)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&text) {
            Ok(list) => Ok(list),
            Err(e) => {
                let backup = self.preserve_corrupt(key, &text, Utc::now())?;
                tracing::warn!(
                    key,
                    backup = %backup,
                    error = %e,
                    "stored entries could not be parsed; starting with an empty list"
                );
                Ok(Vec::new())
            }
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> BudgetResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| BudgetError::Storage(format!("Failed to serialize data: {}", e)))
}
