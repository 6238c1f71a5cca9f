//! Ledger service
//!
//! Owns the budget and applies user commands to it. Every command runs to
//! completion before the next one: validate, mutate, persist both lists,
//! append to the audit log. The caller re-renders from [`Ledger::budget`]
//! afterwards.

use std::path::PathBuf;

use crate::audit::{AuditEntry, AuditLogger};
use crate::display::BudgetView;
use crate::error::{BudgetError, BudgetResult};
use crate::export::{export_to_file, ExportFormat};
use crate::models::{Budget, Expense, Income, Money, MAX_CENTS};
use crate::reports::BudgetSummary;
use crate::storage::{FileStore, KeyValueStore, Storage};

/// A user action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Append an expense; `amount` is the text as typed
    AddExpense {
        name: String,
        category: String,
        amount: String,
    },
    /// Append an income entry; `amount` is the text as typed
    AddIncome { name: String, amount: String },
    /// Remove the expense currently at `index`
    DeleteExpense { index: usize },
    /// Remove the income entry currently at `index`
    DeleteIncome { index: usize },
    /// Clear everything, but only when `confirmed`
    Reset { confirmed: bool },
    /// Write the budget to `destination`; never mutates
    Export {
        destination: PathBuf,
        format: ExportFormat,
    },
}

/// What a command did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    ExpenseAdded { index: usize, expense: Expense },
    IncomeAdded { index: usize, income: Income },
    ExpenseDeleted { index: usize, expense: Expense },
    IncomeDeleted { index: usize, income: Income },
    /// Both lists were cleared; `cleared` entries were removed
    Reset { cleared: usize },
    ResetDeclined,
    Exported {
        path: PathBuf,
        format: ExportFormat,
        entries: usize,
    },
}

impl Outcome {
    /// Whether the budget changed
    pub fn is_mutation(&self) -> bool {
        !matches!(self, Outcome::ResetDeclined | Outcome::Exported { .. })
    }
}

/// Parse an amount typed by the user, rejecting anything that isn't a decimal number
pub fn parse_amount(text: &str) -> BudgetResult<Money> {
    Money::parse(text)
        .map_err(|e| BudgetError::Validation(format!("Invalid amount '{}': {}", text.trim(), e)))
}

/// Reject an add that would take the summed magnitude of a list past [`MAX_CENTS`]
///
/// Keeping every list under the bound keeps each total, and the balance
/// between them, well inside the `i64` range.
fn ensure_within_limit(
    existing: impl Iterator<Item = Money>,
    amount: Money,
    list: &str,
) -> BudgetResult<()> {
    let used: u128 = existing
        .map(|m| u128::from(m.cents().unsigned_abs()))
        .sum();
    if used + u128::from(amount.cents().unsigned_abs()) > MAX_CENTS as u128 {
        return Err(BudgetError::Validation(format!(
            "Adding {} would take {} past the limit of {}",
            amount,
            list,
            Money::from_cents(MAX_CENTS)
        )));
    }
    Ok(())
}

/// The budget plus everything needed to persist and audit it
pub struct Ledger<S: KeyValueStore = FileStore> {
    storage: Storage<S>,
    budget: Budget,
    audit: Option<AuditLogger>,
}

impl<S: KeyValueStore> Ledger<S> {
    /// Load the budget from `storage`
    pub fn open(mut storage: Storage<S>) -> BudgetResult<Self> {
        let budget = storage.load()?;
        Ok(Self {
            storage,
            budget,
            audit: None,
        })
    }

    /// Record every mutation in `logger`
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    pub fn budget(&self) -> &Budget {
        &self.budget
    }

    pub fn storage(&self) -> &Storage<S> {
        &self.storage
    }

    pub fn summary(&self) -> BudgetSummary {
        BudgetSummary::from_budget(&self.budget)
    }

    pub fn view(&self, currency_symbol: &str) -> BudgetView {
        BudgetView::render(&self.budget, currency_symbol)
    }

    /// Apply one command
    ///
    /// On error the in-memory budget and the store are left as they were.
    pub fn dispatch(&mut self, command: Command) -> BudgetResult<Outcome> {
        tracing::debug!(?command, "dispatching command");

        match command {
            Command::AddExpense {
                name,
                category,
                amount,
            } => {
                let amount = parse_amount(&amount)?;
                ensure_within_limit(
                    self.budget.expenses.iter().map(|e| e.amount),
                    amount,
                    "total expenses",
                )?;
                let expense = Expense::new(name, category, amount);

                let previous = self.budget.clone();
                let index = self.budget.push_expense(expense.clone());
                self.commit(previous)?;
                self.record(AuditEntry::expense_added(index, &expense));

                Ok(Outcome::ExpenseAdded { index, expense })
            }

            Command::AddIncome { name, amount } => {
                let amount = parse_amount(&amount)?;
                ensure_within_limit(
                    self.budget.income.iter().map(|i| i.amount),
                    amount,
                    "total income",
                )?;
                let income = Income::new(name, amount);

                let previous = self.budget.clone();
                let index = self.budget.push_income(income.clone());
                self.commit(previous)?;
                self.record(AuditEntry::income_added(index, &income));

                Ok(Outcome::IncomeAdded { index, income })
            }

            Command::DeleteExpense { index } => {
                let previous = self.budget.clone();
                let expense = self
                    .budget
                    .remove_expense(index)
                    .ok_or_else(|| BudgetError::expense_not_found(index))?;
                self.commit(previous)?;
                self.record(AuditEntry::expense_deleted(index, &expense));

                Ok(Outcome::ExpenseDeleted { index, expense })
            }

            Command::DeleteIncome { index } => {
                let previous = self.budget.clone();
                let income = self
                    .budget
                    .remove_income(index)
                    .ok_or_else(|| BudgetError::income_not_found(index))?;
                self.commit(previous)?;
                self.record(AuditEntry::income_deleted(index, &income));

                Ok(Outcome::IncomeDeleted { index, income })
            }

            Command::Reset { confirmed: false } => Ok(Outcome::ResetDeclined),

            Command::Reset { confirmed: true } => {
                let previous = self.budget.clone();
                let cleared = previous.entry_count();
                self.budget.clear();
                self.commit(previous.clone())?;
                self.record(AuditEntry::reset(&previous));

                tracing::info!(cleared, "budget reset");
                Ok(Outcome::Reset { cleared })
            }

            Command::Export {
                destination,
                format,
            } => {
                let entries = export_to_file(&self.budget, &destination, format)?;
                tracing::info!(path = %destination.display(), ?format, entries, "exported budget");

                Ok(Outcome::Exported {
                    path: destination,
                    format,
                    entries,
                })
            }
        }
    }

    /// Persist the current budget, restoring `previous` if that fails
    fn commit(&mut self, previous: Budget) -> BudgetResult<()> {
        if let Err(e) = self.storage.save(&self.budget) {
            self.budget = previous;
            return Err(e);
        }
        Ok(())
    }

    /// Append to the audit log; a failed audit write never undoes a saved change
    fn record(&self, entry: AuditEntry) {
        if let Some(logger) = &self.audit {
            if let Err(e) = logger.log(&entry) {
                tracing::warn!(error = %e, path = %logger.path().display(), "failed to write audit entry");
            }
        }
    }
}
