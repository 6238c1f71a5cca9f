//! Expense CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_expense_table, format_summary};
use crate::error::BudgetResult;
use crate::services::{Command, Ledger, Outcome};
use crate::storage::KeyValueStore;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// What the money was spent on
        name: String,
        /// Category (grouped by exact match)
        category: String,
        /// Amount, e.g. "3.50"
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// List expenses with the index used by `delete`
    #[command(alias = "ls")]
    List,
    /// Delete the expense at INDEX
    #[command(alias = "rm")]
    Delete {
        /// Index as shown by `expense list`
        index: usize,
    },
}

/// Handle an expense command
pub fn handle_expense_command<S: KeyValueStore>(
    ledger: &mut Ledger<S>,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> BudgetResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            name,
            category,
            amount,
        } => {
            if let Outcome::ExpenseAdded { index, expense } =
                ledger.dispatch(Command::AddExpense {
                    name,
                    category,
                    amount,
                })?
            {
                println!(
                    "Added expense #{}: {} ({}) {}",
                    index,
                    expense.name,
                    expense.category,
                    expense.amount.format_with_symbol(symbol)
                );
            }
        }

        ExpenseCommands::List => {}

        ExpenseCommands::Delete { index } => {
            if let Outcome::ExpenseDeleted { expense, .. } =
                ledger.dispatch(Command::DeleteExpense { index })?
            {
                println!(
                    "Deleted expense: {} ({}) {}",
                    expense.name,
                    expense.category,
                    expense.amount.format_with_symbol(symbol)
                );
            }
        }
    }

    let view = ledger.view(symbol);
    println!("{}", format_expense_table(&view.expense_rows));
    println!();
    print!("{}", format_summary(&view.summary));

    Ok(())
}
