//! Income CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_income_table, format_summary};
use crate::error::BudgetResult;
use crate::services::{Command, Ledger, Outcome};
use crate::storage::KeyValueStore;

/// Income subcommands
#[derive(Subcommand, Debug)]
pub enum IncomeCommands {
    /// Record a new income entry
    Add {
        /// Source of the income
        name: String,
        /// Amount, e.g. "1500.00"
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// List income entries with the index used by `delete`
    #[command(alias = "ls")]
    List,
    /// Delete the income entry at INDEX
    #[command(alias = "rm")]
    Delete {
        /// Index as shown by `income list`
        index: usize,
    },
}

/// Handle an income command
pub fn handle_income_command<S: KeyValueStore>(
    ledger: &mut Ledger<S>,
    settings: &Settings,
    cmd: IncomeCommands,
) -> BudgetResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        IncomeCommands::Add { name, amount } => {
            if let Outcome::IncomeAdded { index, income } =
                ledger.dispatch(Command::AddIncome { name, amount })?
            {
                println!(
                    "Added income #{}: {} {}",
                    index,
                    income.name,
                    income.amount.format_with_symbol(symbol)
                );
            }
        }

        IncomeCommands::List => {}

        IncomeCommands::Delete { index } => {
            if let Outcome::IncomeDeleted { income, .. } =
                ledger.dispatch(Command::DeleteIncome { index })?
            {
                println!(
                    "Deleted income: {} {}",
                    income.name,
                    income.amount.format_with_symbol(symbol)
                );
            }
        }
    }

    let view = ledger.view(symbol);
    println!("{}", format_income_table(&view.income_rows));
    println!();
    print!("{}", format_summary(&view.summary));

    Ok(())
}
