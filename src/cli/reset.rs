//! Reset command with interactive confirmation

use std::io::{self, BufRead, Write};

use crate::error::{BudgetError, BudgetResult};
use crate::services::{Command, Ledger, Outcome};
use crate::storage::KeyValueStore;

const RESET_PROMPT: &str =
    "Are you sure you want to reset the budget? This will delete all your data. (yes/no): ";

/// Ask a yes/no question; only `yes` or `y` (any case) counts as agreement
pub fn confirm<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> BudgetResult<bool> {
    write!(output, "{}", prompt).map_err(|e| BudgetError::Io(e.to_string()))?;
    output.flush().map_err(|e| BudgetError::Io(e.to_string()))?;

    let mut answer = String::new();
    input
        .read_line(&mut answer)
        .map_err(|e| BudgetError::Io(e.to_string()))?;

    let answer = answer.trim().to_lowercase();
    Ok(answer == "yes" || answer == "y")
}

/// Handle the reset command
pub fn handle_reset_command<S: KeyValueStore>(ledger: &mut Ledger<S>, yes: bool) -> BudgetResult<()> {
    let confirmed = yes || confirm(&mut io::stdin().lock(), &mut io::stdout(), RESET_PROMPT)?;

    match ledger.dispatch(Command::Reset { confirmed })? {
        Outcome::Reset { cleared } => println!("Budget reset. Removed {} entries.", cleared),
        _ => println!("Aborted."),
    }

    Ok(())
}
