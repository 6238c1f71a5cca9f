//! CLI command for data export

use std::path::PathBuf;

use clap::Args;

use crate::config::settings::Settings;
use crate::error::BudgetResult;
use crate::export::ExportFormat;
use crate::services::{Command, Ledger, Outcome};
use crate::storage::KeyValueStore;

/// Export arguments
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path (defaults to the configured file name, `budget.csv`)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Export format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: ExportFormat,
}

/// Handle the export command
pub fn handle_export_command<S: KeyValueStore>(
    ledger: &mut Ledger<S>,
    settings: &Settings,
    args: ExportArgs,
) -> BudgetResult<()> {
    let destination = args
        .output
        .unwrap_or_else(|| PathBuf::from(&settings.export_file_name));

    if let Outcome::Exported { path, entries, .. } = ledger.dispatch(Command::Export {
        destination,
        format: args.format,
    })? {
        println!("Exported {} entries to: {}", entries, path.display());
    }

    Ok(())
}
