use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use budget_tracker::audit::AuditLogger;
use budget_tracker::cli::{
    handle_expense_command, handle_export_command, handle_history_command, handle_income_command,
    handle_reset_command, ExpenseCommands, ExportArgs, IncomeCommands,
};
use budget_tracker::config::{BudgetPaths, Settings};
use budget_tracker::display::{format_budget_view, format_category_table};
use budget_tracker::services::Ledger;
use budget_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Terminal-based personal budget tracker",
    long_about = "Record expenses and income, see running totals and a per-category \
                  breakdown, and export your data as CSV."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Expense commands
    #[command(subcommand)]
    Expense(ExpenseCommands),

    /// Income commands
    #[command(subcommand)]
    Income(IncomeCommands),

    /// Show expenses, income, category breakdown and totals
    Summary,

    /// Show spending per category
    Categories,

    /// Delete all expenses and income
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Export the budget to a file
    Export(ExportArgs),

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths, writing a default settings file if there is none
    Config,
}

fn init_logging(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = BudgetPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    init_logging(&settings);

    let audit = AuditLogger::new(paths.audit_log());
    let mut ledger = Ledger::open(Storage::open(&paths)?)?;
    if settings.audit_enabled {
        ledger = ledger.with_audit(audit.clone());
    }

    match cli.command {
        Some(Commands::Expense(cmd)) => handle_expense_command(&mut ledger, &settings, cmd)?,
        Some(Commands::Income(cmd)) => handle_income_command(&mut ledger, &settings, cmd)?,
        Some(Commands::Summary) | None => {
            print!(
                "{}",
                format_budget_view(&ledger.view(&settings.currency_symbol))
            );
        }
        Some(Commands::Categories) => {
            let view = ledger.view(&settings.currency_symbol);
            println!("{}", format_category_table(&view.category_rows));
        }
        Some(Commands::Reset { yes }) => handle_reset_command(&mut ledger, yes)?,
        Some(Commands::Export(args)) => handle_export_command(&mut ledger, &settings, args)?,
        Some(Commands::History { limit }) => handle_history_command(&audit, limit)?,
        Some(Commands::Config) => {
            if !paths.settings_file().exists() {
                settings.save(&paths)?;
                println!(
                    "Wrote default settings to {}",
                    paths.settings_file().display()
                );
                println!();
            }

            println!("budget-tracker Configuration");
            println!("============================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Audit log:       {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Export file:     {}", settings.export_file_name);
            println!("  Log level:       {}", settings.log_level);
            println!("  Audit enabled:   {}", settings.audit_enabled);
        }
    }

    Ok(())
}
