//! Export module for budget-tracker
//!
//! - CSV: both entry lists in one spreadsheet-compatible file (`budget.csv`)
//! - JSON: machine-readable snapshot with totals
//! - YAML: human-readable snapshot with totals

pub mod csv;
pub mod json;
pub mod yaml;

use std::path::Path;

use clap::ValueEnum;

use crate::error::{BudgetError, BudgetResult};
use crate::models::Budget;
use crate::storage::file_io::write_bytes_atomic;

pub use self::csv::{export_budget_csv, CSV_HEADER};
pub use self::json::{export_budget_json, BudgetSnapshot, SnapshotTotals, EXPORT_SCHEMA_VERSION};
pub use self::yaml::export_budget_yaml;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (one row per entry)
    #[default]
    Csv,
    /// JSON snapshot
    Json,
    /// YAML snapshot
    Yaml,
}

/// Write the budget to `path` in the given format, returning the number of entries exported
///
/// The file is replaced atomically; a failed export leaves any previous file intact.
pub fn export_to_file(budget: &Budget, path: &Path, format: ExportFormat) -> BudgetResult<usize> {
    let mut buffer = Vec::new();

    match format {
        ExportFormat::Csv => {
            export_budget_csv(budget, &mut buffer)?;
        }
        ExportFormat::Json => export_budget_json(budget, &mut buffer, true)?,
        ExportFormat::Yaml => export_budget_yaml(budget, &mut buffer)?,
    }

    write_bytes_atomic(path, &buffer).map_err(|e| {
        BudgetError::Export(format!("Failed to write {}: {}", path.display(), e))
    })?;

    Ok(budget.entry_count())
}
