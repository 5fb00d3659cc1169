//! CLI command for CSV export

use clap::Args;
use std::path::PathBuf;

use crate::error::ExpenseResult;
use crate::export::export_expenses_to_file;
use crate::models::Month;
use crate::storage::Storage;

/// Arguments for `export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output CSV file path
    pub output: PathBuf,

    /// Only export one month (YYYY-MM), same rows as `list --month`
    #[arg(short, long)]
    pub month: Option<String>,
}

/// Handle the export command
pub fn handle_export_command(storage: &Storage, args: ExportArgs) -> ExpenseResult<()> {
    let month = args.month.as_deref().map(Month::parse).transpose()?;
    let expenses = storage.expenses().list(month.as_ref())?;

    let rows = export_expenses_to_file(&expenses, &args.output)?;
    println!("Exported {} expenses to {}", rows, args.output.display());

    Ok(())
}
