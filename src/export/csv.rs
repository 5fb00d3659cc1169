//! CSV Export functionality
//!
//! Writes expenses as `Date,Category,Description,Amount` rows in the order
//! they are given. Amounts carry two decimals and no currency symbol.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

/// Column headings of the export file
pub const CSV_HEADER: [&str; 4] = ["Date", "Category", "Description", "Amount"];

/// Write expenses as CSV, returning the number of data rows
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> ExpenseResult<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(CSV_HEADER)?;

    for expense in expenses {
        csv_writer.write_record([
            expense.date.to_string(),
            expense.category.clone(),
            expense.description.clone(),
            expense.amount.to_string(),
        ])?;
    }

    csv_writer
        .flush()
        .map_err(|e| ExpenseError::Export(format!("Failed to flush CSV output: {}", e)))?;

    Ok(expenses.len())
}

/// Export expenses to a CSV file, replacing it if present
pub fn export_expenses_to_file(expenses: &[Expense], path: &Path) -> ExpenseResult<usize> {
    let file = File::create(path).map_err(|e| {
        ExpenseError::Io(format!("Failed to create {}: {}", path.display(), e))
    })?;

    let rows = export_expenses_csv(expenses, file)?;
    info!(path = %path.display(), rows, "expenses exported");
    Ok(rows)
}
