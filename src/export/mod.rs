//! Export module for the expense tracker
//!
//! CSV export of an expense listing, spreadsheet-compatible.

pub mod csv;

pub use self::csv::{export_expenses_csv, export_expenses_to_file, CSV_HEADER};
