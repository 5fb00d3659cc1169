//! Display formatting for terminal output
//!
//! Tables, detail views and text charts for the CLI.

pub mod chart;
pub mod expense;
pub mod report;

pub use chart::{format_bar_chart, format_distribution};
pub use expense::{format_category_list, format_expense_details, format_expense_table};
