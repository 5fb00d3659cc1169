//! CLI commands for reports
//!
//! Spending summary and category charts.

use clap::{Subcommand, ValueEnum};

use crate::config::settings::Settings;
use crate::display::chart::NO_CHART_DATA;
use crate::display::{format_bar_chart, format_distribution};
use crate::error::ExpenseResult;
use crate::models::Month;
use crate::reports::SpendingSummary;
use crate::storage::Storage;

/// Which chart(s) to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ChartKind {
    /// Percentage share per category
    Pie,
    /// Bars scaled to the largest category
    Bar,
    /// Both views
    Both,
}

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Totals and a per-category breakdown
    Summary {
        /// Only include one month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Text charts of spending by category
    Chart {
        /// Only include one month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,

        /// Chart style
        #[arg(short, long, value_enum, default_value = "both")]
        kind: ChartKind,
    },
}

/// Handle report commands
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> ExpenseResult<()> {
    match cmd {
        ReportCommands::Summary { month } => {
            let month = month.as_deref().map(Month::parse).transpose()?;
            let summary = SpendingSummary::generate(storage, month)?;
            print!("{}", summary.format_terminal(&settings.currency_symbol));
        }

        ReportCommands::Chart { month, kind } => {
            let month = month.as_deref().map(Month::parse).transpose()?;
            let summary = SpendingSummary::generate(storage, month)?;
            let scope = match &summary.month {
                Some(m) => format!(" ({})", m),
                None => String::new(),
            };

            if summary.categories.is_empty() {
                println!("{}", NO_CHART_DATA);
                return Ok(());
            }

            if matches!(kind, ChartKind::Pie | ChartKind::Both) {
                print!(
                    "{}",
                    format_distribution(
                        &summary.categories,
                        &format!("Expenses by Category{}", scope)
                    )
                );
            }
            if kind == ChartKind::Both {
                println!();
            }
            if matches!(kind, ChartKind::Bar | ChartKind::Both) {
                print!(
                    "{}",
                    format_bar_chart(
                        &summary.categories,
                        &format!("Spending by Category{}", scope),
                        &settings.currency_symbol
                    )
                );
            }
        }
    }

    Ok(())
}
