//! Expense CLI commands
//!
//! Implements CLI commands for recording, listing and removing expenses.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_category_list, format_expense_details, format_expense_table};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{ExpenseId, Month};
use crate::services::LedgerService;
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Amount spent (e.g. 12.50)
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category label; new labels are added to the category list
        category: String,
        /// Free-form description
        #[arg(short, long, default_value = "")]
        description: String,
        /// Date of the expense (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// List expenses, newest first
    #[command(alias = "ls")]
    List {
        /// Only show one month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Show a single expense
    Show {
        /// Expense ID
        id: String,
    },

    /// Delete an expense
    #[command(alias = "rm")]
    Delete {
        /// Expense ID
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },

    /// List known categories
    Categories,
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> ExpenseResult<()> {
    let ledger =
        LedgerService::new(storage).require_positive_amounts(settings.require_positive_amounts);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            description,
            date,
        } => {
            let expense = ledger.add_expense(&amount, &category, &description, date.as_deref())?;
            println!(
                "Added expense {}: {} on {} ({})",
                expense.id,
                expense.amount.format_with_symbol(symbol),
                expense.date,
                expense.category
            );
        }

        ExpenseCommands::List { month } => {
            let month = month.as_deref().map(Month::parse).transpose()?;
            let expenses = storage.expenses().list(month.as_ref())?;
            let label = match &month {
                Some(m) => format!("Total for {}", m),
                None => "Total".to_string(),
            };
            print!(
                "{}",
                format_expense_table(&expenses, symbol, &settings.date_format, &label)
            );
        }

        ExpenseCommands::Show { id } => {
            let id: ExpenseId = id.parse()?;
            let expense = ledger
                .get_expense(id)?
                .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;
            print!(
                "{}",
                format_expense_details(&expense, symbol, &settings.date_format)
            );
        }

        ExpenseCommands::Delete { id, force } => {
            let id: ExpenseId = id.parse()?;
            let expense = ledger
                .get_expense(id)?
                .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;

            if !force {
                print!(
                    "{}",
                    format_expense_details(&expense, symbol, &settings.date_format)
                );
                println!();
                println!("To delete this expense, run again with --force flag:");
                println!("  expenses delete {} --force", id);
                return Ok(());
            }

            ledger.delete_expense(id)?;
            println!("Deleted expense {}", id);
        }

        ExpenseCommands::Categories => {
            print!("{}", format_category_list(&ledger.categories()?));
        }
    }

    Ok(())
}
