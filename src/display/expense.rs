//! Expense display formatting
//!
//! Table and detail views for expenses and the category vocabulary.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::{Expense, Money};

use super::report::truncate;

const DESCRIPTION_WIDTH: usize = 40;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format expenses as a table, followed by a total line
///
/// `total_label` is e.g. "Total" or "Total for 2024-03".
pub fn format_expense_table(
    expenses: &[Expense],
    currency_symbol: &str,
    date_format: &str,
    total_label: &str,
) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let rows: Vec<ExpenseRow> = expenses
        .iter()
        .map(|e| ExpenseRow {
            id: e.id.to_string(),
            date: e.date.format(date_format),
            category: e.category.clone(),
            description: truncate(&e.description, DESCRIPTION_WIDTH),
            amount: e.amount.format_with_symbol(currency_symbol),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::last()).with(Alignment::right()));

    let total: Money = expenses.iter().map(|e| e.amount).sum();
    format!(
        "{}\n{}: {}\n",
        table,
        total_label,
        total.format_with_symbol(currency_symbol)
    )
}

/// Format a single expense's details
pub fn format_expense_details(expense: &Expense, currency_symbol: &str, date_format: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense: {}\n", expense.id));
    output.push_str(&format!("  Date:        {}\n", expense.date.format(date_format)));
    output.push_str(&format!(
        "  Amount:      {}\n",
        expense.amount.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!("  Category:    {}\n", expense.category));
    if !expense.description.is_empty() {
        output.push_str(&format!("  Description: {}\n", expense.description));
    }
    output.push_str(&format!("  Recorded:    {} UTC\n", expense.created_at_text()));

    output
}

/// Format the category vocabulary, one per line
pub fn format_category_list(categories: &[String]) -> String {
    if categories.is_empty() {
        return "No categories found.\n".to_string();
    }

    let mut output = String::new();
    for name in categories {
        output.push_str(&format!("  {}\n", name));
    }
    output
}
