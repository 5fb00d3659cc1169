//! Spending Summary
//!
//! Totals and category breakdown for the whole ledger or a single month.

use crate::error::ExpenseResult;
use crate::models::{Money, Month};
use crate::storage::Storage;

use super::aggregate::{by_category, total, CategoryTotal};

/// Spending summary for an optional month
#[derive(Debug, Clone)]
pub struct SpendingSummary {
    /// Month filter the summary was generated for
    pub month: Option<Month>,
    /// Sum of every amount in scope
    pub total: Money,
    /// Number of records in scope
    pub record_count: usize,
    /// Breakdown, largest category first
    pub categories: Vec<CategoryTotal>,
}

impl SpendingSummary {
    /// Generate a summary from the store
    pub fn generate(storage: &Storage, month: Option<Month>) -> ExpenseResult<Self> {
        let expenses = storage.expenses().list(month.as_ref())?;

        Ok(Self {
            month,
            total: total(&expenses),
            record_count: expenses.len(),
            categories: by_category(&expenses),
        })
    }

    /// Heading used by the terminal output and the list footer
    pub fn total_label(&self) -> String {
        match &self.month {
            Some(month) => format!("Total for {}", month),
            None => "Total".to_string(),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = String::new();

        let scope = match &self.month {
            Some(month) => month.to_string(),
            None => "all time".to_string(),
        };
        output.push_str(&format!("Spending Summary: {}\n", scope));
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "{}: {}\n",
            self.total_label(),
            self.total.format_with_symbol(currency_symbol)
        ));
        output.push_str(&format!("Expenses: {}\n\n", self.record_count));

        if self.categories.is_empty() {
            output.push_str("No expenses recorded.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<30} {:>14} {:>6} {:>7}\n",
            "Category", "Amount", "Count", "%"
        ));
        output.push_str(&"-".repeat(60));
        output.push('\n');

        for row in &self.categories {
            output.push_str(&format!(
                "{:<30} {:>14} {:>6} {:>6.1}%\n",
                row.category,
                row.total.format_with_symbol(currency_symbol),
                row.count,
                row.percentage
            ));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::LedgerService;

    fn seeded_storage() -> Storage {
        let storage = Storage::open_in_memory().unwrap();
        let service = LedgerService::new(&storage);
        service
            .add_expense("50", "Food", "lunch", Some("2024-03-15"))
            .unwrap();
        service
            .add_expense("1200", "Bills", "", Some("2024-03-01"))
            .unwrap();
        service
            .add_expense("30", "Food", "", Some("2024-02-20"))
            .unwrap();
        storage
    }

    #[test]
    fn test_generate_all_time() {
        let storage = seeded_storage();
        let summary = SpendingSummary::generate(&storage, None).unwrap();

        assert_eq!(summary.total, Money::from_units_cents(1280, 0));
        assert_eq!(summary.record_count, 3);
        assert_eq!(summary.categories[0].category, "Bills");
        assert_eq!(summary.total_label(), "Total");
    }

    #[test]
    fn test_generate_for_month() {
        let storage = seeded_storage();
        let month = Month::parse("2024-03").unwrap();
        let summary = SpendingSummary::generate(&storage, Some(month)).unwrap();

        assert_eq!(summary.total, Money::from_units_cents(1250, 0));
        assert_eq!(summary.record_count, 2);
        assert_eq!(summary.total_label(), "Total for 2024-03");
    }

    #[test]
    fn test_format_terminal() {
        let storage = seeded_storage();
        let summary = SpendingSummary::generate(&storage, None).unwrap();
        let output = summary.format_terminal("Rs:");

        assert!(output.contains("Spending Summary: all time"));
        assert!(output.contains("Total: Rs:1280.00"));
        assert!(output.contains("Bills"));
        assert!(output.contains("Food"));
    }

    #[test]
    fn test_format_terminal_empty() {
        let storage = Storage::open_in_memory().unwrap();
        let summary = SpendingSummary::generate(&storage, None).unwrap();
        assert!(summary.format_terminal("$").contains("No expenses recorded."));
    }
}
