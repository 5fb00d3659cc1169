//! Text charts of spending by category
//!
//! Two views over `by_category` output: a share listing (the pie chart
//! equivalent) and a horizontal bar chart scaled to the largest category.

use crate::reports::CategoryTotal;

use super::report::{format_bar, format_percentage, separator, truncate};

const LABEL_WIDTH: usize = 18;
const BAR_WIDTH: usize = 30;

/// Message shown when there is nothing to chart
pub const NO_CHART_DATA: &str = "No data available for chart";

/// Share of total spending per category
pub fn format_distribution(rows: &[CategoryTotal], title: &str) -> String {
    if rows.is_empty() {
        return format!("{}\n", NO_CHART_DATA);
    }

    let mut output = String::new();
    output.push_str(&format!("{}\n", title));
    output.push_str(&separator(LABEL_WIDTH + 10));
    output.push('\n');

    for row in rows {
        output.push_str(&format!(
            "{:<width$} {:>8}\n",
            truncate(&row.category, LABEL_WIDTH),
            format_percentage(row.percentage),
            width = LABEL_WIDTH
        ));
    }

    output
}

/// Horizontal bars, longest for the largest category
pub fn format_bar_chart(rows: &[CategoryTotal], title: &str, currency_symbol: &str) -> String {
    if rows.is_empty() {
        return format!("{}\n", NO_CHART_DATA);
    }

    let max = rows
        .iter()
        .map(|r| r.total.to_f64())
        .fold(0.0_f64, f64::max);

    let mut output = String::new();
    output.push_str(&format!("{}\n", title));
    output.push_str(&separator(LABEL_WIDTH + BAR_WIDTH + 16));
    output.push('\n');

    for row in rows {
        output.push_str(&format!(
            "{:<width$} {} {:>14}\n",
            truncate(&row.category, LABEL_WIDTH),
            format_bar(row.total.to_f64(), max, BAR_WIDTH),
            row.total.format_with_symbol(currency_symbol),
            width = LABEL_WIDTH
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn row(category: &str, cents: i64, percentage: f64) -> CategoryTotal {
        CategoryTotal {
            category: category.to_string(),
            total: Money::from_cents(cents),
            count: 1,
            percentage,
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(format_distribution(&[], "x"), "No data available for chart\n");
        assert_eq!(format_bar_chart(&[], "x", "$"), "No data available for chart\n");
    }

    #[test]
    fn test_distribution_lists_shares() {
        let output = format_distribution(
            &[row("Bills", 120000, 93.75), row("Food", 8000, 6.25)],
            "Expenses by Category",
        );
        assert!(output.starts_with("Expenses by Category\n"));
        assert!(output.contains("94%"));
        assert!(output.contains("6.2%") || output.contains("6.3%"));
    }

    #[test]
    fn test_bar_chart_scales_to_largest() {
        let output = format_bar_chart(
            &[row("Bills", 10000, 66.7), row("Food", 5000, 33.3)],
            "Spending",
            "$",
        );
        let lines: Vec<&str> = output.lines().collect();
        let full = lines[2].chars().filter(|c| *c == '█').count();
        let half = lines[3].chars().filter(|c| *c == '█').count();
        assert_eq!(full, BAR_WIDTH);
        assert_eq!(half, BAR_WIDTH / 2);
        assert!(lines[3].contains("$50.00"));
    }
}
