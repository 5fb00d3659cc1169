//! Totals and per-category sums over a set of expenses
//!
//! Aggregation works on the literal category label of each record; it does
//! not consult the category vocabulary.

use std::collections::HashMap;

use crate::models::{Expense, Money};

/// Sum of amounts for one category label
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Money,
    /// Number of records with this label
    pub count: usize,
    /// Share of the absolute grand total, 0-100
    pub percentage: f64,
}

/// Sum of all amounts; zero for an empty set
pub fn total(expenses: &[Expense]) -> Money {
    expenses.iter().map(|e| e.amount).sum()
}

/// Per-category sums ordered by descending total
///
/// Ties keep the order in which each label first appears in `expenses`.
pub fn by_category(expenses: &[Expense]) -> Vec<CategoryTotal> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for expense in expenses {
        let slot = *index.entry(expense.category.as_str()).or_insert_with(|| {
            totals.push(CategoryTotal {
                category: expense.category.clone(),
                total: Money::zero(),
                count: 0,
                percentage: 0.0,
            });
            totals.len() - 1
        });
        totals[slot].total += expense.amount;
        totals[slot].count += 1;
    }

    let grand: i64 = totals.iter().map(|t| t.total.abs().cents()).sum();
    if grand != 0 {
        for row in &mut totals {
            row.percentage = row.total.abs().cents() as f64 / grand as f64 * 100.0;
        }
    }

    // sort_by is stable, so first-appearance order survives for equal totals
    totals.sort_by(|a, b| b.total.cmp(&a.total));
    totals
}
