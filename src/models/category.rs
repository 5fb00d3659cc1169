//! Category vocabulary
//!
//! Categories are free-form labels. The vocabulary is seeded with a default
//! set and grows whenever an expense is recorded under a new label.

use crate::error::{ExpenseError, ExpenseResult};

/// Labels every new ledger starts with
pub const DEFAULT_CATEGORIES: [&str; 8] = [
    "Food",
    "Transportation",
    "Entertainment",
    "Shopping",
    "Bills",
    "Healthcare",
    "Education",
    "Others",
];

/// Trim a category label and reject it if nothing is left
pub fn normalize_category(name: &str) -> ExpenseResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ExpenseError::Validation(
            "Category cannot be empty".into(),
        ));
    }
    Ok(name.to_string())
}
