//! Core data models for the expense tracker
//!
//! This module contains the data structures that represent the ledger
//! domain: amounts, dates, months, expenses, and the category vocabulary.

pub mod category;
pub mod date;
pub mod expense;
pub mod money;

pub use category::{normalize_category, DEFAULT_CATEGORIES};
pub use date::{ExpenseDate, Month};
pub use expense::{Expense, ExpenseId, NewExpense};
pub use money::{Money, MoneyParseError};
