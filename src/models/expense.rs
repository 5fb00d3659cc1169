//! Expense model
//!
//! An `Expense` is a stored ledger row. A `NewExpense` is a validated draft
//! that has not been assigned an id or creation time yet.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::category::normalize_category;
use super::date::ExpenseDate;
use super::money::Money;
use crate::error::{ExpenseError, ExpenseResult};

/// Layout of `created_at` values in the database and in backups
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Store-assigned expense identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(i64);

impl ExpenseId {
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ExpenseId {
    type Err = ExpenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| ExpenseError::Validation(format!("Invalid expense id: '{}'", s)))
    }
}

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, assigned by the store
    pub id: ExpenseId,

    /// Amount spent
    pub amount: Money,

    /// Category label (never blank)
    pub category: String,

    /// Free-form description, possibly empty
    #[serde(default)]
    pub description: String,

    /// Day the expense occurred
    pub date: ExpenseDate,

    /// When the row was inserted (UTC)
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// `created_at` in the persisted layout
    pub fn created_at_text(&self) -> String {
        format_timestamp(&self.created_at)
    }
}

/// A validated expense that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExpense {
    pub amount: Money,
    pub category: String,
    pub description: String,
    pub date: ExpenseDate,
}

impl NewExpense {
    /// Build a draft, trimming the category and description
    pub fn new(
        amount: Money,
        category: &str,
        description: &str,
        date: ExpenseDate,
    ) -> ExpenseResult<Self> {
        Ok(Self {
            amount,
            category: normalize_category(category)?,
            description: description.trim().to_string(),
            date,
        })
    }

    /// Build a draft from raw text as typed by the user
    pub fn parse(amount: &str, category: &str, description: &str, date: &str) -> ExpenseResult<Self> {
        let amount = Money::parse(amount)
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;
        let date = ExpenseDate::parse(date)?;
        Self::new(amount, category, description, date)
    }
}

/// Render a timestamp in the persisted `YYYY-MM-DD HH:MM:SS` layout
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a persisted timestamp, also accepting RFC 3339
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
        .map(|naive| naive.and_utc())
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(s)
                .map(|dt| dt.with_timezone(&Utc))
                .ok()
        })
}
