//! Calendar date and month types
//!
//! Expense dates are persisted as zero-padded `YYYY-MM-DD` text and month
//! filters match on the `YYYY-MM` prefix of that text. Both types only accept
//! the exact zero-padded layout, so a value that parses is guaranteed to
//! line up with the stored prefix.

use chrono::format::{Item, StrftimeItems};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ExpenseError, ExpenseResult};

/// A calendar date on which an expense occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseDate(NaiveDate);

impl ExpenseDate {
    /// Parse a strict `YYYY-MM-DD` date
    pub fn parse(s: &str) -> ExpenseResult<Self> {
        let s = s.trim();
        let invalid = || {
            ExpenseError::Validation(format!(
                "Invalid date '{}': expected YYYY-MM-DD",
                s
            ))
        };

        if !has_layout(s, &[4, 2, 2]) {
            return Err(invalid());
        }

        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Self)
            .map_err(|_| invalid())
    }

    /// Today's date in local time
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// The calendar month containing this date
    pub fn month(&self) -> Month {
        Month {
            year: self.0.year(),
            month: self.0.month(),
        }
    }

    /// Format with a strftime pattern
    ///
    /// Falls back to `YYYY-MM-DD` when the pattern is not valid.
    pub fn format(&self, pattern: &str) -> String {
        if is_valid_pattern(pattern) {
            self.0.format(pattern).to_string()
        } else {
            self.to_string()
        }
    }
}

impl fmt::Display for ExpenseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for ExpenseDate {
    type Err = ExpenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Whether chrono understands every specifier in a strftime pattern
pub fn is_valid_pattern(pattern: &str) -> bool {
    !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}

/// A calendar month used to filter expenses (`YYYY-MM`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    /// Parse a strict `YYYY-MM` month
    pub fn parse(s: &str) -> ExpenseResult<Self> {
        let s = s.trim();
        let invalid = || {
            ExpenseError::Validation(format!("Invalid month '{}': expected YYYY-MM", s))
        };

        if !has_layout(s, &[4, 2]) {
            return Err(invalid());
        }

        let year: i32 = s[..4].parse().map_err(|_| invalid())?;
        let month: u32 = s[5..].parse().map_err(|_| invalid())?;

        NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;

        Ok(Self { year, month })
    }

    /// The current month in local time
    pub fn current() -> Self {
        ExpenseDate::today().month()
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// The `YYYY-MM` text every stored date in this month starts with
    pub fn prefix(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }

    /// Check whether a date falls within this month
    pub fn contains(&self, date: &ExpenseDate) -> bool {
        date.as_naive().year() == self.year && date.as_naive().month() == self.month
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.prefix())
    }
}

impl FromStr for Month {
    type Err = ExpenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Check that `s` is dash-separated groups of ASCII digits with the given widths
fn has_layout(s: &str, widths: &[usize]) -> bool {
    let groups: Vec<&str> = s.split('-').collect();
    groups.len() == widths.len()
        && groups
            .iter()
            .zip(widths)
            .all(|(group, width)| group.len() == *width && group.bytes().all(|b| b.is_ascii_digit()))
}
