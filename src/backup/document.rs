//! Backup document format
//!
//! A backup is a single JSON object holding every expense plus the time it
//! was taken and a record count:
//!
//! ```json
//! {
//!   "expenses": [{"id": 1, "amount": 50.0, "category": "Food",
//!                 "description": "lunch", "date": "2024-03-15",
//!                 "created_at": "2024-03-15 12:00:00"}],
//!   "backup_date": "2024-03-16T09:30:00.000000",
//!   "total_records": 1
//! }
//! ```

use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseDate, Money, NewExpense};

/// Layout of `backup_date` (local time, microsecond precision)
const BACKUP_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// One expense as stored in a backup file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackupEntry {
    /// Id at backup time; not carried over on restore
    #[serde(default)]
    pub id: Option<i64>,
    pub amount: f64,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
    pub date: String,
    /// Insertion time at backup time; not carried over on restore
    #[serde(default)]
    pub created_at: Option<String>,
}

impl From<&Expense> for BackupEntry {
    fn from(expense: &Expense) -> Self {
        Self {
            id: Some(expense.id.value()),
            amount: expense.amount.to_f64(),
            category: expense.category.clone(),
            description: Some(expense.description.clone()),
            date: expense.date.to_string(),
            created_at: Some(expense.created_at_text()),
        }
    }
}

impl BackupEntry {
    /// Validate the entry the same way a fresh insert is validated
    pub fn to_draft(&self) -> ExpenseResult<NewExpense> {
        let amount = Money::from_f64(self.amount)
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;
        let date = ExpenseDate::parse(&self.date)?;
        NewExpense::new(
            amount,
            &self.category,
            self.description.as_deref().unwrap_or(""),
            date,
        )
    }
}

/// Full-ledger snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackupDocument {
    pub expenses: Vec<BackupEntry>,
    #[serde(default)]
    pub backup_date: String,
    #[serde(default)]
    pub total_records: usize,
}

impl BackupDocument {
    /// Snapshot the given expenses, ordered by id
    pub fn from_expenses(expenses: &[Expense]) -> Self {
        let mut entries: Vec<(i64, BackupEntry)> = expenses
            .iter()
            .map(|e| (e.id.value(), BackupEntry::from(e)))
            .collect();
        entries.sort_by_key(|(id, _)| *id);

        let expenses: Vec<BackupEntry> = entries.into_iter().map(|(_, entry)| entry).collect();
        Self {
            total_records: expenses.len(),
            backup_date: Local::now().format(BACKUP_DATE_FORMAT).to_string(),
            expenses,
        }
    }

    /// Parse a backup document from JSON text
    pub fn parse(text: &str) -> ExpenseResult<Self> {
        serde_json::from_str(text)
            .map_err(|e| ExpenseError::Format(format!("Invalid backup document: {}", e)))
    }

    /// Validate every entry into drafts, failing on the first bad one
    ///
    /// Nothing is written; the caller decides what to do with the drafts.
    pub fn to_drafts(&self) -> ExpenseResult<Vec<NewExpense>> {
        if self.total_records != self.expenses.len() {
            warn!(
                declared = self.total_records,
                actual = self.expenses.len(),
                "backup record count does not match its header"
            );
        }

        self.expenses
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                entry.to_draft().map_err(|e| match e {
                    ExpenseError::Validation(msg) => {
                        ExpenseError::Validation(format!("Backup entry {}: {}", index + 1, msg))
                    }
                    other => other,
                })
            })
            .collect()
    }
}
