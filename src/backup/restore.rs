//! Backup restoration for the expense ledger
//!
//! A restore replaces every stored expense with the contents of a backup
//! document. All entries are validated before the store is touched, and the
//! swap itself runs in one transaction.

use std::path::Path;

use tracing::info;

use crate::error::{ExpenseError, ExpenseResult};
use crate::services::LedgerService;

use super::document::BackupDocument;
use super::manager::BackupManager;

/// Handles restoring from backups
pub struct RestoreManager<'a> {
    ledger: &'a LedgerService<'a>,
}

impl<'a> RestoreManager<'a> {
    pub fn new(ledger: &'a LedgerService<'a>) -> Self {
        Self { ledger }
    }

    /// Restore the ledger from a backup file
    ///
    /// Everything currently stored is replaced.
    pub fn restore_from_file(&self, backup_path: &Path) -> ExpenseResult<RestoreResult> {
        let document = BackupManager::read_document(backup_path)?;
        self.restore_document(&document, &backup_path.display().to_string())
    }

    /// Restore the ledger from a parsed document
    pub fn restore_document(
        &self,
        document: &BackupDocument,
        source: &str,
    ) -> ExpenseResult<RestoreResult> {
        let drafts = document.to_drafts()?;
        let outcome = self.ledger.replace_all(&drafts, source)?;

        info!(source, restored = outcome.inserted, "restore complete");

        Ok(RestoreResult {
            backup_date: document.backup_date.clone(),
            removed: outcome.removed,
            restored: outcome.inserted,
        })
    }

    /// Validate a backup file without restoring it
    ///
    /// Entries are checked against the same rules a restore applies,
    /// including the ledger's amount policy.
    pub fn validate_backup(&self, backup_path: &Path) -> ExpenseResult<ValidationResult> {
        let document = BackupManager::read_document(backup_path)?;
        let problem = document
            .to_drafts()
            .and_then(|drafts| self.ledger.check_drafts(&drafts))
            .err()
            .map(|e| match e {
                ExpenseError::Validation(msg) => msg,
                other => other.to_string(),
            });

        Ok(ValidationResult {
            backup_date: document.backup_date.clone(),
            declared_records: document.total_records,
            actual_records: document.expenses.len(),
            problem,
        })
    }
}

/// Result of a restore operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestoreResult {
    /// `backup_date` recorded in the document
    pub backup_date: String,
    /// Records deleted from the store
    pub removed: usize,
    /// Records inserted from the backup
    pub restored: usize,
}

impl RestoreResult {
    pub fn summary(&self) -> String {
        format!(
            "Restored {} records (replaced {})",
            self.restored, self.removed
        )
    }
}

/// Result of validating a backup
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub backup_date: String,
    /// `total_records` as written in the document
    pub declared_records: usize,
    /// Entries actually present
    pub actual_records: usize,
    /// First entry that would fail validation, if any
    pub problem: Option<String>,
}

impl ValidationResult {
    /// Whether a restore of this backup would succeed
    pub fn is_valid(&self) -> bool {
        self.problem.is_none()
    }

    pub fn summary(&self) -> String {
        match &self.problem {
            Some(problem) => format!("Invalid backup: {}", problem),
            None if self.declared_records != self.actual_records => format!(
                "Valid backup with {} records (header says {})",
                self.actual_records, self.declared_records
            ),
            None => format!("Valid backup with {} records", self.actual_records),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::ExpensePaths;
    use crate::models::{Expense, Money};
    use crate::storage::Storage;
    use tempfile::TempDir;

    fn create_test_env() -> (Storage, BackupManager, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::open(&paths).unwrap();
        (storage, BackupManager::new(&paths), temp_dir)
    }

    fn seed(ledger: &LedgerService) {
        ledger
            .add_expense("50", "Food", "lunch", Some("2024-03-15"))
            .unwrap();
        ledger
            .add_expense("1200", "Bills", "", Some("2024-03-01"))
            .unwrap();
        ledger
            .add_expense("30", "Food", "", Some("2024-02-20"))
            .unwrap();
    }

    fn content(expenses: &[Expense]) -> Vec<(Money, String, String, String)> {
        let mut rows: Vec<_> = expenses
            .iter()
            .map(|e| {
                (
                    e.amount,
                    e.category.clone(),
                    e.description.clone(),
                    e.date.to_string(),
                )
            })
            .collect();
        rows.sort();
        rows
    }

    #[test]
    fn test_backup_restore_round_trip() {
        let (storage, backups, _temp) = create_test_env();
        let ledger = LedgerService::new(&storage);
        seed(&ledger);
        let before = storage.expenses().list(None).unwrap();

        let path = backups.create_backup(&storage).unwrap();
        ledger
            .add_expense("99", "Pets", "", Some("2024-04-01"))
            .unwrap();

        let result = RestoreManager::new(&ledger).restore_from_file(&path).unwrap();
        assert_eq!(result.removed, 4);
        assert_eq!(result.restored, 3);

        let after = storage.expenses().list(None).unwrap();
        assert_eq!(content(&before), content(&after));

        // Ids are assigned fresh, never reused
        let max_before = before.iter().map(|e| e.id).max().unwrap();
        assert!(after.iter().all(|e| e.id > max_before));
    }

    #[test]
    fn test_bad_entry_leaves_store_untouched() {
        let (storage, _backups, temp) = create_test_env();
        let ledger = LedgerService::new(&storage);
        seed(&ledger);
        let before = storage.expenses().list(None).unwrap();

        let path = temp.path().join("bad.json");
        std::fs::write(
            &path,
            r#"{"expenses": [
                {"amount": 10, "category": "Food", "description": "", "date": "2024-01-01"},
                {"amount": 20, "category": "Food", "description": "", "date": "2024-13-45"}
            ], "backup_date": "2024-01-02T00:00:00", "total_records": 2}"#,
        )
        .unwrap();

        let err = RestoreManager::new(&ledger).restore_from_file(&path).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(storage.expenses().list(None).unwrap(), before);
    }

    #[test]
    fn test_missing_expenses_key_is_format_error() {
        let (storage, _backups, temp) = create_test_env();
        let ledger = LedgerService::new(&storage);
        seed(&ledger);

        let path = temp.path().join("nokey.json");
        std::fs::write(&path, r#"{"backup_date": "2024-01-02", "total_records": 0}"#).unwrap();

        let err = RestoreManager::new(&ledger).restore_from_file(&path).unwrap_err();
        assert!(err.is_format());
        assert_eq!(storage.expenses().count().unwrap(), 3);
    }

    #[test]
    fn test_restore_empty_document_clears_ledger() {
        let (storage, _backups, _temp) = create_test_env();
        let ledger = LedgerService::new(&storage);
        seed(&ledger);

        let document = BackupDocument::parse(r#"{"expenses": []}"#).unwrap();
        let result = RestoreManager::new(&ledger)
            .restore_document(&document, "inline")
            .unwrap();
        assert_eq!(result.restored, 0);
        assert_eq!(storage.expenses().count().unwrap(), 0);
    }

    #[test]
    fn test_validate_backup() {
        let (storage, backups, temp) = create_test_env();
        let ledger = LedgerService::new(&storage);
        seed(&ledger);
        let restore = RestoreManager::new(&ledger);

        let good = backups.create_backup(&storage).unwrap();
        let validation = restore.validate_backup(&good).unwrap();
        assert!(validation.is_valid());
        assert_eq!(validation.actual_records, 3);
        assert_eq!(validation.summary(), "Valid backup with 3 records");

        let bad = temp.path().join("bad.json");
        std::fs::write(
            &bad,
            r#"{"expenses": [{"amount": 1, "category": " ", "date": "2024-01-01"}]}"#,
        )
        .unwrap();
        let validation = restore.validate_backup(&bad).unwrap();
        assert!(!validation.is_valid());
        assert!(validation.summary().starts_with("Invalid backup"));
    }

    #[test]
    fn test_validate_backup_applies_amount_policy() {
        let (storage, _backups, temp) = create_test_env();
        let path = temp.path().join("refund.json");
        std::fs::write(
            &path,
            r#"{"expenses": [
                {"amount": 10, "category": "Food", "description": "", "date": "2024-01-01"},
                {"amount": -4, "category": "Food", "description": "refund", "date": "2024-01-02"}
            ]}"#,
        )
        .unwrap();

        let permissive = LedgerService::new(&storage);
        assert!(RestoreManager::new(&permissive)
            .validate_backup(&path)
            .unwrap()
            .is_valid());

        let strict = LedgerService::new(&storage).require_positive_amounts(true);
        let validation = RestoreManager::new(&strict).validate_backup(&path).unwrap();
        assert!(!validation.is_valid());
        assert!(validation.summary().contains("greater than zero"));
    }
}
