//! Storage layer for the expense ledger
//!
//! Wraps a single SQLite connection and hands out repositories borrowing it.
//! Mutations are recorded in the append-only audit log when one is attached.

pub mod categories;
pub mod expenses;
pub mod file_io;
pub mod init;

pub use categories::CategoryRepository;
pub use expenses::ExpenseRepository;
pub use file_io::write_json_atomic;
pub use init::initialize_schema;

use std::path::Path;

use rusqlite::Connection;
use tracing::{debug, warn};

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::ExpensePaths;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

/// Main storage coordinator that owns the database connection
pub struct Storage {
    conn: Connection,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Open the ledger database under the given paths, creating it if needed
    pub fn open(paths: &ExpensePaths) -> ExpenseResult<Self> {
        paths.ensure_directories()?;
        let mut storage = Self::open_at(paths.database_file())?;
        storage.audit = Some(AuditLogger::new(paths.audit_log()));
        Ok(storage)
    }

    /// Open a database file directly, without an audit log
    pub fn open_at<P: AsRef<Path>>(path: P) -> ExpenseResult<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "opening ledger database");
        let conn = Connection::open(path)?;
        initialize_schema(&conn)?;
        Ok(Self { conn, audit: None })
    }

    /// Open a throwaway in-memory database
    pub fn open_in_memory() -> ExpenseResult<Self> {
        let conn = Connection::open_in_memory()?;
        initialize_schema(&conn)?;
        Ok(Self { conn, audit: None })
    }

    /// Close the connection, surfacing any error SQLite reports on close
    pub fn close(self) -> ExpenseResult<()> {
        self.conn
            .close()
            .map_err(|(_, e)| ExpenseError::Storage(format!("Failed to close database: {}", e)))
    }

    pub fn expenses(&self) -> ExpenseRepository<'_> {
        ExpenseRepository::new(&self.conn)
    }

    pub fn categories(&self) -> CategoryRepository<'_> {
        CategoryRepository::new(&self.conn)
    }

    /// The attached audit logger, if any
    pub fn audit_logger(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    pub fn log_create(&self, expense: &Expense) {
        self.log(AuditEntry::create(
            EntityType::Expense,
            expense.id.to_string(),
            Some(expense.category.clone()),
            expense,
        ));
    }

    pub fn log_category_created(&self, name: &str) {
        self.log(AuditEntry::create(
            EntityType::Category,
            name,
            None,
            &serde_json::json!({ "name": name }),
        ));
    }

    pub fn log_delete(&self, expense: &Expense) {
        self.log(AuditEntry::delete(
            EntityType::Expense,
            expense.id.to_string(),
            Some(expense.category.clone()),
            expense,
        ));
    }

    pub fn log_restore(&self, source: &str, removed: usize, restored: usize) {
        self.log(AuditEntry::restore(source, removed, restored));
    }

    // The database commit has already happened; an audit failure is reported, not raised.
    fn log(&self, entry: AuditEntry) {
        if let Some(logger) = &self.audit {
            if let Err(e) = logger.log(&entry) {
                warn!(error = %e, operation = %entry.operation, "failed to write audit entry");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseDate, Money, NewExpense};
    use tempfile::TempDir;

    fn draft(amount: i64, category: &str, date: &str) -> NewExpense {
        NewExpense::new(
            Money::from_cents(amount),
            category,
            "",
            ExpenseDate::parse(date).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_open_creates_layout() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::open(&paths).unwrap();

        assert!(paths.database_file().exists());
        assert!(paths.backup_dir().exists());
        assert!(storage.audit_logger().is_some());
    }

    #[test]
    fn test_data_persists_across_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());

        let storage = Storage::open(&paths).unwrap();
        storage
            .expenses()
            .insert(&draft(5000, "Food", "2024-03-15"))
            .unwrap();
        storage.close().unwrap();

        let reopened = Storage::open(&paths).unwrap();
        assert_eq!(reopened.expenses().count().unwrap(), 1);
    }

    #[test]
    fn test_in_memory_has_default_categories() {
        let storage = Storage::open_in_memory().unwrap();
        let categories = storage.categories().get_all().unwrap();
        assert!(categories.contains(&"Food".to_string()));
        assert!(storage.audit_logger().is_none());
    }

    #[test]
    fn test_audit_entries_written() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::open(&paths).unwrap();

        let id = storage
            .expenses()
            .insert(&draft(1200, "Bills", "2024-03-01"))
            .unwrap();
        let expense = storage.expenses().get(id).unwrap().unwrap();
        storage.log_create(&expense);
        storage.log_delete(&expense);

        let entries = storage.audit_logger().unwrap().read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].entity_id, id.to_string());
    }

    #[test]
    fn test_logging_without_logger_is_noop() {
        let storage = Storage::open_in_memory().unwrap();
        storage.log_restore("nowhere.json", 0, 0);
    }
}
