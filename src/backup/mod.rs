//! Backup system for the expense ledger
//!
//! # Architecture
//!
//! - `BackupDocument`: the JSON snapshot format and its validation
//! - `BackupManager`: writes backups and lists the backups directory
//! - `RestoreManager`: validates a backup and replaces the ledger with it
//!
//! A restore validates every entry before deleting anything; a malformed
//! backup leaves the ledger as it was.

mod document;
mod manager;
mod restore;

pub use document::{BackupDocument, BackupEntry};
pub use manager::{BackupInfo, BackupManager};
pub use restore::{RestoreManager, RestoreResult, ValidationResult};
