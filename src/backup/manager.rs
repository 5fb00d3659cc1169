//! Backup manager for the expense ledger
//!
//! Writes backup documents to disk and keeps track of the timestamped
//! backups stored in the backups directory.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, Utc};
use tracing::info;

use crate::config::paths::ExpensePaths;
use crate::error::{ExpenseError, ExpenseResult};
use crate::storage::{write_json_atomic, Storage};

use super::document::BackupDocument;

/// Metadata about a backup in the backups directory
#[derive(Debug, Clone)]
pub struct BackupInfo {
    /// Backup filename
    pub filename: String,
    /// Full path to backup
    pub path: PathBuf,
    /// When the backup was created, from the filename
    pub created_at: DateTime<Utc>,
    /// Size in bytes
    pub size_bytes: u64,
}

/// Creates and lists backups
pub struct BackupManager {
    backup_dir: PathBuf,
}

impl BackupManager {
    /// Create a new BackupManager for the configured backups directory
    pub fn new(paths: &ExpensePaths) -> Self {
        Self {
            backup_dir: paths.backup_dir(),
        }
    }

    /// Back up the whole ledger into the backups directory
    ///
    /// Returns the path to the created backup file.
    pub fn create_backup(&self, storage: &Storage) -> ExpenseResult<PathBuf> {
        let now = Utc::now();
        let filename = format!(
            "backup-{}-{:03}.json",
            now.format("%Y%m%d-%H%M%S"),
            now.timestamp_subsec_millis()
        );
        let path = self.backup_dir.join(filename);
        self.write_backup(storage, &path)?;
        Ok(path)
    }

    /// Back up the whole ledger to an explicit path
    ///
    /// Returns the number of records written.
    pub fn write_backup(&self, storage: &Storage, path: &Path) -> ExpenseResult<usize> {
        let expenses = storage.expenses().list_by_id()?;
        let document = BackupDocument::from_expenses(&expenses);
        write_json_atomic(path, &document)?;

        info!(path = %path.display(), records = document.total_records, "backup written");
        Ok(document.total_records)
    }

    /// Read and parse a backup file
    pub fn read_document(path: &Path) -> ExpenseResult<BackupDocument> {
        if !path.exists() {
            return Err(ExpenseError::backup_not_found(path.display().to_string()));
        }
        let text = fs::read_to_string(path)
            .map_err(|e| ExpenseError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
        BackupDocument::parse(&text)
    }

    /// List backups in the backups directory, newest first
    pub fn list_backups(&self) -> ExpenseResult<Vec<BackupInfo>> {
        if !self.backup_dir.exists() {
            return Ok(Vec::new());
        }

        let mut backups = Vec::new();

        for entry in fs::read_dir(&self.backup_dir).map_err(|e| {
            ExpenseError::Io(format!("Failed to read backup directory: {}", e))
        })? {
            let entry = entry
                .map_err(|e| ExpenseError::Io(format!("Failed to read directory entry: {}", e)))?;

            let path = entry.path();
            if path.extension().map_or(false, |ext| ext == "json") {
                if let Some(info) = parse_backup_info(&path) {
                    backups.push(info);
                }
            }
        }

        backups.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(backups)
    }

    /// Get the most recent backup
    pub fn get_latest_backup(&self) -> ExpenseResult<Option<BackupInfo>> {
        Ok(self.list_backups()?.into_iter().next())
    }

    /// Resolve `latest`, a filename in the backups directory, or a path
    pub fn resolve(&self, reference: &str) -> ExpenseResult<PathBuf> {
        if reference == "latest" {
            return self
                .get_latest_backup()?
                .map(|info| info.path)
                .ok_or_else(|| ExpenseError::backup_not_found("latest"));
        }

        let direct = PathBuf::from(reference);
        if direct.exists() {
            return Ok(direct);
        }

        let in_dir = self.backup_dir.join(reference);
        if in_dir.exists() {
            return Ok(in_dir);
        }

        Err(ExpenseError::backup_not_found(reference))
    }

    /// Get backup directory path
    pub fn backup_dir(&self) -> &PathBuf {
        &self.backup_dir
    }
}

/// Parse backup info from a backup file in the backups directory
fn parse_backup_info(path: &Path) -> Option<BackupInfo> {
    let filename = path.file_name()?.to_string_lossy().to_string();

    // backup-YYYYMMDD-HHMMSS-mmm.json
    let date_part = filename.strip_prefix("backup-")?.strip_suffix(".json")?;
    let created_at = parse_backup_timestamp(date_part)?;

    let size_bytes = fs::metadata(path).ok()?.len();

    Some(BackupInfo {
        filename,
        path: path.to_path_buf(),
        created_at,
        size_bytes,
    })
}

/// Parse a backup timestamp from the filename date part
fn parse_backup_timestamp(date_str: &str) -> Option<DateTime<Utc>> {
    let parts: Vec<&str> = date_str.split('-').collect();
    if parts.len() < 2 || parts.len() > 3 {
        return None;
    }

    let date_part = parts[0];
    let time_part = parts[1];
    let millis: u32 = match parts.get(2) {
        Some(ms) => ms.parse().ok()?,
        None => 0,
    };

    if date_part.len() != 8 || time_part.len() != 6 {
        return None;
    }

    let year: i32 = date_part[0..4].parse().ok()?;
    let month: u32 = date_part[4..6].parse().ok()?;
    let day: u32 = date_part[6..8].parse().ok()?;
    let hour: u32 = time_part[0..2].parse().ok()?;
    let minute: u32 = time_part[2..4].parse().ok()?;
    let second: u32 = time_part[4..6].parse().ok()?;

    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let time = chrono::NaiveTime::from_hms_milli_opt(hour, minute, second, millis)?;

    Some(date.and_time(time).and_utc())
}
