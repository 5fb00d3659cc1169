//! Backup CLI commands
//!
//! Implements CLI commands for backup management.

use clap::Subcommand;
use std::path::PathBuf;

use crate::backup::{BackupManager, RestoreManager};
use crate::config::paths::ExpensePaths;
use crate::config::settings::Settings;
use crate::error::{ExpenseError, ExpenseResult};
use crate::services::LedgerService;
use crate::storage::Storage;

/// Backup subcommands
#[derive(Subcommand, Debug)]
pub enum BackupCommands {
    /// Back up all expenses to a JSON file
    Create {
        /// Output path (defaults to a timestamped file in the backups directory)
        path: Option<PathBuf>,
    },

    /// List backups in the backups directory
    List {
        /// Show detailed information
        #[arg(short, long)]
        detailed: bool,
    },

    /// Replace all expenses with the contents of a backup
    Restore {
        /// Backup filename or path (use 'latest' for most recent)
        backup: String,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Check a backup file without restoring it
    Info {
        /// Backup filename or path
        backup: String,
    },
}

/// Handle a backup command
pub fn handle_backup_command(
    storage: &Storage,
    paths: &ExpensePaths,
    settings: &Settings,
    cmd: BackupCommands,
) -> ExpenseResult<()> {
    let manager = BackupManager::new(paths);
    let ledger =
        LedgerService::new(storage).require_positive_amounts(settings.require_positive_amounts);
    let restore = RestoreManager::new(&ledger);

    match cmd {
        BackupCommands::Create { path } => {
            let (path, records) = match path {
                Some(path) => {
                    let records = manager.write_backup(storage, &path)?;
                    (path, records)
                }
                None => {
                    let path = manager.create_backup(storage)?;
                    (path, storage.expenses().count()?)
                }
            };
            println!("Backup created: {}", path.display());
            println!("Records: {}", records);
        }

        BackupCommands::List { detailed } => {
            let backups = manager.list_backups()?;

            if backups.is_empty() {
                println!("No backups found.");
                println!("Create one with: expenses backup create");
                return Ok(());
            }

            println!("Available Backups");
            println!("=================");
            println!();

            for (i, backup) in backups.iter().enumerate() {
                let age = chrono::Utc::now().signed_duration_since(backup.created_at);

                if detailed {
                    println!(
                        "{}. {}\n   Created: {}\n   Size: {}\n   Age: {}\n",
                        i + 1,
                        backup.filename,
                        backup.created_at.format("%Y-%m-%d %H:%M:%S UTC"),
                        format_size(backup.size_bytes),
                        format_duration(age),
                    );
                } else {
                    println!(
                        "  {}. {} ({} ago, {})",
                        i + 1,
                        backup.filename,
                        format_duration(age),
                        format_size(backup.size_bytes),
                    );
                }
            }

            println!();
            println!("Total: {} backup(s)", backups.len());
        }

        BackupCommands::Restore { backup, force } => {
            let backup_path = manager.resolve(&backup)?;
            let validation = restore.validate_backup(&backup_path)?;

            println!("Backup Information");
            println!("==================");
            println!("File: {}", backup_path.display());
            println!("Created: {}", display_backup_date(&validation.backup_date));
            println!("Status: {}", validation.summary());
            println!();

            if let Some(problem) = validation.problem {
                return Err(ExpenseError::Validation(problem));
            }

            if !force {
                println!("WARNING: This will replace ALL current expenses!");
                println!("To proceed, run again with --force flag:");
                println!("  expenses backup restore {} --force", backup);
                return Ok(());
            }

            println!("Creating backup of current data before restore...");
            let safety = manager.create_backup(storage)?;
            println!("Pre-restore backup saved: {}", safety.display());
            println!();

            let result = restore.restore_from_file(&backup_path)?;

            println!("Restore complete!");
            println!("{}", result.summary());
        }

        BackupCommands::Info { backup } => {
            let backup_path = manager.resolve(&backup)?;
            let validation = restore.validate_backup(&backup_path)?;
            let metadata = std::fs::metadata(&backup_path)?;

            println!("Backup Details");
            println!("==============");
            println!("File: {}", backup_path.display());
            println!("Size: {}", format_size(metadata.len()));
            println!("Created: {}", display_backup_date(&validation.backup_date));
            println!("Records: {}", validation.actual_records);
            println!();
            println!("Status: {}", validation.summary());
        }
    }

    Ok(())
}

fn display_backup_date(backup_date: &str) -> &str {
    if backup_date.is_empty() {
        "(unknown)"
    } else {
        backup_date
    }
}

/// Format a duration in human-readable form
fn format_duration(duration: chrono::Duration) -> String {
    let total_seconds = duration.num_seconds();

    if total_seconds < 60 {
        return format!("{}s", total_seconds);
    }

    let minutes = total_seconds / 60;
    if minutes < 60 {
        return format!("{}m", minutes);
    }

    let hours = minutes / 60;
    if hours < 24 {
        return format!("{}h", hours);
    }

    format!("{}d", hours / 24)
}

/// Format a byte count in human-readable form
fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
