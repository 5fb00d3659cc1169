//! Expense Tracker - personal expense ledger for the terminal
//!
//! Records dated, categorized expenses in a local SQLite database, lists and
//! filters them by month, aggregates totals per category, draws text charts,
//! and moves data in and out through CSV export and JSON backups.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Money, dates, months and expense records
//! - `storage`: SQLite-backed ledger store
//! - `services`: Input validation and the audit trail
//! - `reports`: Totals and per-category aggregation
//! - `audit`: Append-only audit log
//! - `backup`: JSON backup and restore
//! - `export`: CSV export
//! - `display`: Tables and text charts
//! - `cli`: Command handlers for the `expenses` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::ExpensePaths;
//! use expense_tracker::services::LedgerService;
//! use expense_tracker::storage::Storage;
//!
//! let paths = ExpensePaths::new()?;
//! let storage = Storage::open(&paths)?;
//! let ledger = LedgerService::new(&storage);
//! ledger.add_expense("12.50", "Food", "lunch", None)?;
//! ```

pub mod audit;
pub mod backup;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
