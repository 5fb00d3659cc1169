//! Service layer for the expense tracker
//!
//! The service layer provides business logic on top of the storage layer,
//! handling input validation and the audit trail.

pub mod ledger;

pub use ledger::{LedgerService, ReplaceOutcome};
