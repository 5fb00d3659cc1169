//! Reports for the expense tracker
//!
//! Aggregation over expense records and the spending summary built on it.

pub mod aggregate;
pub mod spending;

pub use aggregate::{by_category, total, CategoryTotal};
pub use spending::SpendingSummary;
