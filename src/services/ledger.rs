//! Ledger service
//!
//! Business logic for recording and removing expenses: turns raw user input
//! into validated drafts, drives the store, and writes the audit trail.

use tracing::{debug, info};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseDate, ExpenseId, Month, NewExpense};
use crate::storage::Storage;

/// Service for expense ledger management
pub struct LedgerService<'a> {
    storage: &'a Storage,
    require_positive: bool,
}

/// Outcome of replacing the whole ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplaceOutcome {
    pub removed: usize,
    pub inserted: usize,
}

impl<'a> LedgerService<'a> {
    /// Create a new ledger service
    pub fn new(storage: &'a Storage) -> Self {
        Self {
            storage,
            require_positive: false,
        }
    }

    /// Reject amounts that are zero or negative
    pub fn require_positive_amounts(mut self, enabled: bool) -> Self {
        self.require_positive = enabled;
        self
    }

    /// Record an expense from raw text
    ///
    /// `date` defaults to today when `None`.
    pub fn add_expense(
        &self,
        amount: &str,
        category: &str,
        description: &str,
        date: Option<&str>,
    ) -> ExpenseResult<Expense> {
        let date = match date {
            Some(text) => text.to_string(),
            None => ExpenseDate::today().to_string(),
        };
        let draft = NewExpense::parse(amount, category, description, &date)?;
        self.record(&draft)
    }

    /// Record an already validated draft
    pub fn record(&self, draft: &NewExpense) -> ExpenseResult<Expense> {
        self.check_amount(draft)?;

        let is_new_category = !self.storage.categories().exists(&draft.category)?;
        let id = self.storage.expenses().insert(draft)?;
        let expense = self
            .storage
            .expenses()
            .get(id)?
            .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;

        if is_new_category {
            debug!(category = %expense.category, "category added to vocabulary");
            self.storage.log_category_created(&expense.category);
        }
        self.storage.log_create(&expense);

        Ok(expense)
    }

    /// Get an expense by id
    pub fn get_expense(&self, id: ExpenseId) -> ExpenseResult<Option<Expense>> {
        self.storage.expenses().get(id)
    }

    /// Delete an expense, returning the removed record
    pub fn delete_expense(&self, id: ExpenseId) -> ExpenseResult<Expense> {
        let expense = self
            .storage
            .expenses()
            .get(id)?
            .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;

        self.storage.expenses().delete(id)?;
        self.storage.log_delete(&expense);

        Ok(expense)
    }

    /// List expenses newest first, optionally restricted to a `YYYY-MM` month
    pub fn list_expenses(&self, month: Option<&str>) -> ExpenseResult<Vec<Expense>> {
        let month = month.map(Month::parse).transpose()?;
        self.storage.expenses().list(month.as_ref())
    }

    /// Category vocabulary, alphabetical
    pub fn categories(&self) -> ExpenseResult<Vec<String>> {
        self.storage.categories().get_all()
    }

    /// Replace every stored expense with `drafts` in one transaction
    pub fn replace_all(&self, drafts: &[NewExpense], source: &str) -> ExpenseResult<ReplaceOutcome> {
        self.check_drafts(drafts)?;

        let removed = self.storage.expenses().count()?;
        let ids = self.storage.expenses().replace_all(drafts)?;
        let outcome = ReplaceOutcome {
            removed,
            inserted: ids.len(),
        };

        info!(
            source,
            removed = outcome.removed,
            inserted = outcome.inserted,
            "ledger replaced"
        );
        self.storage
            .log_restore(source, outcome.removed, outcome.inserted);

        Ok(outcome)
    }

    /// Apply the amount policy to a batch without writing anything
    pub fn check_drafts(&self, drafts: &[NewExpense]) -> ExpenseResult<()> {
        drafts.iter().try_for_each(|draft| self.check_amount(draft))
    }

    fn check_amount(&self, draft: &NewExpense) -> ExpenseResult<()> {
        if self.require_positive && !draft.amount.is_positive() {
            return Err(ExpenseError::Validation(format!(
                "Amount must be greater than zero, got {}",
                draft.amount
            )));
        }
        Ok(())
    }
}
