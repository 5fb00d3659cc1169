//! Expense repository for SQLite storage
//!
//! Owns every query against the `expenses` table. Inserts also extend the
//! category vocabulary inside the same transaction.

use chrono::{DateTime, Utc};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::debug;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::expense::{format_timestamp, parse_timestamp};
use crate::models::{Expense, ExpenseDate, ExpenseId, Money, Month, NewExpense};

use super::categories::ensure_category;

const SELECT_COLUMNS: &str = "SELECT id, amount, category, description, date, created_at FROM expenses";

/// Repository for expense persistence
pub struct ExpenseRepository<'a> {
    conn: &'a Connection,
}

impl<'a> ExpenseRepository<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Store a validated expense and return its new id
    pub fn insert(&self, draft: &NewExpense) -> ExpenseResult<ExpenseId> {
        let tx = self.conn.unchecked_transaction()?;
        let id = insert_row(&tx, draft, &Utc::now())?;
        ensure_category(&tx, &draft.category)?;
        tx.commit()?;

        debug!(id = id.value(), category = %draft.category, "inserted expense");
        Ok(id)
    }

    /// Get an expense by id
    pub fn get(&self, id: ExpenseId) -> ExpenseResult<Option<Expense>> {
        let sql = format!("{} WHERE id = ?1", SELECT_COLUMNS);
        let expense = self
            .conn
            .query_row(&sql, params![id.value()], row_to_expense)
            .optional()?;
        Ok(expense)
    }

    /// Delete an expense. Fails with NotFound if the id does not exist.
    pub fn delete(&self, id: ExpenseId) -> ExpenseResult<()> {
        let rows = self
            .conn
            .execute("DELETE FROM expenses WHERE id = ?1", params![id.value()])?;

        if rows == 0 {
            return Err(ExpenseError::expense_not_found(id.to_string()));
        }

        debug!(id = id.value(), "deleted expense");
        Ok(())
    }

    /// List expenses, newest date first and most recently inserted first
    /// within a date, optionally restricted to one calendar month
    pub fn list(&self, month: Option<&Month>) -> ExpenseResult<Vec<Expense>> {
        let mut expenses = Vec::new();

        match month {
            Some(month) => {
                let sql = format!(
                    "{} WHERE date LIKE ?1 ORDER BY date DESC, id DESC",
                    SELECT_COLUMNS
                );
                let mut stmt = self.conn.prepare(&sql)?;
                let pattern = format!("{}%", month.prefix());
                let rows = stmt.query_map(params![pattern], row_to_expense)?;
                for row in rows {
                    expenses.push(row?);
                }
            }
            None => {
                let sql = format!("{} ORDER BY date DESC, id DESC", SELECT_COLUMNS);
                let mut stmt = self.conn.prepare(&sql)?;
                let rows = stmt.query_map([], row_to_expense)?;
                for row in rows {
                    expenses.push(row?);
                }
            }
        }

        debug!(count = expenses.len(), month = ?month.map(|m| m.prefix()), "listed expenses");
        Ok(expenses)
    }

    /// All expenses in insertion (id) order, as written to backups
    pub fn list_by_id(&self) -> ExpenseResult<Vec<Expense>> {
        let sql = format!("{} ORDER BY id ASC", SELECT_COLUMNS);
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([], row_to_expense)?;

        let mut expenses = Vec::new();
        for row in rows {
            expenses.push(row?);
        }
        Ok(expenses)
    }

    /// Number of stored expenses
    pub fn count(&self) -> ExpenseResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM expenses", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Replace every stored expense with the given drafts
    ///
    /// Runs as a single transaction: on any failure nothing is deleted.
    /// Returns the ids assigned to the new rows, in input order.
    pub fn replace_all(&self, drafts: &[NewExpense]) -> ExpenseResult<Vec<ExpenseId>> {
        let tx = self.conn.unchecked_transaction()?;
        let removed = tx.execute("DELETE FROM expenses", [])?;

        let created_at = Utc::now();
        let mut ids = Vec::with_capacity(drafts.len());
        for draft in drafts {
            ids.push(insert_row(&tx, draft, &created_at)?);
            ensure_category(&tx, &draft.category)?;
        }

        tx.commit()?;

        debug!(removed, inserted = ids.len(), "replaced all expenses");
        Ok(ids)
    }
}

fn insert_row(
    conn: &Connection,
    draft: &NewExpense,
    created_at: &DateTime<Utc>,
) -> ExpenseResult<ExpenseId> {
    conn.execute(
        "INSERT INTO expenses (amount, category, description, date, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            draft.amount.to_f64(),
            draft.category,
            draft.description,
            draft.date.to_string(),
            format_timestamp(created_at),
        ],
    )?;
    Ok(ExpenseId::new(conn.last_insert_rowid()))
}

fn row_to_expense(row: &Row<'_>) -> rusqlite::Result<Expense> {
    let id: i64 = row.get(0)?;

    let amount: f64 = row.get(1)?;
    let amount = Money::from_f64(amount)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(1, Type::Real, Box::new(e)))?;

    let date: String = row.get(4)?;
    let date = ExpenseDate::parse(&date)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e)))?;

    let created_at: Option<String> = row.get(5)?;
    let created_at = created_at.as_deref().and_then(parse_timestamp).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            5,
            Type::Text,
            Box::new(ExpenseError::Storage(format!(
                "Unreadable created_at for expense {}",
                id
            ))),
        )
    })?;

    Ok(Expense {
        id: ExpenseId::new(id),
        amount,
        category: row.get(2)?,
        description: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
        date,
        created_at,
    })
}
