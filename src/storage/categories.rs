//! Category vocabulary repository
//!
//! Reads and extends the `categories` table. Labels are never removed.

use rusqlite::{params, Connection, OptionalExtension};

use crate::error::ExpenseResult;

/// Repository for the category vocabulary
pub struct CategoryRepository<'a> {
    conn: &'a Connection,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// All known labels, alphabetically sorted
    pub fn get_all(&self) -> ExpenseResult<Vec<String>> {
        let mut stmt = self.conn.prepare("SELECT name FROM categories ORDER BY name")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut names = Vec::new();
        for row in rows {
            names.push(row?);
        }
        Ok(names)
    }

    /// Check whether a label is already in the vocabulary (exact match)
    pub fn exists(&self, name: &str) -> ExpenseResult<bool> {
        let found = self
            .conn
            .query_row(
                "SELECT 1 FROM categories WHERE name = ?1",
                params![name],
                |_| Ok(()),
            )
            .optional()?;
        Ok(found.is_some())
    }

    /// Add a label if it is not present yet. Returns true if it was added.
    pub fn ensure(&self, name: &str) -> ExpenseResult<bool> {
        ensure_category(self.conn, name)
    }
}

/// Insert a label if missing; shared with the expense repository so both
/// writes land in the same transaction
pub(crate) fn ensure_category(conn: &Connection, name: &str) -> ExpenseResult<bool> {
    let inserted = conn.execute(
        "INSERT OR IGNORE INTO categories (name) VALUES (?1)",
        params![name],
    )?;
    Ok(inserted > 0)
}
