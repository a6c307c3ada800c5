use crate::error::StoreError;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS expenses (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        date TEXT NOT NULL,
        amount REAL NOT NULL,
        category TEXT NOT NULL,
        subcategory TEXT NOT NULL DEFAULT '',
        note TEXT NOT NULL DEFAULT ''
    );
    CREATE INDEX IF NOT EXISTS idx_expenses_date ON expenses(date);";

/// Handle to the expense database file.
///
/// Holds only the location; every call to [`ExpenseStore::open`] hands out a
/// fresh connection that is closed when dropped.
#[derive(Debug, Clone)]
pub struct ExpenseStore {
    path: PathBuf,
}

impl ExpenseStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates the schema if it is absent. Existing data is left untouched.
    pub fn initialize(&self) -> Result<(), StoreError> {
        let conn = establish_connection(&self.path)?;
        tracing::info!(path = %self.path.display(), "expense store ready");
        drop(conn);
        Ok(())
    }

    pub fn open(&self) -> Result<Connection, StoreError> {
        Ok(Connection::open(&self.path)?)
    }
}

pub fn establish_connection(path: &Path) -> Result<Connection, StoreError> {
    let conn = Connection::open(path)?;
    conn.execute_batch(SCHEMA)?;
    Ok(conn)
}

#[cfg(test)]
pub fn establish_test_connection() -> rusqlite::Result<Connection> {
    let conn = Connection::open_in_memory()?;
    conn.execute_batch(SCHEMA)?;
    Ok(conn)
}
