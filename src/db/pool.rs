//! SQLite connection wrapper (lightweight for CLI usage).

use crate::errors::AppResult;
use rusqlite::{Connection, Result, Transaction};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self { conn })
    }

    /// Private in-memory database, used by tests and dry runs.
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Run `func` as one unit of work.
    ///
    /// Every write performed through the transaction becomes visible only
    /// when `func` returns `Ok`; on `Err` the transaction is dropped and
    /// SQLite rolls everything back.
    pub fn with_transaction<F, T>(&mut self, func: F) -> AppResult<T>
    where
        F: FnOnce(&Transaction<'_>) -> AppResult<T>,
    {
        let tx = self.conn.transaction()?;
        let out = func(&tx)?;
        tx.commit()?;
        Ok(out)
    }

    /// Result of `PRAGMA integrity_check`: "ok" when the file is sound.
    pub fn integrity_check(&self) -> AppResult<String> {
        let verdict: String = self
            .conn
            .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;
        Ok(verdict)
    }

    pub fn vacuum(&self) -> AppResult<()> {
        self.conn.execute_batch("VACUUM;")?;
        Ok(())
    }
}
