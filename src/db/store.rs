//! Durable keyed storage for service records and return visits.
//!
//! `LocalStore` is built once per invocation and handed to whoever needs
//! it. Each public operation runs in its own transaction, so a reader never
//! observes a half-applied write.

use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::db::{records, visits};
use crate::errors::{AppError, AppResult};
use crate::models::record::{ActivityRecord, RecordFields};
use crate::models::visit::{ContactVisit, VisitFields};
use chrono::Local;
use rusqlite::Connection;

pub const RECORD_KIND: &str = "Service record";
pub const VISIT_KIND: &str = "Return visit";

pub struct LocalStore {
    pool: DbPool,
}

/// Current time in the format stored in `created_at` columns.
pub fn now_stamp() -> String {
    Local::now().to_rfc3339()
}

/// Empty both record tables through an already opened unit of work.
pub(crate) fn clear_tables(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        "DELETE FROM activity_records;
         DELETE FROM contact_visits;",
    )?;
    Ok(())
}

impl LocalStore {
    /// Open the database at `path` and bring its schema up to date.
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        Self::from_pool(pool)
    }

    pub fn in_memory() -> AppResult<Self> {
        Self::from_pool(DbPool::in_memory()?)
    }

    pub fn from_pool(pool: DbPool) -> AppResult<Self> {
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn conn(&self) -> &Connection {
        &self.pool.conn
    }

    pub fn pool(&mut self) -> &mut DbPool {
        &mut self.pool
    }

    // ---------------------------
    // Service records
    // ---------------------------

    pub fn add_record(&mut self, fields: &RecordFields) -> AppResult<i64> {
        fields.validate()?;
        let created_at = now_stamp();
        self.pool
            .with_transaction(|tx| records::insert_record(tx, fields, &created_at))
    }

    pub fn get_record(&self, id: i64) -> AppResult<ActivityRecord> {
        records::load_record(&self.pool.conn, id)?.ok_or(AppError::NotFound {
            kind: RECORD_KIND,
            id,
        })
    }

    pub fn records(&self) -> AppResult<Vec<ActivityRecord>> {
        records::load_all_records(&self.pool.conn)
    }

    /// Full overwrite of the mutable fields; `id` and `created_at` stay.
    pub fn update_record(&mut self, id: i64, fields: &RecordFields) -> AppResult<()> {
        fields.validate()?;
        self.pool.with_transaction(|tx| {
            if records::load_record(tx, id)?.is_none() {
                return Err(AppError::NotFound {
                    kind: RECORD_KIND,
                    id,
                });
            }
            records::update_record(tx, id, fields)?;
            Ok(())
        })
    }

    /// Deleting an id that does not exist is a no-op.
    pub fn delete_record(&mut self, id: i64) -> AppResult<()> {
        self.pool.with_transaction(|tx| records::delete_record(tx, id))?;
        Ok(())
    }

    // ---------------------------
    // Return visits
    // ---------------------------

    pub fn add_visit(&mut self, fields: &VisitFields) -> AppResult<i64> {
        fields.validate()?;
        let created_at = now_stamp();
        self.pool
            .with_transaction(|tx| visits::insert_visit(tx, fields, &created_at))
    }

    pub fn get_visit(&self, id: i64) -> AppResult<ContactVisit> {
        visits::load_visit(&self.pool.conn, id)?.ok_or(AppError::NotFound {
            kind: VISIT_KIND,
            id,
        })
    }

    pub fn visits(&self) -> AppResult<Vec<ContactVisit>> {
        visits::load_all_visits(&self.pool.conn)
    }

    pub fn update_visit(&mut self, id: i64, fields: &VisitFields) -> AppResult<()> {
        fields.validate()?;
        self.pool.with_transaction(|tx| {
            if visits::load_visit(tx, id)?.is_none() {
                return Err(AppError::NotFound {
                    kind: VISIT_KIND,
                    id,
                });
            }
            visits::update_visit(tx, id, fields)?;
            Ok(())
        })
    }

    pub fn delete_visit(&mut self, id: i64) -> AppResult<()> {
        self.pool.with_transaction(|tx| visits::delete_visit(tx, id))?;
        Ok(())
    }

    // ---------------------------
    // Bulk
    // ---------------------------

    /// Empty both kinds together, or neither.
    pub fn clear_all(&mut self) -> AppResult<()> {
        self.pool.with_transaction(|tx| clear_tables(tx))
    }
}
