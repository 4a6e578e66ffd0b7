//! Row-level access to the `activity_records` table.

use crate::errors::{AppError, AppResult};
use crate::models::record::{ActivityRecord, RecordFields};
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const SELECT_RECORD: &str =
    "SELECT id, created_at, date, hours, study_count, note FROM activity_records";

pub fn map_record(row: &Row) -> Result<ActivityRecord> {
    let date_str: String = row.get("date")?;

    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    Ok(ActivityRecord {
        id: row.get("id")?,
        created_at: row.get("created_at")?,
        date,
        hours: row.get("hours")?,
        study_count: row.get("study_count")?,
        note: row.get("note")?,
    })
}

pub fn insert_record(conn: &Connection, fields: &RecordFields, created_at: &str) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO activity_records (created_at, date, hours, study_count, note)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            created_at,
            fields.date.format("%Y-%m-%d").to_string(),
            fields.hours,
            fields.study_count,
            fields.note,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_record(conn: &Connection, id: i64) -> AppResult<Option<ActivityRecord>> {
    let mut stmt = conn.prepare_cached(&format!("{SELECT_RECORD} WHERE id = ?1"))?;
    Ok(stmt.query_row([id], map_record).optional()?)
}

/// All records, ordered by date then insertion.
pub fn load_all_records(conn: &Connection) -> AppResult<Vec<ActivityRecord>> {
    let mut stmt = conn.prepare_cached(&format!("{SELECT_RECORD} ORDER BY date ASC, id ASC"))?;
    let rows = stmt.query_map([], map_record)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Records whose date lies in `[from, to]`.
pub fn load_records_between(
    conn: &Connection,
    from: NaiveDate,
    to: NaiveDate,
) -> AppResult<Vec<ActivityRecord>> {
    let mut stmt = conn.prepare_cached(&format!(
        "{SELECT_RECORD} WHERE date BETWEEN ?1 AND ?2 ORDER BY date ASC, id ASC"
    ))?;
    let rows = stmt.query_map(
        params![
            from.format("%Y-%m-%d").to_string(),
            to.format("%Y-%m-%d").to_string()
        ],
        map_record,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Overwrite the mutable fields. Returns the number of rows touched.
pub fn update_record(conn: &Connection, id: i64, fields: &RecordFields) -> AppResult<usize> {
    let n = conn.execute(
        "UPDATE activity_records
         SET date = ?1, hours = ?2, study_count = ?3, note = ?4
         WHERE id = ?5",
        params![
            fields.date.format("%Y-%m-%d").to_string(),
            fields.hours,
            fields.study_count,
            fields.note,
            id,
        ],
    )?;
    Ok(n)
}

pub fn delete_record(conn: &Connection, id: i64) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM activity_records WHERE id = ?1", [id])?)
}

pub fn count_records(conn: &Connection) -> AppResult<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM activity_records", [], |row| row.get(0))?)
}
