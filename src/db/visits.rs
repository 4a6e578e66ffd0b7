//! Row-level access to the `contact_visits` table.

use crate::errors::AppResult;
use crate::models::visit::{ContactVisit, VisitFields};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const SELECT_VISIT: &str = "SELECT id, name, note, is_study, created_at FROM contact_visits";

pub fn map_visit(row: &Row) -> Result<ContactVisit> {
    Ok(ContactVisit {
        id: row.get("id")?,
        name: row.get("name")?,
        note: row.get("note")?,
        is_study: row.get::<_, i32>("is_study")? == 1,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_visit(conn: &Connection, fields: &VisitFields, created_at: &str) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO contact_visits (name, note, is_study, created_at)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            fields.name,
            fields.note,
            if fields.is_study { 1 } else { 0 },
            created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_visit(conn: &Connection, id: i64) -> AppResult<Option<ContactVisit>> {
    let mut stmt = conn.prepare_cached(&format!("{SELECT_VISIT} WHERE id = ?1"))?;
    Ok(stmt.query_row([id], map_visit).optional()?)
}

/// All visits sorted by name (case-insensitive), then id.
pub fn load_all_visits(conn: &Connection) -> AppResult<Vec<ContactVisit>> {
    let mut stmt = conn.prepare_cached(&format!(
        "{SELECT_VISIT} ORDER BY name COLLATE NOCASE ASC, id ASC"
    ))?;
    let rows = stmt.query_map([], map_visit)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn update_visit(conn: &Connection, id: i64, fields: &VisitFields) -> AppResult<usize> {
    let n = conn.execute(
        "UPDATE contact_visits SET name = ?1, note = ?2, is_study = ?3 WHERE id = ?4",
        params![
            fields.name,
            fields.note,
            if fields.is_study { 1 } else { 0 },
            id
        ],
    )?;
    Ok(n)
}

pub fn delete_visit(conn: &Connection, id: i64) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM contact_visits WHERE id = ?1", [id])?)
}

pub fn count_visits(conn: &Connection) -> AppResult<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM contact_visits", [], |row| row.get(0))?)
}
