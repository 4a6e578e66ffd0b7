use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists. Migration markers are stored there,
/// so it must be created before anything else.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )
}

/// Check if a table exists.
fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_migration(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Create the two record stores with their lookup indexes.
fn create_service_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        BEGIN;

        CREATE TABLE IF NOT EXISTS activity_records (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            created_at   TEXT NOT NULL,
            date         TEXT NOT NULL,
            hours        REAL NOT NULL DEFAULT 0 CHECK(hours >= 0),
            study_count  INTEGER NOT NULL DEFAULT 0 CHECK(study_count >= 0),
            note         TEXT NOT NULL DEFAULT ''
        );

        CREATE INDEX IF NOT EXISTS idx_activity_records_date ON activity_records(date);
        CREATE INDEX IF NOT EXISTS idx_activity_records_created ON activity_records(created_at);

        CREATE TABLE IF NOT EXISTS contact_visits (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL CHECK(length(name) > 0),
            note        TEXT NOT NULL DEFAULT '',
            is_study    INTEGER NOT NULL DEFAULT 0 CHECK(is_study IN (0, 1)),
            created_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_contact_visits_name ON contact_visits(name);

        COMMIT;
        "#,
    )
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Base schema
    let version = "20250301_0001_create_service_tables";
    let missing_tables = !table_exists(conn, "activity_records")?
        || !table_exists(conn, "contact_visits")?;

    if missing_tables || !migration_applied(conn, version)? {
        create_service_tables(conn)?;

        if !migration_applied(conn, version)? {
            mark_migration(conn, version, "Created activity_records and contact_visits")?;
            success(format!("Migration applied: {}", version));
        }
    }

    Ok(())
}
