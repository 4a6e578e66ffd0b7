#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rservicelog::auth::{AuthProvider, Credentials};
use rservicelog::errors::{AppError, AppResult};
use rservicelog::remote::{RemoteTable, cell_text};
use serde_json::Value;
use std::cell::{Cell, RefCell};
use rservicelog::db::store::LocalStore;
use rservicelog::models::{RecordFields, VisitFields};
use chrono::NaiveDate;
use std::env;
use std::fs;
use std::path::PathBuf;

pub const ME: &str = "me@example.com";
pub const OTHER: &str = "someone@example.com";

pub fn rsl() -> Command {
    let mut cmd = cargo_bin_cmd!("rservicelog");
    cmd.env_remove("RSERVICELOG_TOKEN");
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rservicelog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize a DB through the CLI
pub fn init_db(db_path: &str) {
    rsl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

pub fn record(d: NaiveDate, hours: f64, studies: u32, note: &str) -> RecordFields {
    RecordFields::new(d, hours, studies, note)
}

pub fn visit(name: &str, note: &str, is_study: bool) -> VisitFields {
    VisitFields::new(name, note, is_study)
}

pub fn store() -> LocalStore {
    LocalStore::in_memory().expect("in-memory store")
}

pub fn me() -> StaticAuth {
    StaticAuth::new("token", ME)
}

/// A remote row in the nine-column layout.
#[allow(clippy::too_many_arguments)]
pub fn remote_row(
    identity: &str,
    date: &str,
    hours: &str,
    studies: &str,
    visit_name: &str,
    note: &str,
    flag: &str,
) -> Vec<String> {
    vec![
        "2024-03-01T10:00:00+09:00".to_string(),
        identity.to_string(),
        date.to_string(),
        hours.to_string(),
        "0".to_string(),
        studies.to_string(),
        visit_name.to_string(),
        note.to_string(),
        flag.to_string(),
    ]
}

// ---------------------------
// In-process stand-ins for the remote side
// ---------------------------

/// Fixed credentials, or none at all.
#[derive(Debug, Clone, Default)]
pub struct StaticAuth {
    token: Option<String>,
    identity: Option<String>,
}

impl StaticAuth {
    pub fn new(token: &str, identity: &str) -> Self {
        Self {
            token: Some(token.to_string()),
            identity: Some(identity.to_string()),
        }
    }

    /// A user who never completed consent.
    pub fn signed_out() -> Self {
        Self::default()
    }
}

impl AuthProvider for StaticAuth {
    fn acquire(&self) -> AppResult<Credentials> {
        Credentials::new(self.token.clone(), self.identity.clone())
    }
}

/// Append/read table behaving like the spreadsheet: a leading apostrophe
/// marks a literal and is not stored. The header row is not kept.
#[derive(Debug, Default)]
pub struct MemoryTable {
    rows: RefCell<Vec<Vec<String>>>,
    fail_status: Cell<Option<u16>>,
}

impl MemoryTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: Vec<Vec<String>>) -> Self {
        Self {
            rows: RefCell::new(rows),
            fail_status: Cell::new(None),
        }
    }

    /// Make every following request fail with `status`, until cleared.
    pub fn fail_with(&self, status: Option<u16>) {
        self.fail_status.set(status);
    }

    pub fn rows(&self) -> Vec<Vec<String>> {
        self.rows.borrow().clone()
    }

    fn check(&self) -> AppResult<()> {
        match self.fail_status.get() {
            Some(status) => Err(AppError::RemoteRequestFailed {
                status,
                message: "simulated failure".into(),
            }),
            None => Ok(()),
        }
    }
}

fn stored_cell(value: &Value) -> String {
    let text = cell_text(value);
    match (value, text.strip_prefix('\'')) {
        (Value::String(_), Some(literal)) => literal.to_string(),
        _ => text,
    }
}

impl RemoteTable for MemoryTable {
    fn append_rows(&self, _token: &str, rows: &[Vec<Value>]) -> AppResult<usize> {
        self.check()?;
        let mut table = self.rows.borrow_mut();
        for row in rows {
            table.push(row.iter().map(stored_cell).collect());
        }
        Ok(rows.len())
    }

    fn fetch_rows(&self, _token: &str) -> AppResult<Vec<Vec<String>>> {
        self.check()?;
        Ok(self.rows())
    }
}
