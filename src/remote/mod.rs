//! Remote flat-table backends.
//!
//! A remote table is an ordered list of rows of text cells. Sync logic only
//! ever appends to it or reads it whole.

pub mod sheets;

use crate::errors::AppResult;
use serde_json::Value;

pub use sheets::SheetsClient;

pub trait RemoteTable {
    /// Append `rows` after the last existing row. Returns how many rows the
    /// backend reports as written.
    fn append_rows(&self, token: &str, rows: &[Vec<Value>]) -> AppResult<usize>;

    /// Every row after the header, cells rendered as text.
    fn fetch_rows(&self, token: &str) -> AppResult<Vec<Vec<String>>>;
}

/// Render one cell as the text the import parser works on.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}
