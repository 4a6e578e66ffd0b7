//! The nine-column row layout shared with the backup spreadsheet.
//!
//! | col | content                                  |
//! |-----|------------------------------------------|
//! | A   | created_at (RFC 3339)                    |
//! | B   | identity (account e-mail)                |
//! | C   | date (YYYY-MM-DD)                        |
//! | D   | hours                                    |
//! | E   | visit count, always 0 on export          |
//! | F   | study count                              |
//! | G   | visit name, empty on export              |
//! | H   | note                                     |
//! | I   | study flag ("Y"/"y"), empty on export    |

use crate::models::record::{ActivityRecord, RecordFields};
use crate::models::visit::VisitFields;
use chrono::{Days, NaiveDate};
use serde_json::{Value, json};

pub const COLUMN_COUNT: usize = 9;

pub const COL_CREATED_AT: usize = 0;
pub const COL_IDENTITY: usize = 1;
pub const COL_DATE: usize = 2;
pub const COL_HOURS: usize = 3;
pub const COL_VISIT_COUNT: usize = 4;
pub const COL_STUDY_COUNT: usize = 5;
pub const COL_VISIT_NAME: usize = 6;
pub const COL_NOTE: usize = 7;
pub const COL_STUDY_FLAG: usize = 8;

/// Day zero of spreadsheet serial dates.
fn serial_epoch() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(1899, 12, 30)
}

/// Free text sent as a literal. Rows are appended as user-entered input, so
/// without the leading apostrophe a note like `007`, `2024-03-05` or `=1+1`
/// would be stored as a number, date or formula and read back changed.
/// The sheet strips the apostrophe on input.
pub fn literal_text(s: &str) -> Value {
    if s.is_empty() {
        Value::String(String::new())
    } else {
        Value::String(format!("'{s}"))
    }
}

/// Serialize one record for appending. The reserved visit columns stay
/// empty (or 0 for the count).
pub fn export_row(record: &ActivityRecord, identity: &str) -> Vec<Value> {
    let mut row = vec![Value::String(String::new()); COLUMN_COUNT];
    row[COL_CREATED_AT] = json!(record.created_at);
    row[COL_IDENTITY] = literal_text(identity);
    row[COL_DATE] = json!(record.date_str());
    row[COL_HOURS] = json!(record.hours);
    row[COL_VISIT_COUNT] = json!(0);
    row[COL_STUDY_COUNT] = json!(record.study_count);
    row[COL_NOTE] = literal_text(&record.note);
    row
}

/// Read-only view over the text cells of one fetched row. Trailing empty
/// cells are often omitted by the remote, so every column is optional.
#[derive(Debug, Clone, Copy)]
pub struct RemoteRow<'a> {
    cells: &'a [String],
}

/// What a remote row turned into, before anything is written locally.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordCell {
    /// Date or hours missing: the row carries no service record.
    Absent,
    Parsed(RecordFields),
    /// Date present but not understood.
    BadDate(String),
}

impl<'a> RemoteRow<'a> {
    pub fn new(cells: &'a [String]) -> Self {
        Self { cells }
    }

    fn raw(&self, col: usize) -> &'a str {
        self.cells.get(col).map(String::as_str).unwrap_or("")
    }

    /// Trimmed cell, `None` when blank.
    fn cell(&self, col: usize) -> Option<&'a str> {
        let v = self.raw(col).trim();
        (!v.is_empty()).then_some(v)
    }

    /// Identity cell, untrimmed: ownership is an exact match.
    pub fn identity(&self) -> &'a str {
        self.raw(COL_IDENTITY)
    }

    pub fn belongs_to(&self, identity: &str) -> bool {
        self.identity() == identity
    }

    pub fn record(&self) -> RecordCell {
        let (Some(date), Some(hours)) = (self.cell(COL_DATE), self.cell(COL_HOURS)) else {
            return RecordCell::Absent;
        };

        let Some(date) = parse_date_cell(date) else {
            return RecordCell::BadDate(date.to_string());
        };

        RecordCell::Parsed(RecordFields::new(
            date,
            parse_hours(hours),
            self.cell(COL_STUDY_COUNT).map(parse_count).unwrap_or(0),
            self.raw(COL_NOTE),
        ))
    }

    pub fn visit(&self) -> Option<VisitFields> {
        let name = self.cell(COL_VISIT_NAME)?;
        let is_study = self.cell(COL_STUDY_FLAG).is_some_and(is_study_flag);
        Some(VisitFields::new(name, self.raw(COL_NOTE), is_study))
    }
}

/// Lenient number: anything unreadable, negative or non-finite counts as 0.
pub fn parse_hours(s: &str) -> f64 {
    match s.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => v,
        _ => 0.0,
    }
}

/// Whole count; fractional values are truncated, garbage counts as 0.
pub fn parse_count(s: &str) -> u32 {
    let s = s.trim();
    if let Ok(v) = s.parse::<u32>() {
        return v;
    }
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => v.min(f64::from(u32::MAX)) as u32,
        _ => 0,
    }
}

pub fn is_study_flag(s: &str) -> bool {
    matches!(s.trim(), "Y" | "y")
}

/// Accepts ISO dates, a few locale renderings and serial day numbers.
pub fn parse_date_cell(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    let formats = ["%Y-%m-%d", "%Y/%m/%d", "%Y. %m. %d", "%Y. %m. %d.", "%Y.%m.%d"];
    for fmt in formats.iter() {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }

    // Timestamps written by hand: keep the date part.
    if let Some((day, _)) = s.split_once('T')
        && let Ok(d) = NaiveDate::parse_from_str(day, "%Y-%m-%d")
    {
        return Some(d);
    }

    let serial = s.parse::<f64>().ok().filter(|v| v.is_finite() && *v >= 1.0)?;
    serial_epoch()?.checked_add_days(Days::new(serial.floor() as u64))
}
