use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

/// A day's worth of service activity.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityRecord {
    pub id: i64,
    pub created_at: String, // ⇔ activity_records.created_at (TEXT, RFC 3339)
    pub date: NaiveDate,    // ⇔ activity_records.date (TEXT "YYYY-MM-DD")
    pub hours: f64,
    pub study_count: u32,
    pub note: String,
}

/// Mutable fields of an [`ActivityRecord`], used by add and update.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordFields {
    pub date: NaiveDate,
    pub hours: f64,
    pub study_count: u32,
    pub note: String,
}

impl RecordFields {
    pub fn new(date: NaiveDate, hours: f64, study_count: u32, note: impl Into<String>) -> Self {
        Self {
            date,
            hours,
            study_count,
            note: note.into(),
        }
    }

    /// Build the fields from the hours + minutes pair entered by the user.
    pub fn from_hours_minutes(
        date: NaiveDate,
        hours: f64,
        minutes: u32,
        study_count: u32,
        note: impl Into<String>,
    ) -> Self {
        Self::new(date, hours + f64::from(minutes) / 60.0, study_count, note)
    }

    pub fn validate(&self) -> AppResult<()> {
        if !self.hours.is_finite() || self.hours < 0.0 {
            return Err(AppError::Validation(format!(
                "hours must be a non-negative number, got {}",
                self.hours
            )));
        }
        Ok(())
    }
}

impl ActivityRecord {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn fields(&self) -> RecordFields {
        RecordFields::new(self.date, self.hours, self.study_count, self.note.clone())
    }
}
