//! Service year window: September 1 through August 31.
//!
//! The year is labelled after the calendar year in which it ends, so the
//! window running from 2023-09-01 to 2024-08-31 is service year 2024.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// First month of a service year (1-based).
pub const FIRST_MONTH: u32 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceYearWindow {
    pub label: i32,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl ServiceYearWindow {
    /// Window of the service year that ends in August of `label`.
    pub fn for_label(label: i32) -> AppResult<Self> {
        let out_of_range = || AppError::Validation(format!("service year {} out of range", label));

        let start = NaiveDate::from_ymd_opt(label - 1, FIRST_MONTH, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .ok_or_else(out_of_range)?;
        let end = NaiveDate::from_ymd_opt(label, 8, 31)
            .and_then(|d| d.and_hms_opt(23, 59, 59))
            .ok_or_else(out_of_range)?;

        Ok(Self { label, start, end })
    }

    /// Window containing `reference`. Only its year and month matter.
    pub fn for_reference<D: Datelike>(reference: &D) -> AppResult<Self> {
        let label = if reference.month() >= FIRST_MONTH {
            reference.year() + 1
        } else {
            reference.year()
        };
        Self::for_label(label)
    }

    /// Inclusive on both ends.
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        instant >= self.start && instant <= self.end
    }

    /// A bare date is taken at midnight.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date.and_hms_opt(0, 0, 0)
            .is_some_and(|instant| self.contains(instant))
    }

    pub fn first_day(&self) -> NaiveDate {
        self.start.date()
    }

    pub fn last_day(&self) -> NaiveDate {
        self.end.date()
    }
}
