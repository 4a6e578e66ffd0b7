//! Monthly and service-year totals.

use crate::db::store::LocalStore;
use crate::errors::{AppError, AppResult};
use crate::models::record::ActivityRecord;
use crate::models::service_year::ServiceYearWindow;
use crate::models::totals::{MonthlyTotals, ServiceYearTotals};
use chrono::Datelike;

/// Read-only view computing sums over the records of a [`LocalStore`].
pub struct Aggregator<'a> {
    store: &'a LocalStore,
}

impl<'a> Aggregator<'a> {
    pub fn new(store: &'a LocalStore) -> Self {
        Self { store }
    }

    /// Sums for the calendar month `month` (1-based) of `year`.
    pub fn monthly_totals(&self, year: i32, month: u32) -> AppResult<MonthlyTotals> {
        if !(1..=12).contains(&month) {
            return Err(AppError::Validation(format!(
                "month must be between 1 and 12, got {}",
                month
            )));
        }
        let records = self.store.records()?;
        Ok(sum_month(&records, year, month))
    }

    /// Hours of the service year containing `reference`.
    pub fn service_year_totals<D: Datelike>(&self, reference: &D) -> AppResult<ServiceYearTotals> {
        let window = ServiceYearWindow::for_reference(reference)?;
        let records = self.store.records()?;
        Ok(sum_window(&records, window))
    }
}

/// Filters on the record's own `date`, never on `created_at`.
pub fn sum_month(records: &[ActivityRecord], year: i32, month: u32) -> MonthlyTotals {
    records
        .iter()
        .filter(|r| r.date.year() == year && r.date.month() == month)
        .fold(
            MonthlyTotals {
                year,
                month,
                ..MonthlyTotals::default()
            },
            |mut acc, r| {
                acc.total_hours += r.hours;
                acc.total_studies += u64::from(r.study_count);
                acc.record_count += 1;
                acc
            },
        )
}

pub fn sum_window(records: &[ActivityRecord], window: ServiceYearWindow) -> ServiceYearTotals {
    let total_hours = records
        .iter()
        .filter(|r| window.contains_date(r.date))
        .map(|r| r.hours)
        .sum();

    ServiceYearTotals {
        label: window.label,
        window,
        total_hours,
    }
}
