mod common;
use chrono::NaiveDate;
use common::{date, record, store};
use rservicelog::core::aggregate::Aggregator;
use rservicelog::db::records::insert_record;
use rservicelog::errors::AppError;
use rservicelog::models::ServiceYearWindow;

fn at(y: i32, m: u32, d: u32, h: u32, mi: u32, s: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|d| d.and_hms_opt(h, mi, s))
        .expect("valid instant")
}

#[test]
fn test_monthly_totals_use_record_date_not_creation_time() {
    let mut s = store();

    s.add_record(&record(date(2024, 3, 1), 1.5, 1, "")).expect("add");
    s.add_record(&record(date(2024, 3, 31), 2.25, 2, "")).expect("add");
    s.add_record(&record(date(2024, 4, 1), 5.0, 3, "")).expect("add");
    s.add_record(&record(date(2023, 3, 15), 7.0, 4, "")).expect("add");

    // entered in March 2024, but dated February
    insert_record(
        s.conn(),
        &record(date(2024, 2, 29), 9.0, 9, "late entry"),
        "2024-03-10T09:00:00+09:00",
    )
    .expect("insert");

    let totals = Aggregator::new(&s).monthly_totals(2024, 3).expect("totals");
    assert_eq!(totals.total_hours, 3.75);
    assert_eq!(totals.total_studies, 3);
    assert_eq!(totals.record_count, 2);

    let feb = Aggregator::new(&s).monthly_totals(2024, 2).expect("totals");
    assert_eq!(feb.total_hours, 9.0);
    assert_eq!(feb.total_studies, 9);
}

#[test]
fn test_monthly_totals_empty_month_is_zero() {
    let s = store();
    let totals = Aggregator::new(&s).monthly_totals(2024, 6).expect("totals");
    assert_eq!(totals.total_hours, 0.0);
    assert_eq!(totals.total_studies, 0);
    assert_eq!(totals.record_count, 0);
}

#[test]
fn test_monthly_totals_rejects_invalid_month() {
    let s = store();
    let err = Aggregator::new(&s).monthly_totals(2024, 13).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    let err = Aggregator::new(&s).monthly_totals(2024, 0).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[test]
fn test_service_year_window_before_september() {
    let w = ServiceYearWindow::for_reference(&date(2024, 3, 15)).expect("window");
    assert_eq!(w.label, 2024);
    assert_eq!(w.first_day(), date(2023, 9, 1));
    assert_eq!(w.last_day(), date(2024, 8, 31));
    assert_eq!(w.end, at(2024, 8, 31, 23, 59, 59));
}

#[test]
fn test_service_year_window_from_september() {
    let w = ServiceYearWindow::for_reference(&date(2024, 10, 2)).expect("window");
    assert_eq!(w.label, 2025);
    assert_eq!(w.first_day(), date(2024, 9, 1));
    assert_eq!(w.last_day(), date(2025, 8, 31));

    // September itself already belongs to the next service year
    let sept = ServiceYearWindow::for_reference(&date(2024, 9, 1)).expect("window");
    assert_eq!(sept.label, 2025);
    let aug = ServiceYearWindow::for_reference(&date(2024, 8, 31)).expect("window");
    assert_eq!(aug.label, 2024);
}

#[test]
fn test_service_year_window_boundaries_are_inclusive() {
    let y2024 = ServiceYearWindow::for_label(2024).expect("window");
    let y2025 = ServiceYearWindow::for_label(2025).expect("window");

    assert!(y2024.contains(at(2023, 9, 1, 0, 0, 0)));
    assert!(y2024.contains(at(2024, 8, 31, 23, 59, 59)));
    assert!(!y2024.contains(at(2024, 9, 1, 0, 0, 0)));
    assert!(y2025.contains(at(2024, 9, 1, 0, 0, 0)));
    assert!(!y2024.contains(at(2023, 8, 31, 23, 59, 59)));

    assert!(y2024.contains_date(date(2024, 8, 31)));
    assert!(!y2024.contains_date(date(2024, 9, 1)));
}

#[test]
fn test_service_year_totals_sum_only_the_window() {
    let mut s = store();
    s.add_record(&record(date(2023, 8, 31), 100.0, 0, "")).expect("add");
    s.add_record(&record(date(2023, 9, 1), 1.0, 0, "")).expect("add");
    s.add_record(&record(date(2024, 1, 10), 2.5, 0, "")).expect("add");
    s.add_record(&record(date(2024, 8, 31), 0.5, 0, "")).expect("add");
    s.add_record(&record(date(2024, 9, 1), 50.0, 0, "")).expect("add");

    let agg = Aggregator::new(&s);

    let march = agg.service_year_totals(&date(2024, 3, 15)).expect("totals");
    assert_eq!(march.label, 2024);
    assert_eq!(march.total_hours, 4.0);

    let october = agg
        .service_year_totals(&at(2024, 10, 1, 12, 0, 0))
        .expect("totals");
    assert_eq!(october.label, 2025);
    assert_eq!(october.total_hours, 50.0);
}
