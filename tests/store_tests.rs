mod common;
use common::{date, record, store, visit};
use rservicelog::errors::AppError;
use std::collections::HashSet;

#[test]
fn test_add_then_get_all_returns_same_fields() {
    let mut s = store();
    let fields = record(date(2024, 3, 5), 1.5, 2, "morning cart");

    let id = s.add_record(&fields).expect("add");
    let all = s.records().expect("records");

    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, id);
    assert_eq!(all[0].fields(), fields);
    assert!(!all[0].created_at.is_empty());
}

#[test]
fn test_ids_are_never_reused_after_delete() {
    let mut s = store();
    let mut seen = HashSet::new();

    for i in 0..5 {
        let id = s
            .add_record(&record(date(2024, 1, 1 + i), 1.0, 0, ""))
            .expect("add");
        assert!(seen.insert(id), "id {} assigned twice", id);
        s.delete_record(id).expect("delete");
    }

    let id = s.add_record(&record(date(2024, 2, 1), 1.0, 0, "")).expect("add");
    assert!(!seen.contains(&id));

    // clearing does not reset the sequence either
    s.clear_all().expect("clear");
    let after_clear = s.add_record(&record(date(2024, 2, 2), 1.0, 0, "")).expect("add");
    assert!(!seen.contains(&after_clear) && after_clear != id);
}

#[test]
fn test_get_unknown_record_is_not_found() {
    let s = store();
    let err = s.get_record(42).unwrap_err();
    assert!(matches!(err, AppError::NotFound { id: 42, .. }));
}

#[test]
fn test_update_unknown_record_is_not_found() {
    let mut s = store();
    let err = s
        .update_record(7, &record(date(2024, 3, 1), 1.0, 0, ""))
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound { id: 7, .. }));
    assert!(s.records().expect("records").is_empty());
}

#[test]
fn test_update_overwrites_fields_and_keeps_identity() {
    let mut s = store();
    let id = s
        .add_record(&record(date(2024, 3, 1), 1.0, 1, "old"))
        .expect("add");
    let before = s.get_record(id).expect("get");

    let new_fields = record(date(2024, 4, 2), 3.25, 0, "");
    s.update_record(id, &new_fields).expect("update");

    let after = s.get_record(id).expect("get");
    assert_eq!(after.id, before.id);
    assert_eq!(after.created_at, before.created_at);
    assert_eq!(after.fields(), new_fields);
}

#[test]
fn test_delete_unknown_record_is_ok() {
    let mut s = store();
    s.delete_record(999).expect("deleting a missing id is not an error");
}

#[test]
fn test_negative_hours_are_rejected() {
    let mut s = store();
    let err = s
        .add_record(&record(date(2024, 3, 1), -1.0, 0, ""))
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let err = s
        .add_record(&record(date(2024, 3, 1), f64::NAN, 0, ""))
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    assert!(s.records().expect("records").is_empty());
}

#[test]
fn test_blank_visit_name_is_rejected() {
    let mut s = store();
    let err = s.add_visit(&visit("   ", "note", false)).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[test]
fn test_visit_names_are_not_unique() {
    let mut s = store();
    let a = s.add_visit(&visit("Kim", "first", false)).expect("add");
    let b = s.add_visit(&visit("Kim", "second", true)).expect("add");
    assert_ne!(a, b);

    let visits = s.visits().expect("visits");
    assert_eq!(visits.len(), 2);
    assert!(visits.iter().all(|v| v.name == "Kim"));
}

#[test]
fn test_visits_are_listed_by_name() {
    let mut s = store();
    s.add_visit(&visit("park", "", false)).expect("add");
    s.add_visit(&visit("Choi", "", true)).expect("add");
    s.add_visit(&visit("Lee", "", false)).expect("add");

    let names: Vec<String> = s
        .visits()
        .expect("visits")
        .into_iter()
        .map(|v| v.name)
        .collect();
    assert_eq!(names, vec!["Choi", "Lee", "park"]);
}

#[test]
fn test_update_visit_and_not_found() {
    let mut s = store();
    let id = s.add_visit(&visit("Kim", "", false)).expect("add");

    s.update_visit(id, &visit("Kim Minji", "Tuesdays", true))
        .expect("update");
    let v = s.get_visit(id).expect("get");
    assert_eq!(v.name, "Kim Minji");
    assert_eq!(v.note, "Tuesdays");
    assert!(v.is_study);

    let err = s.update_visit(id + 100, &visit("X", "", false)).unwrap_err();
    assert!(matches!(err, AppError::NotFound { .. }));
}

#[test]
fn test_clear_all_empties_both_kinds() {
    let mut s = store();
    s.add_record(&record(date(2024, 3, 1), 1.0, 0, "")).expect("add");
    s.add_visit(&visit("Kim", "", false)).expect("add");

    s.clear_all().expect("clear");

    assert!(s.records().expect("records").is_empty());
    assert!(s.visits().expect("visits").is_empty());
}

#[test]
fn test_failed_unit_of_work_leaves_nothing_behind() {
    let mut s = store();
    s.add_record(&record(date(2024, 3, 1), 1.0, 0, "keep")).expect("add");
    s.add_visit(&visit("Kim", "", false)).expect("add");

    let result: Result<(), AppError> = s.pool().with_transaction(|tx| {
        tx.execute_batch("DELETE FROM activity_records; DELETE FROM contact_visits;")?;
        Err(AppError::Other("abort".into()))
    });
    assert!(result.is_err());

    assert_eq!(s.records().expect("records").len(), 1);
    assert_eq!(s.visits().expect("visits").len(), 1);
}

#[test]
fn test_records_are_ordered_by_date() {
    let mut s = store();
    s.add_record(&record(date(2024, 5, 1), 1.0, 0, "")).expect("add");
    s.add_record(&record(date(2024, 1, 1), 1.0, 0, "")).expect("add");
    s.add_record(&record(date(2024, 3, 1), 1.0, 0, "")).expect("add");

    let dates: Vec<_> = s
        .records()
        .expect("records")
        .into_iter()
        .map(|r| r.date_str())
        .collect();
    assert_eq!(dates, vec!["2024-01-01", "2024-03-01", "2024-05-01"]);
}
