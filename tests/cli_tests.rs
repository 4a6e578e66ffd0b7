mod common;
use common::{init_db, rsl, setup_test_db};
use predicates::prelude::*;

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("cli_init");

    rsl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_add_and_list_period() {
    let db_path = setup_test_db("cli_add_list");
    init_db(&db_path);

    rsl()
        .args([
            "--db",
            &db_path,
            "add",
            "2024-03-05",
            "--hours",
            "2",
            "--minutes",
            "30",
            "--studies",
            "1",
            "--note",
            "cart witnessing",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Service record #1 saved"));

    rsl()
        .args(["--db", &db_path, "add", "2024-04-01", "--hours", "1"])
        .assert()
        .success();

    rsl()
        .args(["--db", &db_path, "list", "--period", "2024-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cart witnessing"))
        .stdout(predicate::str::contains("02h 30m"))
        .stdout(predicate::str::contains("Total: 2.5 hours"))
        .stdout(predicate::str::contains("2024-04-01").not());

    rsl()
        .args(["--db", &db_path, "list", "--period", "2024-03:2024-04"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-04-01"))
        .stdout(predicate::str::contains("2 records"));

    rsl()
        .args(["--db", &db_path, "list", "--period", "2023"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No service records between"));
}

#[test]
fn test_stats_for_month() {
    let db_path = setup_test_db("cli_stats");
    init_db(&db_path);

    for (d, h, s) in [("2024-03-01", "1.5", "1"), ("2024-03-20", "2", "2"), ("2024-02-28", "4", "0")] {
        rsl()
            .args(["--db", &db_path, "add", d, "--hours", h, "--studies", s])
            .assert()
            .success();
    }

    rsl()
        .args(["--db", &db_path, "stats", "--month", "2024-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Month 2024-03"))
        .stdout(predicate::str::contains("3.5"))
        .stdout(predicate::str::contains("Records: 2"))
        .stdout(predicate::str::contains("Service year"));

    rsl()
        .args(["--db", &db_path, "stats", "--month", "March"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date format"));
}

#[test]
fn test_edit_then_delete_record() {
    let db_path = setup_test_db("cli_edit_del");
    init_db(&db_path);

    rsl()
        .args(["--db", &db_path, "add", "2024-03-05", "--hours", "1", "--note", "first"])
        .assert()
        .success();

    rsl()
        .args(["--db", &db_path, "edit", "1", "--hours", "3", "--minutes", "15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Service record #1 updated."));

    // note was not passed, so it is kept
    rsl()
        .args(["--db", &db_path, "list", "--period", "2024-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("03h 15m"))
        .stdout(predicate::str::contains("first"));

    rsl()
        .args(["--db", &db_path, "del", "1", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted service record #1"));

    rsl()
        .args(["--db", &db_path, "list", "--period", "2024-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No service records between"));

    rsl()
        .args(["--db", &db_path, "del", "1", "--force"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Service record #1 not found"));

    rsl()
        .args(["--db", &db_path, "edit", "42", "--hours", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_visit_lifecycle() {
    let db_path = setup_test_db("cli_visits");
    init_db(&db_path);

    rsl()
        .args(["--db", &db_path, "visit", "add", "Kim", "--note", "Tuesdays", "--study"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Return visit #1 saved: Kim"));

    rsl()
        .args(["--db", &db_path, "visit", "add", "Lee"])
        .assert()
        .success();

    rsl()
        .args(["--db", &db_path, "visit", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kim"))
        .stdout(predicate::str::contains("Tuesdays"))
        .stdout(predicate::str::contains("Lee"));

    rsl()
        .args(["--db", &db_path, "visit", "edit", "1", "--name", "Kim Minji", "--no-study"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Return visit #1 updated."));

    rsl()
        .args(["--db", &db_path, "visit", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kim Minji"));

    rsl()
        .args(["--db", &db_path, "visit", "del", "1", "-f"])
        .assert()
        .success();
    rsl()
        .args(["--db", &db_path, "visit", "del", "2", "-f"])
        .assert()
        .success();

    rsl()
        .args(["--db", &db_path, "visit", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No return visits recorded."));
}

#[test]
fn test_blank_visit_name_fails() {
    let db_path = setup_test_db("cli_visit_blank");
    init_db(&db_path);

    rsl()
        .args(["--db", &db_path, "visit", "add", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));
}

#[test]
fn test_invalid_input_is_rejected() {
    let db_path = setup_test_db("cli_invalid");
    init_db(&db_path);

    rsl()
        .args(["--db", &db_path, "add", "2024-13-01", "--hours", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date format"));

    rsl()
        .args(["--db", &db_path, "add", "2024-03-01", "--hours=-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));

    rsl()
        .args(["--db", &db_path, "list", "--period", "2024-05:2024-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid range"));
}

#[test]
fn test_backup_and_restore_need_credentials() {
    let db_path = setup_test_db("cli_backup_auth");
    init_db(&db_path);

    rsl()
        .args(["--db", &db_path, "add", "2024-03-01", "--hours", "1"])
        .assert()
        .success();

    rsl()
        .args(["--db", &db_path, "backup", "--force"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("Not authenticated"));

    rsl()
        .args(["--db", &db_path, "restore", "--force"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not authenticated"));

    // nothing was touched locally
    rsl()
        .args(["--db", &db_path, "list", "--period", "2024-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 records"));
}

#[test]
fn test_log_print_shows_operations() {
    let db_path = setup_test_db("cli_log");
    init_db(&db_path);

    rsl()
        .args(["--db", &db_path, "add", "2024-03-01", "--hours", "1"])
        .assert()
        .success();
    rsl()
        .args(["--db", &db_path, "visit", "add", "Kim"])
        .assert()
        .success();

    rsl()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("(record #1)"))
        .stdout(predicate::str::contains("(visit #1)"));
}

#[test]
fn test_db_info_and_check() {
    let db_path = setup_test_db("cli_db_info");
    init_db(&db_path);

    rsl()
        .args(["--db", &db_path, "add", "2024-03-01", "--hours", "1"])
        .assert()
        .success();

    rsl()
        .args(["--db", &db_path, "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("File:"))
        .stdout(predicate::str::contains("2024-03-01"))
        .stdout(predicate::str::contains("Integrity check passed"));
}
