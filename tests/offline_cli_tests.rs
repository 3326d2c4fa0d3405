//! End-to-end CLI behavior against an unreachable backend: actions fail,
//! land in the offline queue, and the queue tooling sees them.

use predicates::str::contains;
use std::fs;

mod common;
use common::{UNREACHABLE_BACKEND, init_local, rat, setup_test_db, setup_test_queue};

#[test]
fn init_creates_database_and_queue_file() {
    let db_path = setup_test_db("init");
    let queue_path = setup_test_queue("init");

    rat()
        .args(["--db", &db_path, "--queue", &queue_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert!(fs::metadata(&db_path).is_ok());
    assert_eq!(fs::read_to_string(&queue_path).unwrap(), "[]");
}

#[test]
fn offline_check_in_fails_and_queues_the_action() {
    let db_path = setup_test_db("offline_checkin");
    let queue_path = setup_test_queue("offline_checkin");
    init_local(&db_path, &queue_path);

    rat()
        .args([
            "--db",
            &db_path,
            "--queue",
            &queue_path,
            "--backend",
            UNREACHABLE_BACKEND,
            "check-in",
            "45.4642",
            "9.1900",
        ])
        .assert()
        .failure()
        .stdout(contains("queued for replay"));

    // L'azione è nel file di coda, nell'ordine di inserimento
    let raw = fs::read_to_string(&queue_path).unwrap();
    let queue: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let items = queue.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["kind"], "checkIn");
    assert_eq!(items[0]["payload"]["latitude"], 45.4642);
}

#[test]
fn offline_check_out_is_appended_after_check_in() {
    let db_path = setup_test_db("offline_checkout");
    let queue_path = setup_test_queue("offline_checkout");
    init_local(&db_path, &queue_path);

    rat()
        .args([
            "--db",
            &db_path,
            "--queue",
            &queue_path,
            "--backend",
            UNREACHABLE_BACKEND,
            "check-in",
            "45.0",
            "9.0",
        ])
        .assert()
        .failure();

    rat()
        .args([
            "--db",
            &db_path,
            "--queue",
            &queue_path,
            "--backend",
            UNREACHABLE_BACKEND,
            "check-out",
        ])
        .assert()
        .failure();

    let raw = fs::read_to_string(&queue_path).unwrap();
    let queue: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let items = queue.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["kind"], "checkIn");
    assert_eq!(items[1]["kind"], "checkOut");
}

#[test]
fn queue_print_shows_pending_actions() {
    let db_path = setup_test_db("queue_print");
    let queue_path = setup_test_queue("queue_print");
    init_local(&db_path, &queue_path);

    rat()
        .args([
            "--db",
            &db_path,
            "--queue",
            &queue_path,
            "--backend",
            UNREACHABLE_BACKEND,
            "check-in",
            "45.0",
            "9.0",
        ])
        .assert()
        .failure();

    rat()
        .args(["--db", &db_path, "--queue", &queue_path, "queue", "--print"])
        .assert()
        .success()
        .stdout(contains("1 pending"))
        .stdout(contains("check-in"));
}

#[test]
fn queue_clear_empties_the_store() {
    let db_path = setup_test_db("queue_clear");
    let queue_path = setup_test_queue("queue_clear");
    init_local(&db_path, &queue_path);

    rat()
        .args([
            "--db",
            &db_path,
            "--queue",
            &queue_path,
            "--backend",
            UNREACHABLE_BACKEND,
            "check-out",
        ])
        .assert()
        .failure();

    rat()
        .args(["--db", &db_path, "--queue", &queue_path, "queue", "--clear"])
        .assert()
        .success()
        .stdout(contains("Cleared 1 queued action"));

    rat()
        .args(["--db", &db_path, "--queue", &queue_path, "queue", "--print"])
        .assert()
        .success()
        .stdout(contains("0 pending"));
}

#[test]
fn sync_while_offline_keeps_the_queue_and_exits_cleanly() {
    let db_path = setup_test_db("sync_offline");
    let queue_path = setup_test_queue("sync_offline");
    init_local(&db_path, &queue_path);

    rat()
        .args([
            "--db",
            &db_path,
            "--queue",
            &queue_path,
            "--backend",
            UNREACHABLE_BACKEND,
            "check-out",
        ])
        .assert()
        .failure();

    // Il replay non è un errore: la coda resta in attesa
    rat()
        .args([
            "--db",
            &db_path,
            "--queue",
            &queue_path,
            "--backend",
            UNREACHABLE_BACKEND,
            "sync",
        ])
        .assert()
        .success()
        .stdout(contains("Backend unreachable"));

    let raw = fs::read_to_string(&queue_path).unwrap();
    let queue: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(queue.as_array().unwrap().len(), 1);
}

#[test]
fn status_while_offline_fails_with_an_error() {
    let db_path = setup_test_db("status_offline");
    let queue_path = setup_test_queue("status_offline");
    init_local(&db_path, &queue_path);

    rat()
        .args([
            "--db",
            &db_path,
            "--queue",
            &queue_path,
            "--backend",
            UNREACHABLE_BACKEND,
            "status",
        ])
        .assert()
        .failure()
        .stderr(contains("Error"));
}

#[test]
fn internal_log_records_the_init() {
    let db_path = setup_test_db("log_init");
    let queue_path = setup_test_queue("log_init");
    init_local(&db_path, &queue_path);

    rat()
        .args(["--db", &db_path, "--queue", &queue_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"));
}

#[test]
fn failed_submission_is_logged_for_audit() {
    let db_path = setup_test_db("log_queue");
    let queue_path = setup_test_queue("log_queue");
    init_local(&db_path, &queue_path);

    rat()
        .args([
            "--db",
            &db_path,
            "--queue",
            &queue_path,
            "--backend",
            UNREACHABLE_BACKEND,
            "check-out",
        ])
        .assert()
        .failure();

    rat()
        .args(["--db", &db_path, "--queue", &queue_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("queue"));
}
