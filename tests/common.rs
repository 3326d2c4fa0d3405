#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rat() -> Command {
    cargo_bin_cmd!("rattendance")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rattendance.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a unique queue file path inside the system temp dir and remove any existing file
pub fn setup_test_queue(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rattendance_queue.json", name));
    let queue_path = path.to_string_lossy().to_string();
    fs::remove_file(&queue_path).ok();
    queue_path
}

/// Backend URL nobody listens on: every remote call fails fast.
pub const UNREACHABLE_BACKEND: &str = "http://127.0.0.1:9";

/// Initialize the local DB and queue file via the CLI
pub fn init_local(db_path: &str, queue_path: &str) {
    rat()
        .args([
            "--db",
            db_path,
            "--queue",
            queue_path,
            "--test",
            "init",
        ])
        .assert()
        .success();
}
