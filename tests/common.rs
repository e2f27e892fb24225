#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn hm() -> Command {
    cargo_bin_cmd!("helpmeter")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_helpmeter.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the schema via the CLI (test mode: no config file writes)
pub fn init_db(db_path: &str) {
    hm().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Record one vote with a fixed timestamp
pub fn add_vote(db_path: &str, post_id: &str, pro: bool, time: &str) {
    let flag = if pro { "--pro" } else { "--contra" };
    hm().args(["--db", db_path, "--test", "vote", post_id, flag, "--time", time])
        .assert()
        .success();
}

/// Initialize DB and add a small dataset useful for many tests:
/// post 1 gets 3 pro / 1 contra, post 2 gets 1 pro / 2 contra,
/// all within the first week of March 2026.
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);

    add_vote(db_path, "1", true, "2026-03-02 08:00");
    add_vote(db_path, "1", true, "2026-03-02 12:30");
    add_vote(db_path, "1", true, "2026-03-04 09:15");
    add_vote(db_path, "1", false, "2026-03-04 10:00");
    add_vote(db_path, "2", true, "2026-03-05 11:00");
    add_vote(db_path, "2", false, "2026-03-06 16:45");
    add_vote(db_path, "2", false, "2026-03-07 23:59");
}
