#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

pub fn crewboard_cmd() -> Command {
    let mut cmd = Command::cargo_bin("crewboard").unwrap();
    cmd.env_remove("CREWBOARD_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Initialize a board in `dir`.
pub fn init_board(dir: &Path) {
    crewboard_cmd().arg("init").arg(dir).assert().success();
}

/// Initialize a board in `dir` and unlock the admin commands.
pub fn init_unlocked_board(dir: &Path) {
    init_board(dir);
    crewboard_cmd()
        .current_dir(dir)
        .args(["admin", "login", "Airteam1@"])
        .assert()
        .success();
}

/// Parse a stored collection straight from disk.
pub fn stored(dir: &Path, key: &str) -> serde_json::Value {
    let path = dir.join(".crewboard").join(format!("{}.json", key));
    let content = std::fs::read_to_string(path).unwrap();
    serde_json::from_str(&content).unwrap()
}
