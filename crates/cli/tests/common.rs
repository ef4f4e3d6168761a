// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// `kb` with logging and directory overrides cleared.
pub fn kb() -> Command {
    let mut cmd = cargo_bin_cmd!("kb");
    cmd.env_remove("KANBAN_DIR").env_remove("KANBAN_LOG");
    cmd
}

/// `kb` running inside the given temp directory.
pub fn kb_in(temp: &TempDir) -> Command {
    let mut cmd = kb();
    cmd.current_dir(temp.path());
    cmd
}

/// Helper to create an initialized temp directory
pub fn init_temp() -> TempDir {
    let temp = TempDir::new().unwrap();
    kb_in(&temp)
        .args(["init", "--prefix", "test", "--project", "web"])
        .assert()
        .success();
    temp
}

/// Helper to create an issue and return its ID
pub fn create_issue(temp: &TempDir, title: &str, extra: &[&str]) -> String {
    let output = kb_in(temp)
        .args(["new", title, "-o", "id"])
        .args(extra)
        .output()
        .unwrap();
    assert!(output.status.success(), "kb new failed: {:?}", output);
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Board as JSON.
pub fn board_json(temp: &TempDir, extra: &[&str]) -> serde_json::Value {
    let output = kb_in(temp)
        .args(["board", "-o", "json"])
        .args(extra)
        .output()
        .unwrap();
    assert!(output.status.success(), "kb board failed: {:?}", output);
    serde_json::from_slice(&output.stdout).unwrap()
}

/// Titles of one column in the JSON board, by column name.
pub fn column_titles(board: &serde_json::Value, name: &str) -> Vec<String> {
    board["columns"]
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["name"] == name)
        .unwrap()["issues"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["title"].as_str().unwrap().to_string())
        .collect()
}
