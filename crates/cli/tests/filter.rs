// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;
use common::*;

fn seeded() -> TempDir {
    let temp = init_temp();
    kb_in(&temp).args(["tag", "add", "bug"]).assert().success();
    create_issue(&temp, "Login broken", &["-p", "urgent", "-a", "alice", "-t", "bug"]);
    create_issue(&temp, "Update copy", &["-p", "low", "-a", "bob"]);
    create_issue(&temp, "Logout slow", &["-p", "high"]);
    temp
}

#[test]
fn filter_without_flags_shows_defaults() {
    let temp = init_temp();
    kb_in(&temp)
        .arg("filter")
        .assert()
        .success()
        .stdout(predicate::str::contains("Search: (any)"))
        .stdout(predicate::str::contains("Sort: manual asc"));
}

#[test]
fn search_is_saved_and_applied() {
    let temp = seeded();
    kb_in(&temp)
        .args(["filter", "--search", "LOG"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Search: LOG"));

    let board = board_json(&temp, &[]);
    assert_eq!(
        column_titles(&board, "To do"),
        vec!["Login broken", "Logout slow"]
    );
    assert_eq!(board["filters_active"], true);
    assert!(temp.path().join(".kanban/prefs.toml").exists());
}

#[test]
fn filters_combine_with_and() {
    let temp = seeded();
    kb_in(&temp)
        .args(["filter", "-p", "urgent,high", "-a", "alice,unassigned"])
        .assert()
        .success();

    let board = board_json(&temp, &[]);
    assert_eq!(
        column_titles(&board, "To do"),
        vec!["Login broken", "Logout slow"]
    );

    kb_in(&temp).args(["filter", "-t", "bug"]).assert().success();
    let board = board_json(&temp, &[]);
    assert_eq!(column_titles(&board, "To do"), vec!["Login broken"]);
}

#[test]
fn flag_without_value_clears_that_filter() {
    let temp = seeded();
    kb_in(&temp).args(["filter", "-p", "low"]).assert().success();
    assert_eq!(
        column_titles(&board_json(&temp, &[]), "To do"),
        vec!["Update copy"]
    );

    kb_in(&temp).args(["filter", "-p"]).assert().success();
    assert_eq!(column_titles(&board_json(&temp, &[]), "To do").len(), 3);
}

#[test]
fn all_flag_ignores_saved_filters() {
    let temp = seeded();
    kb_in(&temp).args(["filter", "-s", "nothing"]).assert().success();

    assert!(column_titles(&board_json(&temp, &[]), "To do").is_empty());
    assert_eq!(
        column_titles(&board_json(&temp, &["--all"]), "To do").len(),
        3
    );
    kb_in(&temp)
        .arg("board")
        .assert()
        .success()
        .stdout(predicate::str::contains("3 issue(s) hidden"));
}

#[test]
fn sort_by_priority_and_toggle() {
    let temp = seeded();
    kb_in(&temp)
        .args(["filter", "--sort", "priority"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sort: priority asc"));
    assert_eq!(
        column_titles(&board_json(&temp, &[]), "To do"),
        vec!["Login broken", "Logout slow", "Update copy"]
    );

    kb_in(&temp)
        .args(["filter", "--toggle-direction"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sort: priority desc"));
    assert_eq!(
        column_titles(&board_json(&temp, &[]), "To do"),
        vec!["Update copy", "Logout slow", "Login broken"]
    );
}

#[test]
fn moving_an_issue_hidden_by_filters_fails() {
    let temp = init_temp();
    let id = create_issue(&temp, "Invisible", &[]);
    kb_in(&temp).args(["filter", "-s", "other"]).assert().success();

    kb_in(&temp)
        .args(["move", &id, "Done"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("hidden by the active filters"));
}
