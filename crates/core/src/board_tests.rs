// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::issue::Priority;
use chrono::{Duration, TimeZone, Utc};
use yare::parameterized;

fn status(id: &str, sort_order: f64) -> Status {
    Status {
        id: id.to_string(),
        project_id: "web".to_string(),
        name: id.to_uppercase(),
        color: "#cccccc".to_string(),
        sort_order,
    }
}

fn issue(id: &str, status_id: &str, sort_order: f64) -> Issue {
    let created = Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap();
    Issue {
        id: id.to_string(),
        project_id: "web".to_string(),
        status_id: status_id.to_string(),
        title: id.to_string(),
        description: None,
        priority: Priority::Medium,
        sort_order,
        created_at: created,
        updated_at: created,
    }
}

fn column_ids(board: &Board, status_id: &str) -> Vec<String> {
    board.column(status_id).unwrap().issue_ids()
}

#[test]
fn statuses_sorted_left_to_right_with_id_tiebreak() {
    let statuses = vec![
        status("done", 3.0),
        status("b-todo", 1.0),
        status("a-todo", 1.0),
        status("doing", 2.0),
    ];
    let sorted: Vec<&str> = sorted_statuses(&statuses)
        .iter()
        .map(|s| s.id.as_str())
        .collect();
    assert_eq!(sorted, vec!["a-todo", "b-todo", "doing", "done"]);
}

#[test]
fn build_groups_issues_into_status_columns() {
    let statuses = vec![status("todo", 1.0), status("done", 2.0)];
    let issues = vec![
        issue("a", "done", 1000.0),
        issue("b", "todo", 2000.0),
        issue("c", "todo", 1000.0),
    ];
    let board = Board::build(
        BoardInputs {
            statuses: &statuses,
            issues: &issues,
            issue_assignees: &[],
            issue_tags: &[],
        },
        &FilterSpec::default(),
    );

    assert_eq!(board.columns.len(), 2);
    assert_eq!(board.columns[0].status.id, "todo");
    assert_eq!(column_ids(&board, "todo"), vec!["c", "b"]);
    assert_eq!(column_ids(&board, "done"), vec!["a"]);
    assert_eq!(board.issue_count(), 3);
}

#[test]
fn build_drops_issues_with_unknown_status() {
    let statuses = vec![status("todo", 1.0)];
    let issues = vec![issue("a", "todo", 1.0), issue("orphan", "gone", 1.0)];
    let board = Board::build(
        BoardInputs {
            statuses: &statuses,
            issues: &issues,
            issue_assignees: &[],
            issue_tags: &[],
        },
        &FilterSpec::default(),
    );
    assert_eq!(board.issue_count(), 1);
}

#[test]
fn build_without_statuses_is_empty() {
    let issues = vec![issue("a", "todo", 1.0)];
    let board = Board::build(
        BoardInputs {
            statuses: &[],
            issues: &issues,
            issue_assignees: &[],
            issue_tags: &[],
        },
        &FilterSpec::default(),
    );
    assert!(board.is_empty());
}

#[test]
fn build_applies_filters_before_grouping() {
    let statuses = vec![status("todo", 1.0)];
    let mut urgent = issue("a", "todo", 1.0);
    urgent.priority = Priority::Urgent;
    let issues = vec![urgent, issue("b", "todo", 2.0)];
    let spec = FilterSpec {
        priorities: vec![Priority::Urgent],
        ..Default::default()
    };
    let board = Board::build(
        BoardInputs {
            statuses: &statuses,
            issues: &issues,
            issue_assignees: &[],
            issue_tags: &[],
        },
        &spec,
    );
    assert_eq!(column_ids(&board, "todo"), vec!["a"]);
}

#[test]
fn empty_columns_are_kept() {
    let statuses = vec![status("todo", 1.0), status("done", 2.0)];
    let board = Board::build(
        BoardInputs {
            statuses: &statuses,
            issues: &[],
            issue_assignees: &[],
            issue_tags: &[],
        },
        &FilterSpec::default(),
    );
    assert_eq!(board.columns.len(), 2);
    assert!(board.columns.iter().all(|c| c.issues.is_empty()));
}

fn sorted_ids(issues: &[Issue], field: SortField, direction: SortDirection) -> Vec<String> {
    let mut refs: Vec<&Issue> = issues.iter().collect();
    sort_issues(&mut refs, field, direction);
    refs.iter().map(|i| i.id.clone()).collect()
}

fn sortable() -> Vec<Issue> {
    let base = Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap();
    let mut a = issue("a", "todo", 3000.0);
    a.title = "banana".to_string();
    a.priority = Priority::Low;
    a.created_at = base;
    a.updated_at = base + Duration::days(5);

    let mut b = issue("b", "todo", 1000.0);
    b.title = "Apple".to_string();
    b.priority = Priority::Urgent;
    b.created_at = base + Duration::days(1);
    b.updated_at = base + Duration::days(1);

    let mut c = issue("c", "todo", 2000.0);
    c.title = "cherry".to_string();
    c.priority = Priority::High;
    c.created_at = base + Duration::days(2);
    c.updated_at = base + Duration::days(3);

    vec![a, b, c]
}

#[parameterized(
    manual_asc = { SortField::Manual, SortDirection::Asc, &["b", "c", "a"] },
    manual_desc = { SortField::Manual, SortDirection::Desc, &["a", "c", "b"] },
    priority_asc = { SortField::Priority, SortDirection::Asc, &["b", "c", "a"] },
    priority_desc = { SortField::Priority, SortDirection::Desc, &["a", "c", "b"] },
    created_asc = { SortField::CreatedAt, SortDirection::Asc, &["a", "b", "c"] },
    updated_desc = { SortField::UpdatedAt, SortDirection::Desc, &["a", "c", "b"] },
    title_asc = { SortField::Title, SortDirection::Asc, &["b", "a", "c"] },
    title_desc = { SortField::Title, SortDirection::Desc, &["c", "a", "b"] },
)]
fn sort_by_field(field: SortField, direction: SortDirection, expected: &[&str]) {
    assert_eq!(sorted_ids(&sortable(), field, direction), expected);
}

#[test]
fn ties_fall_back_to_ascending_sort_order() {
    let mut issues = vec![
        issue("x", "todo", 3000.0),
        issue("y", "todo", 1000.0),
        issue("z", "todo", 2000.0),
    ];
    for i in &mut issues {
        i.priority = Priority::High;
    }
    assert_eq!(
        sorted_ids(&issues, SortField::Priority, SortDirection::Desc),
        vec!["y", "z", "x"]
    );
}

#[test]
fn columns_are_sorted_independently() {
    let statuses = vec![status("todo", 1.0), status("done", 2.0)];
    let mut issues = sortable();
    issues[0].status_id = "done".to_string();
    let spec = FilterSpec {
        sort_field: SortField::Title,
        ..Default::default()
    };
    let board = Board::build(
        BoardInputs {
            statuses: &statuses,
            issues: &issues,
            issue_assignees: &[],
            issue_tags: &[],
        },
        &spec,
    );
    assert_eq!(column_ids(&board, "todo"), vec!["b", "c"]);
    assert_eq!(column_ids(&board, "done"), vec!["a"]);
}
