// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use chrono::TimeZone;
use yare::parameterized;

fn sample_issue() -> Issue {
    let created = Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap();
    Issue::from_draft(
        "kb-0001".to_string(),
        NewIssue {
            project_id: "web".to_string(),
            status_id: "todo".to_string(),
            title: "Fix login bug".to_string(),
            description: None,
            priority: Priority::High,
            sort_order: 1000.0,
        },
        created,
    )
}

#[parameterized(
    urgent = { "urgent", Priority::Urgent },
    high = { "high", Priority::High },
    medium = { "medium", Priority::Medium },
    low = { "low", Priority::Low },
    upper = { "URGENT", Priority::Urgent },
    padded = { " low ", Priority::Low },
)]
fn priority_from_str_valid(input: &str, expected: Priority) {
    assert_eq!(input.parse::<Priority>().unwrap(), expected);
}

#[parameterized(
    invalid = { "p1" },
    empty = { "" },
)]
fn priority_from_str_invalid(input: &str) {
    assert!(matches!(
        input.parse::<Priority>(),
        Err(Error::InvalidPriority(_))
    ));
}

#[parameterized(
    urgent = { Priority::Urgent, 0 },
    high = { Priority::High, 1 },
    medium = { Priority::Medium, 2 },
    low = { Priority::Low, 3 },
)]
fn priority_rank(priority: Priority, expected: u8) {
    assert_eq!(priority.rank(), expected);
}

#[test]
fn priority_ord_follows_rank() {
    let mut all = vec![Priority::Low, Priority::Urgent, Priority::Medium, Priority::High];
    all.sort();
    assert_eq!(all, Priority::ALL.to_vec());
}

#[test]
fn priority_default_is_medium() {
    assert_eq!(Priority::default(), Priority::Medium);
}

#[test]
fn priority_serializes_lowercase() {
    let json = serde_json::to_string(&Priority::Urgent).unwrap();
    assert_eq!(json, "\"urgent\"");
}

#[test]
fn issue_from_draft_sets_timestamps() {
    let issue = sample_issue();
    assert_eq!(issue.id, "kb-0001");
    assert_eq!(issue.created_at, issue.updated_at);
    assert_eq!(issue.status_id, "todo");
}

#[test]
fn placement_patch_moves_issue() {
    let mut issue = sample_issue();
    let later = Utc.with_ymd_and_hms(2024, 1, 11, 9, 0, 0).unwrap();
    issue.apply(IssuePatch::placement("doing", 500.0), later);

    assert_eq!(issue.status_id, "doing");
    assert_eq!(issue.sort_order, 500.0);
    assert_eq!(issue.title, "Fix login bug");
    assert_eq!(issue.updated_at, later);
}

#[test]
fn patch_can_clear_description() {
    let mut issue = sample_issue();
    issue.description = Some("details".to_string());
    let patch = IssuePatch {
        description: Some(None),
        ..Default::default()
    };
    issue.apply(patch, Utc::now());
    assert_eq!(issue.description, None);
}

#[test]
fn patch_is_empty() {
    assert!(IssuePatch::default().is_empty());
    assert!(!IssuePatch::priority(Priority::Low).is_empty());
    assert!(!IssuePatch::status("done").is_empty());
}

#[test]
fn issue_deserializes_without_optional_fields() {
    let json = r#"{
        "id": "kb-1",
        "project_id": "web",
        "status_id": "todo",
        "title": "Write docs",
        "sort_order": 2000.0,
        "created_at": "2024-01-10T12:00:00Z",
        "updated_at": "2024-01-10T12:00:00Z"
    }"#;
    let issue: Issue = serde_json::from_str(json).unwrap();
    assert_eq!(issue.priority, Priority::Medium);
    assert_eq!(issue.description, None);
}

#[test]
fn status_patch_renames_column() {
    let mut status = Status::from_draft(
        "st-1".to_string(),
        NewStatus {
            project_id: "web".to_string(),
            name: "Todo".to_string(),
            color: "#888888".to_string(),
            sort_order: 1.0,
        },
        Utc::now(),
    );
    status.apply(
        StatusPatch {
            name: Some("Backlog".to_string()),
            ..Default::default()
        },
        Utc::now(),
    );
    assert_eq!(status.name, "Backlog");
    assert_eq!(status.color, "#888888");
}
