// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::commands::testing::TestContext;
use crate::error::Error;
use kb_core::Priority;

fn args(id: &str) -> EditArgs {
    EditArgs {
        id: id.to_string(),
        ..Default::default()
    }
}

#[test]
fn no_flags_is_not_a_change() {
    let ctx = TestContext::new();
    let issue = ctx.create_issue("To do", "Task", 1000.0);

    let (_, changed) = run_impl(&ctx.store, args(&issue.id)).unwrap();
    assert!(!changed);
    assert_eq!(ctx.store.issues.revision(), 1);
}

#[test]
fn status_change_keeps_sort_order() {
    let ctx = TestContext::new();
    let issue = ctx.create_issue("To do", "Task", 1500.0);

    let (updated, changed) = run_impl(
        &ctx.store,
        EditArgs {
            status: Some("Done".to_string()),
            priority: Some(Priority::High),
            ..args(&issue.id)
        },
    )
    .unwrap();

    assert!(changed);
    assert_eq!(updated.status_id, ctx.status("Done").id);
    assert_eq!(updated.priority, Priority::High);
    assert_eq!(updated.sort_order, 1500.0);
}

#[test]
fn title_and_description_are_saved() {
    let ctx = TestContext::new();
    let issue = ctx.create_issue("To do", "Task", 1000.0);

    let (updated, _) = run_impl(
        &ctx.store,
        EditArgs {
            title: Some("  Renamed  ".to_string()),
            description: Some("Details".to_string()),
            ..args(&issue.id)
        },
    )
    .unwrap();
    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.description.as_deref(), Some("Details"));

    let (cleared, _) = run_impl(
        &ctx.store,
        EditArgs {
            description: Some(String::new()),
            ..args(&issue.id)
        },
    )
    .unwrap();
    assert!(cleared.description.is_none());
}

#[test]
fn assignee_replace_and_unassign() {
    let ctx = TestContext::new();
    let issue = ctx.create_issue("To do", "Task", 1000.0);

    run_impl(
        &ctx.store,
        EditArgs {
            assignee: Some("alice".to_string()),
            ..args(&issue.id)
        },
    )
    .unwrap();
    run_impl(
        &ctx.store,
        EditArgs {
            assignee: Some("bob".to_string()),
            ..args(&issue.id)
        },
    )
    .unwrap();
    let users: Vec<String> = ctx
        .store
        .issue_assignees
        .rows()
        .data
        .into_iter()
        .map(|a| a.user_id)
        .collect();
    assert_eq!(users, vec!["bob"]);

    run_impl(
        &ctx.store,
        EditArgs {
            unassign: true,
            ..args(&issue.id)
        },
    )
    .unwrap();
    assert!(ctx.store.issue_assignees.rows().data.is_empty());
}

#[test]
fn tag_flag_toggles() {
    let ctx = TestContext::new();
    let issue = ctx.create_issue("To do", "Task", 1000.0);
    ctx.create_tag("bug");
    let toggle = || EditArgs {
        tag: vec!["bug".to_string()],
        ..args(&issue.id)
    };

    run_impl(&ctx.store, toggle()).unwrap();
    assert_eq!(ctx.store.issue_tags.rows().data.len(), 1);
    run_impl(&ctx.store, toggle()).unwrap();
    assert!(ctx.store.issue_tags.rows().data.is_empty());
}

#[test]
fn unknown_issue_is_reported() {
    let ctx = TestContext::new();
    assert!(matches!(
        run_impl(&ctx.store, args("test-missing")),
        Err(Error::IssueNotFound(_))
    ));
}
