// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::commands::testing::TestContext;
use crate::error::Error;
use kb_core::{Preferences, Priority, SortField, UNASSIGNED};

#[test]
fn empty_args_change_nothing() {
    let ctx = TestContext::new();
    let mut prefs = Preferences::default();

    assert!(!apply(&mut prefs, FilterArgs::default(), &ctx.store).unwrap());
    assert_eq!(prefs, Preferences::default());
}

#[test]
fn sets_each_filter() {
    let ctx = TestContext::new();
    let bug = ctx.create_tag("bug");
    let mut prefs = Preferences::default();
    let args = FilterArgs {
        search: Some("  login ".to_string()),
        priority: Some(vec![Priority::Low, Priority::Urgent, Priority::Low]),
        assignee: Some(vec!["alice".to_string(), " ".to_string(), UNASSIGNED.to_string()]),
        tag: Some(vec!["BUG".to_string()]),
        ..Default::default()
    };

    assert!(apply(&mut prefs, args, &ctx.store).unwrap());

    assert_eq!(prefs.search_query(), "login");
    assert_eq!(prefs.priorities(), [Priority::Urgent, Priority::Low]);
    assert_eq!(prefs.assignee_ids(), ["alice", UNASSIGNED]);
    assert_eq!(prefs.tag_ids(), [bug.id]);
}

#[test]
fn empty_list_clears_filter() {
    let ctx = TestContext::new();
    let mut prefs = Preferences::default();
    prefs.set_priorities(vec![Priority::High]);

    let args = FilterArgs {
        priority: Some(Vec::new()),
        ..Default::default()
    };
    assert!(apply(&mut prefs, args, &ctx.store).unwrap());
    assert!(prefs.priorities().is_empty());
}

#[test]
fn unknown_tag_is_an_error() {
    let ctx = TestContext::new();
    let mut prefs = Preferences::default();
    let args = FilterArgs {
        tag: Some(vec!["ghost".to_string()]),
        ..Default::default()
    };
    assert!(matches!(
        apply(&mut prefs, args, &ctx.store),
        Err(Error::TagNotFound(_))
    ));
}

#[test]
fn sort_field_and_direction() {
    let ctx = TestContext::new();
    let mut prefs = Preferences::default();

    let args = FilterArgs {
        sort: Some(SortField::Priority),
        desc: true,
        ..Default::default()
    };
    assert!(apply(&mut prefs, args, &ctx.store).unwrap());
    assert_eq!(prefs.sort(), (SortField::Priority, SortDirection::Desc));

    let args = FilterArgs {
        toggle_direction: true,
        ..Default::default()
    };
    apply(&mut prefs, args, &ctx.store).unwrap();
    assert_eq!(prefs.sort(), (SortField::Priority, SortDirection::Asc));

    let same = FilterArgs {
        asc: true,
        ..Default::default()
    };
    assert!(!apply(&mut prefs, same, &ctx.store).unwrap());
}
