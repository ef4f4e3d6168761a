// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! kb-core: board logic for the kanban issue tracker
//!
//! This crate provides the issue model, the filter engine, board grouping,
//! drag-and-drop reordering and the issue panel used by the `kb` CLI.

pub mod board;
pub mod collection;
pub mod error;
pub mod filter;
pub mod id;
pub mod issue;
pub mod panel;
pub mod prefs;
pub mod reorder;

pub use board::{Board, BoardColumn, BoardInputs};
pub use collection::{Collection, Entity, MemoryCollection, Rows};
pub use error::{Error, Result};
pub use filter::{filter_issues, FilterSpec, SortDirection, SortField, UNASSIGNED};
pub use issue::{Issue, IssueAssignee, IssuePatch, IssueTag, Priority, Status, Tag};
pub use panel::{FormChange, IssueCollections, IssuePanel, PanelMode};
pub use prefs::{FilterStore, Preferences};
pub use reorder::{DragEnd, DragLocation, DragOutcome, ReorderCoordinator};
