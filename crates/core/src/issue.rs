// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Board entity types.
//!
//! This module contains the rows the board is built from: Issue, Status,
//! Tag, and the IssueAssignee/IssueTag join records, together with the
//! draft and patch shapes used to insert and update them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::collection::Entity;
use crate::error::{Error, Result};

/// Urgency of an issue, most urgent first.
///
/// Variant order is the rank order, so the derived `Ord` sorts urgent
/// before low.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Urgent,
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    /// All priorities in rank order.
    pub const ALL: [Priority; 4] = [
        Priority::Urgent,
        Priority::High,
        Priority::Medium,
        Priority::Low,
    ];

    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Urgent => "urgent",
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    /// Fixed rank used for priority sorting: urgent=0 .. low=3.
    pub fn rank(&self) -> u8 {
        match self {
            Priority::Urgent => 0,
            Priority::High => 1,
            Priority::Medium => 2,
            Priority::Low => 3,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Priority {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "urgent" => Ok(Priority::Urgent),
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(Error::InvalidPriority(s.to_string())),
        }
    }
}

/// A unit of work living in exactly one status column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub id: String,
    pub project_id: String,
    pub status_id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    /// Position within the status column. Only meaningful relative to
    /// the other issues of the same column.
    pub sort_order: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A named, colored kanban column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Status {
    pub id: String,
    pub project_id: String,
    pub name: String,
    pub color: String,
    /// Left-to-right position of the column.
    pub sort_order: f64,
}

/// A named, colored label scoped to a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub project_id: String,
    pub name: String,
    pub color: String,
}

/// Join record: an issue is assigned to a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueAssignee {
    pub id: String,
    pub issue_id: String,
    pub user_id: String,
}

/// Join record: an issue carries a tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueTag {
    pub id: String,
    pub issue_id: String,
    pub tag_id: String,
}

/// Fields required to insert an issue.
#[derive(Debug, Clone, PartialEq)]
pub struct NewIssue {
    pub project_id: String,
    pub status_id: String,
    pub title: String,
    pub description: Option<String>,
    pub priority: Priority,
    pub sort_order: f64,
}

/// Fields required to insert a status column.
#[derive(Debug, Clone, PartialEq)]
pub struct NewStatus {
    pub project_id: String,
    pub name: String,
    pub color: String,
    pub sort_order: f64,
}

/// Fields required to insert a tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTag {
    pub project_id: String,
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIssueAssignee {
    pub issue_id: String,
    pub user_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIssueTag {
    pub issue_id: String,
    pub tag_id: String,
}

/// Partial update of an issue. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IssuePatch {
    pub status_id: Option<String>,
    pub title: Option<String>,
    /// `Some(None)` clears the description.
    pub description: Option<Option<String>>,
    pub priority: Option<Priority>,
    pub sort_order: Option<f64>,
}

impl IssuePatch {
    /// The patch a drag produces: new column and new position in it.
    pub fn placement(status_id: impl Into<String>, sort_order: f64) -> Self {
        IssuePatch {
            status_id: Some(status_id.into()),
            sort_order: Some(sort_order),
            ..Default::default()
        }
    }

    pub fn status(status_id: impl Into<String>) -> Self {
        IssuePatch {
            status_id: Some(status_id.into()),
            ..Default::default()
        }
    }

    pub fn priority(priority: Priority) -> Self {
        IssuePatch {
            priority: Some(priority),
            ..Default::default()
        }
    }

    /// Returns true if applying this patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.status_id.is_none()
            && self.title.is_none()
            && self.description.is_none()
            && self.priority.is_none()
            && self.sort_order.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusPatch {
    pub name: Option<String>,
    pub color: Option<String>,
    pub sort_order: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagPatch {
    pub name: Option<String>,
    pub color: Option<String>,
}

impl Entity for Issue {
    type Draft = NewIssue;
    type Patch = IssuePatch;
    const KIND: &'static str = "issue";

    fn id(&self) -> &str {
        &self.id
    }

    fn id_seed(draft: &NewIssue) -> &str {
        &draft.title
    }

    fn from_draft(id: String, draft: NewIssue, now: DateTime<Utc>) -> Self {
        Issue {
            id,
            project_id: draft.project_id,
            status_id: draft.status_id,
            title: draft.title,
            description: draft.description,
            priority: draft.priority,
            sort_order: draft.sort_order,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply(&mut self, patch: IssuePatch, now: DateTime<Utc>) {
        if let Some(status_id) = patch.status_id {
            self.status_id = status_id;
        }
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(sort_order) = patch.sort_order {
            self.sort_order = sort_order;
        }
        self.updated_at = now;
    }
}

impl Entity for Status {
    type Draft = NewStatus;
    type Patch = StatusPatch;
    const KIND: &'static str = "status";

    fn id(&self) -> &str {
        &self.id
    }

    fn id_seed(draft: &NewStatus) -> &str {
        &draft.name
    }

    fn from_draft(id: String, draft: NewStatus, _now: DateTime<Utc>) -> Self {
        Status {
            id,
            project_id: draft.project_id,
            name: draft.name,
            color: draft.color,
            sort_order: draft.sort_order,
        }
    }

    fn apply(&mut self, patch: StatusPatch, _now: DateTime<Utc>) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
        if let Some(sort_order) = patch.sort_order {
            self.sort_order = sort_order;
        }
    }
}

impl Entity for Tag {
    type Draft = NewTag;
    type Patch = TagPatch;
    const KIND: &'static str = "tag";

    fn id(&self) -> &str {
        &self.id
    }

    fn id_seed(draft: &NewTag) -> &str {
        &draft.name
    }

    fn from_draft(id: String, draft: NewTag, _now: DateTime<Utc>) -> Self {
        Tag {
            id,
            project_id: draft.project_id,
            name: draft.name,
            color: draft.color,
        }
    }

    fn apply(&mut self, patch: TagPatch, _now: DateTime<Utc>) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
    }
}

impl Entity for IssueAssignee {
    type Draft = NewIssueAssignee;
    type Patch = Infallible;
    const KIND: &'static str = "issue assignee";

    fn id(&self) -> &str {
        &self.id
    }

    fn id_seed(draft: &NewIssueAssignee) -> &str {
        &draft.user_id
    }

    fn from_draft(id: String, draft: NewIssueAssignee, _now: DateTime<Utc>) -> Self {
        IssueAssignee {
            id,
            issue_id: draft.issue_id,
            user_id: draft.user_id,
        }
    }

    fn apply(&mut self, patch: Infallible, _now: DateTime<Utc>) {
        match patch {}
    }
}

impl Entity for IssueTag {
    type Draft = NewIssueTag;
    type Patch = Infallible;
    const KIND: &'static str = "issue tag";

    fn id(&self) -> &str {
        &self.id
    }

    fn id_seed(draft: &NewIssueTag) -> &str {
        &draft.tag_id
    }

    fn from_draft(id: String, draft: NewIssueTag, _now: DateTime<Utc>) -> Self {
        IssueTag {
            id,
            issue_id: draft.issue_id,
            tag_id: draft.tag_id,
        }
    }

    fn apply(&mut self, patch: Infallible, _now: DateTime<Utc>) {
        match patch {}
    }
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
