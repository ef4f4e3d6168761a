// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue panel: form state for creating or editing a single issue.
//!
//! In edit mode, status, priority, assignee and tag changes are written as
//! soon as they are made; title and description wait for [`IssuePanel::submit`].
//! In create mode nothing is written until submit.

use crate::board::sorted_statuses;
use crate::collection::Collection;
use crate::error::{Error, Result};
use crate::issue::{
    Issue, IssueAssignee, IssuePatch, IssueTag, NewIssue, NewIssueAssignee, NewIssueTag, Priority,
    Status,
};

/// Display id shown while creating.
pub const NEW_ISSUE_DISPLAY_ID: &str = "New Issue";

/// The collections a panel writes through.
#[derive(Clone, Copy)]
pub struct IssueCollections<'a> {
    pub issues: &'a dyn Collection<Issue>,
    pub assignees: &'a dyn Collection<IssueAssignee>,
    pub tags: &'a dyn Collection<IssueTag>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelMode {
    Create,
    Edit { issue_id: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct IssueForm {
    pub title: String,
    pub description: Option<String>,
    pub status_id: String,
    pub priority: Priority,
    pub assignee_id: Option<String>,
    pub tag_ids: Vec<String>,
}

/// A single edit to the form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormChange {
    Title(String),
    Description(Option<String>),
    Status(String),
    Priority(Priority),
    Assignee(Option<String>),
    /// Add the tag if absent, remove it if present.
    ToggleTag(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct IssuePanel {
    project_id: String,
    mode: PanelMode,
    form: IssueForm,
}

impl IssuePanel {
    /// Open an empty form in the first status column.
    pub fn create(project_id: impl Into<String>, statuses: &[Status]) -> Result<Self> {
        let project_id = project_id.into();
        let status_id = sorted_statuses(statuses)
            .first()
            .map(|s| s.id.clone())
            .ok_or_else(|| Error::NoStatuses(project_id.clone()))?;

        Ok(IssuePanel {
            project_id,
            mode: PanelMode::Create,
            form: IssueForm {
                title: String::new(),
                description: None,
                status_id,
                priority: Priority::Medium,
                assignee_id: None,
                tag_ids: Vec::new(),
            },
        })
    }

    /// Open an existing issue, loading its assignee and tags from the
    /// join records.
    pub fn edit(issue: &Issue, assignees: &[IssueAssignee], tags: &[IssueTag]) -> Self {
        let assignee_id = assignees
            .iter()
            .find(|a| a.issue_id == issue.id)
            .map(|a| a.user_id.clone());
        let tag_ids = tags
            .iter()
            .filter(|t| t.issue_id == issue.id)
            .map(|t| t.tag_id.clone())
            .collect();

        IssuePanel {
            project_id: issue.project_id.clone(),
            mode: PanelMode::Edit {
                issue_id: issue.id.clone(),
            },
            form: IssueForm {
                title: issue.title.clone(),
                description: issue.description.clone(),
                status_id: issue.status_id.clone(),
                priority: issue.priority,
                assignee_id,
                tag_ids,
            },
        }
    }

    pub fn mode(&self) -> &PanelMode {
        &self.mode
    }

    pub fn form(&self) -> &IssueForm {
        &self.form
    }

    pub fn display_id(&self) -> &str {
        match &self.mode {
            PanelMode::Create => NEW_ISSUE_DISPLAY_ID,
            PanelMode::Edit { issue_id } => issue_id,
        }
    }

    /// Apply a change to the form, persisting it right away in edit mode.
    pub fn apply(&mut self, change: FormChange, store: IssueCollections<'_>) -> Result<()> {
        let editing = match &self.mode {
            PanelMode::Edit { issue_id } => Some(issue_id.clone()),
            PanelMode::Create => None,
        };

        match change {
            FormChange::Title(title) => self.form.title = title,
            FormChange::Description(description) => self.form.description = description,
            FormChange::Status(status_id) => {
                if let Some(issue_id) = &editing {
                    store
                        .issues
                        .update(issue_id, IssuePatch::status(status_id.clone()))?;
                }
                self.form.status_id = status_id;
            }
            FormChange::Priority(priority) => {
                if let Some(issue_id) = &editing {
                    store.issues.update(issue_id, IssuePatch::priority(priority))?;
                }
                self.form.priority = priority;
            }
            FormChange::Assignee(user_id) => {
                if let Some(issue_id) = &editing {
                    replace_assignee(store.assignees, issue_id, user_id.as_deref())?;
                }
                self.form.assignee_id = user_id;
            }
            FormChange::ToggleTag(tag_id) => {
                let present = self.form.tag_ids.contains(&tag_id);
                if let Some(issue_id) = &editing {
                    toggle_tag(store.tags, issue_id, &tag_id, present)?;
                }
                if present {
                    self.form.tag_ids.retain(|t| *t != tag_id);
                } else {
                    self.form.tag_ids.push(tag_id);
                }
            }
        }
        Ok(())
    }

    /// Persist the form.
    ///
    /// Create mode inserts the issue at the bottom of its column along with
    /// its assignee and tags, returning the stored issue. Edit mode saves
    /// title and description and returns `None`.
    pub fn submit(&self, store: IssueCollections<'_>) -> Result<Option<Issue>> {
        let title = self.form.title.trim();
        if title.is_empty() {
            return Err(Error::FieldEmpty { field: "title" });
        }

        match &self.mode {
            PanelMode::Create => {
                let sort_order = next_sort_order(&store.issues.rows().data, &self.form.status_id);
                let issue = store.issues.insert(NewIssue {
                    project_id: self.project_id.clone(),
                    status_id: self.form.status_id.clone(),
                    title: title.to_string(),
                    description: self.form.description.clone(),
                    priority: self.form.priority,
                    sort_order,
                })?;
                if let Some(user_id) = &self.form.assignee_id {
                    store.assignees.insert(NewIssueAssignee {
                        issue_id: issue.id.clone(),
                        user_id: user_id.clone(),
                    })?;
                }
                for tag_id in &self.form.tag_ids {
                    store.tags.insert(NewIssueTag {
                        issue_id: issue.id.clone(),
                        tag_id: tag_id.clone(),
                    })?;
                }
                tracing::info!("created issue {} in {}", issue.id, issue.status_id);
                Ok(Some(issue))
            }
            PanelMode::Edit { issue_id } => {
                store.issues.update(
                    issue_id,
                    IssuePatch {
                        title: Some(title.to_string()),
                        description: Some(self.form.description.clone()),
                        ..Default::default()
                    },
                )?;
                Ok(None)
            }
        }
    }
}

/// Sort order placing a new issue below everything in its column.
pub fn next_sort_order(issues: &[Issue], status_id: &str) -> f64 {
    issues
        .iter()
        .filter(|i| i.status_id == status_id)
        .map(|i| i.sort_order)
        .fold(0.0, f64::max)
        + 1.0
}

fn replace_assignee(
    assignees: &dyn Collection<IssueAssignee>,
    issue_id: &str,
    user_id: Option<&str>,
) -> Result<()> {
    let current = assignees
        .rows()
        .data
        .into_iter()
        .find(|a| a.issue_id == issue_id);
    if let Some(current) = current {
        assignees.remove(&current.id)?;
    }
    if let Some(user_id) = user_id {
        assignees.insert(NewIssueAssignee {
            issue_id: issue_id.to_string(),
            user_id: user_id.to_string(),
        })?;
    }
    Ok(())
}

fn toggle_tag(
    tags: &dyn Collection<IssueTag>,
    issue_id: &str,
    tag_id: &str,
    present: bool,
) -> Result<()> {
    if present {
        let records = tags.rows().data;
        for record in records
            .iter()
            .filter(|r| r.issue_id == issue_id && r.tag_id == tag_id)
        {
            tags.remove(&record.id)?;
        }
    } else {
        tags.insert(NewIssueTag {
            issue_id: issue_id.to_string(),
            tag_id: tag_id.to_string(),
        })?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "panel_tests.rs"]
mod tests;
