// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use kb_core::issue::Issue;
use kb_core::panel::NEW_ISSUE_DISPLAY_ID;
use kb_core::{Collection, FormChange, IssuePanel, Priority};

use super::open_store;
use crate::cli::OutputFormat;
use crate::config::Config;
use crate::display::{IssueJson, Labels};
use crate::error::{Error, Result};
use crate::store::Store;

/// Fields collected from the command line for a new issue.
#[derive(Debug, Default)]
pub struct NewIssueInput {
    pub title: String,
    pub description: Option<String>,
    pub status: Option<String>,
    pub priority: Option<Priority>,
    pub assignee: Option<String>,
    pub tags: Vec<String>,
}

pub fn run(input: NewIssueInput, output: OutputFormat) -> Result<()> {
    let (store, config, _work_dir) = open_store()?;
    let issue = run_impl(&store, &config, input)?;
    store.save()?;

    match output {
        OutputFormat::Id => println!("{}", issue.id),
        OutputFormat::Json => {
            let snapshot = store.snapshot();
            let labels = Labels::new(&snapshot);
            let json = IssueJson {
                id: issue.id.clone(),
                title: issue.title.clone(),
                priority: issue.priority,
                sort_order: issue.sort_order,
                description: issue.description.clone(),
                assignees: labels.assignees(&issue.id),
                tags: labels.tags(&issue.id),
            };
            println!("{}", serde_json::to_string(&json)?);
        }
        OutputFormat::Text => println!("Created {}: {}", issue.id, issue.title),
    }
    Ok(())
}

/// Fill an issue panel in create mode and submit it.
pub(crate) fn run_impl(store: &Store, config: &Config, input: NewIssueInput) -> Result<Issue> {
    let statuses = store.statuses.rows().data;
    let mut panel = IssuePanel::create(config.project_id.clone(), &statuses)?;

    let mut changes = vec![FormChange::Title(input.title)];
    if let Some(description) = input.description.filter(|d| !d.trim().is_empty()) {
        changes.push(FormChange::Description(Some(description)));
    }
    if let Some(status) = input.status {
        changes.push(FormChange::Status(store.resolve_status(&status)?.id));
    }
    if let Some(priority) = input.priority {
        changes.push(FormChange::Priority(priority));
    }
    if let Some(assignee) = input.assignee.filter(|a| !a.trim().is_empty()) {
        changes.push(FormChange::Assignee(Some(assignee.trim().to_string())));
    }
    let mut tag_ids: Vec<String> = Vec::new();
    for name in &input.tags {
        let id = store.resolve_tag(name)?.id;
        if !tag_ids.contains(&id) {
            tag_ids.push(id);
        }
    }
    changes.extend(tag_ids.into_iter().map(FormChange::ToggleTag));

    for change in changes {
        panel.apply(change, store.collections())?;
    }
    panel
        .submit(store.collections())?
        .ok_or_else(|| Error::IssueNotFound(NEW_ISSUE_DISPLAY_ID.to_string()))
}

#[cfg(test)]
#[path = "new_tests.rs"]
mod tests;
