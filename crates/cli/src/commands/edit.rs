// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use kb_core::issue::Issue;
use kb_core::{Collection, FormChange, IssuePanel};

use super::{open_store, print_lines};
use crate::cli::EditArgs;
use crate::display::{format_issue_details, Labels};
use crate::error::Result;
use crate::store::Store;

pub fn run(args: EditArgs) -> Result<()> {
    let (store, _config, _work_dir) = open_store()?;
    let outcome = run_impl(&store, args);
    // Immediate edits may have landed before a later one failed.
    store.save()?;
    let (issue, changed) = outcome?;

    if changed {
        let snapshot = store.snapshot();
        print_lines(&format_issue_details(&issue, &Labels::new(&snapshot)));
    } else {
        println!("No changes to {}", issue.id);
    }
    Ok(())
}

/// Drive an issue panel in edit mode. Status, priority, assignee and tag
/// changes are written as they are applied; title and description are
/// written on submit.
pub(crate) fn run_impl(store: &Store, args: EditArgs) -> Result<(Issue, bool)> {
    let issue = store.resolve_issue(&args.id)?;
    let assignees = store.issue_assignees.rows().data;
    let tags = store.issue_tags.rows().data;
    let mut panel = IssuePanel::edit(&issue, &assignees, &tags);

    let mut changes = Vec::new();
    if let Some(status) = &args.status {
        changes.push(FormChange::Status(store.resolve_status(status)?.id));
    }
    if let Some(priority) = args.priority {
        changes.push(FormChange::Priority(priority));
    }
    if let Some(assignee) = &args.assignee {
        changes.push(FormChange::Assignee(Some(assignee.trim().to_string())));
    } else if args.unassign {
        changes.push(FormChange::Assignee(None));
    }
    for name in &args.tag {
        changes.push(FormChange::ToggleTag(store.resolve_tag(name)?.id));
    }
    let submit = args.title.is_some() || args.description.is_some();
    if let Some(title) = args.title {
        changes.push(FormChange::Title(title));
    }
    if let Some(description) = args.description {
        let description = Some(description).filter(|d| !d.trim().is_empty());
        changes.push(FormChange::Description(description));
    }

    let changed = !changes.is_empty();
    for change in changes {
        panel.apply(change, store.collections())?;
    }
    if submit {
        panel.submit(store.collections())?;
    }

    Ok((store.resolve_issue(&issue.id)?, changed))
}

#[cfg(test)]
#[path = "edit_tests.rs"]
mod tests;
