// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use kb_core::issue::{NewTag, Tag};
use kb_core::Collection;

use super::{open_store, print_lines};
use crate::cli::TagCommand;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::store::Store;

pub fn run(command: TagCommand) -> Result<()> {
    let (store, config, _work_dir) = open_store()?;
    match command {
        TagCommand::Add { name, color } => {
            let tag = add(&store, &config, &name, &color)?;
            store.save()?;
            println!("Created tag {} ({})", tag.name, tag.id);
        }
        TagCommand::List => {
            let lines = list(&store);
            if lines.is_empty() {
                println!("No tags");
            } else {
                print_lines(&lines);
            }
        }
    }
    Ok(())
}

pub(crate) fn add(store: &Store, config: &Config, name: &str, color: &str) -> Result<Tag> {
    let name = name.trim();
    if store.resolve_tag(name).is_ok() {
        return Err(Error::TagExists(name.to_string()));
    }
    let tag = store.tags.insert(NewTag {
        project_id: config.project_id.clone(),
        name: name.to_string(),
        color: color.trim().to_string(),
    })?;
    Ok(tag)
}

/// Tags sorted by name, with how many issues carry each.
pub(crate) fn list(store: &Store) -> Vec<String> {
    let mut tags = store.tags.rows().data;
    tags.sort_by_key(|t| t.name.to_lowercase());
    let records = store.issue_tags.rows().data;
    tags.iter()
        .map(|tag| {
            let count = records.iter().filter(|r| r.tag_id == tag.id).count();
            format!("{} {} ({} issues)", tag.name, tag.color, count)
        })
        .collect()
}

#[cfg(test)]
#[path = "tag_tests.rs"]
mod tests;
