// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::{open_store, print_lines};
use crate::display::{format_issue_details, Labels};
use crate::error::Result;

pub fn run(id: &str) -> Result<()> {
    let (store, _config, _work_dir) = open_store()?;
    let issue = store.resolve_issue(id)?;
    let snapshot = store.snapshot();
    print_lines(&format_issue_details(&issue, &Labels::new(&snapshot)));
    Ok(())
}
