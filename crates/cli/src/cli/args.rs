// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.
//!
//! These structs are used with `#[command(flatten)]` by commands that
//! filter the cases of the current version.

use clap::Args;

use qb_core::{CaseFilter, TestStatus};

use crate::error::Result;

/// Status, group and text filters.
#[derive(Args, Clone, Debug, Default)]
pub struct FilterArgs {
    /// Filter by status on either platform (pass, fail, blocked, ...)
    #[arg(long, short)]
    pub status: Option<String>,

    /// Filter by group or module name
    #[arg(long, short)]
    pub group: Option<String>,

    /// Search scenario text and ids (case-insensitive)
    #[arg(long, short)]
    pub query: Option<String>,
}

impl FilterArgs {
    /// Builds the case filter, rejecting unknown statuses.
    pub fn to_filter(&self) -> Result<CaseFilter> {
        let mut filter = CaseFilter::new();
        if let Some(status) = &self.status {
            filter = filter.with_status(status.parse::<TestStatus>()?);
        }
        if let Some(group) = &self.group {
            filter = filter.with_group(group.clone());
        }
        if let Some(query) = &self.query {
            filter = filter.with_query(query.clone());
        }
        Ok(filter)
    }

    /// Human-readable list of the filters in effect.
    pub fn describe(&self) -> Vec<String> {
        let mut applied = Vec::new();
        if let Some(status) = &self.status {
            applied.push(format!("status = {}", status));
        }
        if let Some(group) = &self.group {
            applied.push(format!("group = {}", group));
        }
        if let Some(query) = &self.query {
            applied.push(format!("query ~ {}", query));
        }
        applied
    }
}
