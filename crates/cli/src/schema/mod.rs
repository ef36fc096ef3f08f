// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema types for JSON output structures.
//!
//! These mirror the runtime types with schema annotations so the core data
//! model stays free of output concerns. [`CaseJson`] is the case summary
//! shared by `list`; `show` uses the full [`show::CaseDetails`].

use schemars::JsonSchema;
use serde::Serialize;

pub mod list;
pub mod show;
pub mod summary;
pub mod versions;

/// JSON representation of a test case summary.
#[derive(JsonSchema, Serialize)]
pub struct CaseJson {
    /// Test case identifier (e.g. `CT-001`).
    pub id: String,
    /// Group the case belongs to.
    pub group: String,
    /// Module the case belongs to.
    pub module: String,
    /// What is being tested.
    pub scenario: String,
    /// Android result.
    pub android: Status,
    /// iOS result.
    pub ios: Status,
    /// Person the case is assigned to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
}

impl From<&qb_core::TestCase> for CaseJson {
    fn from(case: &qb_core::TestCase) -> Self {
        CaseJson {
            id: case.id.clone(),
            group: case.group.clone(),
            module: case.module.clone(),
            scenario: case.scenario.clone(),
            android: case.android.into(),
            ios: case.ios.into(),
            assigned_to: case.assigned_to.clone(),
        }
    }
}

/// Result of executing a case on one platform.
#[derive(JsonSchema, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Pass,
    Fail,
    Skipped,
    Blocked,
    NotAvailable,
    NotStarted,
}

impl From<qb_core::TestStatus> for Status {
    fn from(value: qb_core::TestStatus) -> Self {
        match value {
            qb_core::TestStatus::Pass => Status::Pass,
            qb_core::TestStatus::Fail => Status::Fail,
            qb_core::TestStatus::Skipped => Status::Skipped,
            qb_core::TestStatus::Blocked => Status::Blocked,
            qb_core::TestStatus::NotAvailable => Status::NotAvailable,
            qb_core::TestStatus::NotStarted => Status::NotStarted,
        }
    }
}
