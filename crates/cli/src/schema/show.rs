// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema types for `qb show` JSON output.

use schemars::JsonSchema;
use serde::Serialize;

use super::Status;

/// Full test case details including execution stamps.
#[derive(JsonSchema, Serialize)]
pub struct CaseDetails {
    /// Test case identifier.
    pub id: String,
    /// Group the case belongs to.
    pub group: String,
    /// Module the case belongs to.
    pub module: String,
    /// What is being tested.
    pub scenario: String,
    /// Expected result.
    pub expected: String,
    /// Per-platform results.
    pub android: PlatformResult,
    pub ios: PlatformResult,
    /// Date of the last recorded result (`YYYY-MM-DD`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub executed_on: Option<String>,
    /// Version the last result was recorded on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub executed_version: Option<String>,
    /// Environment the last result was recorded in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub executed_environment: Option<String>,
    /// Free-text observation, usually a bug tracker reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observation: Option<String>,
    /// Person the case is assigned to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
}

/// Result and executor on one platform.
#[derive(JsonSchema, Serialize)]
pub struct PlatformResult {
    pub status: Status,
    /// Who recorded the result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tester: Option<String>,
}

fn non_empty(value: &str) -> Option<String> {
    (!value.trim().is_empty()).then(|| value.to_string())
}

impl From<&qb_core::TestCase> for CaseDetails {
    fn from(case: &qb_core::TestCase) -> Self {
        let result = |platform| PlatformResult {
            status: case.status(platform).into(),
            tester: non_empty(case.tester(platform)),
        };
        CaseDetails {
            id: case.id.clone(),
            group: case.group.clone(),
            module: case.module.clone(),
            scenario: case.scenario.clone(),
            expected: case.expected.clone(),
            android: result(qb_core::Platform::Android),
            ios: result(qb_core::Platform::Ios),
            executed_on: non_empty(&case.executed_on),
            executed_version: non_empty(&case.executed_version),
            executed_environment: non_empty(&case.executed_environment),
            observation: non_empty(&case.observation),
            assigned_to: case.assigned_to.clone(),
        }
    }
}
