// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema types for `qb version list` JSON output.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::Serialize;

/// JSON output structure for the version list command.
#[derive(JsonSchema, Serialize)]
pub struct VersionListJson {
    /// Version of the logged-in session.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<String>,
    pub versions: Vec<VersionJson>,
}

/// One version on the board.
#[derive(JsonSchema, Serialize)]
pub struct VersionJson {
    pub name: String,
    /// `active` or `archived`.
    pub status: String,
    /// Environment tag (QA, Beta or custom).
    pub environment: String,
    pub created_at: DateTime<Utc>,
    /// Number of test cases.
    pub cases: usize,
    /// Passed slots over all slots, as a whole percentage.
    pub quality_rate: u32,
}

impl From<&qb_core::Version> for VersionJson {
    fn from(version: &qb_core::Version) -> Self {
        let status = match version.status {
            qb_core::VersionStatus::Active => "active",
            qb_core::VersionStatus::Archived => "archived",
        };
        VersionJson {
            name: version.name.clone(),
            status: status.to_string(),
            environment: version.environment.to_string(),
            created_at: version.created_at,
            cases: version.test_cases.len(),
            quality_rate: qb_core::metrics::quality_rate(&version.test_cases),
        }
    }
}
