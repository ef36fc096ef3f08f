// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema types for `qb summary` JSON output.

use schemars::JsonSchema;
use serde::Serialize;

use qb_core::{Kpi, Summary};

/// JSON output structure for the summary command.
#[derive(JsonSchema, Serialize)]
pub struct SummaryOutputJson {
    /// Version the metrics were computed for.
    pub version: String,
    /// Platform the summary was restricted to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    /// Per-case summary.
    pub summary: Summary,
    /// Per-slot quality figures.
    pub kpi: Kpi,
    /// Quality rate of the previous version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_rate: Option<u32>,
    /// Percentage points gained since the previous version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<i64>,
}
