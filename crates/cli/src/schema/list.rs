// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema types for `qb list` JSON output.

use schemars::JsonSchema;
use serde::Serialize;

use super::CaseJson;

/// JSON output structure for the list command.
#[derive(JsonSchema, Serialize)]
pub struct ListOutputJson {
    /// Version the cases belong to.
    pub version: String,
    /// Cases matching the filters, in board order.
    pub cases: Vec<CaseJson>,
    /// Filters that were applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters_applied: Option<Vec<String>>,
}
