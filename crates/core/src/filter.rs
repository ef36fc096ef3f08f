// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Narrowing the case list shown on a board.

use std::collections::BTreeSet;

use crate::case::{TestCase, TestStatus};

/// Criteria for the visible case list. Empty criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseFilter {
    /// Matches when either platform has this status.
    pub status: Option<TestStatus>,
    /// Matches the case's module or group exactly.
    pub group: Option<String>,
    /// Case-insensitive substring of the scenario or id.
    pub query: Option<String>,
}

impl CaseFilter {
    pub fn new() -> Self {
        CaseFilter::default()
    }

    pub fn with_status(mut self, status: TestStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.group.is_none() && self.query.is_none()
    }

    pub fn matches(&self, case: &TestCase) -> bool {
        if let Some(status) = self.status {
            if case.android != status && case.ios != status {
                return false;
            }
        }
        if let Some(group) = &self.group {
            if case.module != *group && case.group != *group {
                return false;
            }
        }
        if let Some(query) = &self.query {
            let query = query.to_lowercase();
            if !case.scenario.to_lowercase().contains(&query)
                && !case.id.to_lowercase().contains(&query)
            {
                return false;
            }
        }
        true
    }

    /// Matching cases, in board order.
    pub fn apply<'a>(&self, cases: &'a [TestCase]) -> Vec<&'a TestCase> {
        cases.iter().filter(|c| self.matches(c)).collect()
    }
}

/// Distinct group names, sorted.
pub fn groups(cases: &[TestCase]) -> Vec<String> {
    cases
        .iter()
        .map(|c| c.group.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Next free sequential id: `CT-` followed by the case count plus one,
/// zero-padded to three digits, bumped past any id already taken.
pub fn next_id(cases: &[TestCase]) -> String {
    let mut n = cases.len() + 1;
    loop {
        let id = format!("CT-{n:03}");
        if !cases.iter().any(|c| c.id == id) {
            return id;
        }
        n += 1;
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
