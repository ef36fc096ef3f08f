// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Derived dashboard numbers.
//!
//! Everything here is a pure function of a test-case slice. Nothing is
//! cached; callers recompute on every render.

use serde::Serialize;

use crate::case::{Platform, TestCase, TestStatus};

/// Module markers whose failures are reported as critical.
pub const DEFAULT_CRITICAL_MODULES: [&str; 3] = ["1. Login", "3. Carrinho", "4. Checkout"];

/// Per-record counts for one platform or the combined view.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub blocked: usize,
    pub not_started: usize,
    pub skipped: usize,
    pub not_available: usize,
    /// `passed / total * 100`, zero for an empty set.
    pub success_rate: f64,
    pub critical_failures: usize,
}

/// Whole-board KPI counted per platform slot (two per case).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Kpi {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub blocked: usize,
    /// Pass percentage rounded to the nearest integer.
    pub rate: u32,
}

/// Status a case contributes to a summary.
///
/// With a platform, that platform's status. Without one, the first of Fail,
/// Blocked, NotStarted found on either platform; anything else counts as
/// Pass, so Skipped and NotAvailable only have buckets per platform.
pub fn resolve_status(case: &TestCase, platform: Option<Platform>) -> TestStatus {
    match platform {
        Some(p) => case.status(p),
        None => [TestStatus::Fail, TestStatus::Blocked, TestStatus::NotStarted]
            .into_iter()
            .find(|s| case.android == *s || case.ios == *s)
            .unwrap_or(TestStatus::Pass),
    }
}

/// Summarizes cases using the default critical markers.
pub fn summarize(cases: &[TestCase], platform: Option<Platform>) -> Summary {
    summarize_with(cases, platform, &DEFAULT_CRITICAL_MODULES)
}

/// Summarizes cases, treating a module as critical when it contains any of
/// `markers`.
pub fn summarize_with<S: AsRef<str>>(
    cases: &[TestCase],
    platform: Option<Platform>,
    markers: &[S],
) -> Summary {
    let mut summary = Summary {
        total: cases.len(),
        ..Summary::default()
    };

    for case in cases {
        match resolve_status(case, platform) {
            TestStatus::Pass => summary.passed += 1,
            TestStatus::Fail => summary.failed += 1,
            TestStatus::Blocked => summary.blocked += 1,
            TestStatus::NotStarted => summary.not_started += 1,
            TestStatus::Skipped => summary.skipped += 1,
            TestStatus::NotAvailable => summary.not_available += 1,
        }
        if case.has_failure() && is_critical(&case.module, markers) {
            summary.critical_failures += 1;
        }
    }

    summary.success_rate = percent(summary.passed, summary.total);
    summary
}

/// Substring match against the critical markers.
pub fn is_critical<S: AsRef<str>>(module: &str, markers: &[S]) -> bool {
    markers.iter().any(|m| module.contains(m.as_ref()))
}

/// Counts every platform slot of every case.
pub fn kpi(cases: &[TestCase]) -> Kpi {
    let mut kpi = Kpi {
        total: cases.len() * 2,
        ..Kpi::default()
    };
    for status in cases.iter().flat_map(|c| [c.android, c.ios]) {
        match status {
            TestStatus::Pass => kpi.passed += 1,
            TestStatus::Fail => kpi.failed += 1,
            TestStatus::Blocked => kpi.blocked += 1,
            _ => {}
        }
    }
    kpi.rate = quality_rate(cases);
    kpi
}

/// Rounded pass percentage over platform slots.
pub fn quality_rate(cases: &[TestCase]) -> u32 {
    let passed = cases
        .iter()
        .flat_map(|c| [c.android, c.ios])
        .filter(|s| *s == TestStatus::Pass)
        .count();
    percent(passed, cases.len() * 2).round() as u32
}

/// Rate change against an earlier version, in percentage points.
pub fn trend(current: u32, previous: Option<u32>) -> Option<i64> {
    previous.map(|p| i64::from(current) - i64::from(p))
}

fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

#[cfg(test)]
#[path = "metrics_tests.rs"]
mod tests;
