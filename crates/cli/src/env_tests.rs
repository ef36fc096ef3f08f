// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn generated_constants_match_names() {
    assert_eq!(vars::QB_LOG, "QB_LOG");
    assert_eq!(vars::QB_TIMINGS, "QB_TIMINGS");
    assert_eq!(vars::NO_COLOR, "NO_COLOR");
    assert_eq!(vars::COLOR, "COLOR");
}

#[test]
fn default_filter_is_warn() {
    assert_eq!(DEFAULT_LOG_FILTER, "warn");
}
