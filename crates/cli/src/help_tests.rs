// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn uncolored() -> bool {
    !colors::should_colorize()
}

#[test]
fn commands_lists_every_section() {
    if !uncolored() {
        return;
    }
    let text = commands();
    assert!(text.starts_with("Test Cases:"));
    assert!(text.contains("\n\nReporting:"));
    assert!(text.contains("\n\nSetup:"));
    assert!(text.contains("  set         Record a result for a platform"));
}

#[test]
fn every_command_is_listed_once() {
    let all: Vec<&str> = CASE_COMMANDS
        .iter()
        .chain(REPORT_COMMANDS)
        .chain(SETUP_COMMANDS)
        .map(|(name, _)| *name)
        .collect();
    let mut sorted = all.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), all.len());
}

#[test]
fn template_has_placeholders() {
    let t = template();
    assert!(t.contains("{usage}"));
    assert!(t.contains("{before-help}"));
    assert!(t.contains("{after-help}"));
}

#[test]
fn quickstart_mentions_login() {
    assert!(quickstart().contains("login"));
}
