// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[test]
fn fg256_escape_sequence() {
    assert_eq!(fg256(74), "\x1b[38;5;74m");
    assert_eq!(fg256(250), "\x1b[38;5;250m");
}

#[parameterized(
    two_spaces = { "qb init  Initialize", Some(7) },
    many_spaces = { "qb list -s fail     List failures", Some(15) },
    single_spaces = { "qb list all", None },
    trailing = { "qb init   ", None },
)]
fn description_start(line: &str, expected: Option<usize>) {
    assert_eq!(find_description_start(line), expected);
}

#[test]
fn examples_keep_text_when_uncolored() {
    if should_colorize() {
        return;
    }
    let text = "Examples:\n  qb list  List cases";
    assert_eq!(examples(text), text);
}
