// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Clap styles matching the help colors.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let fg = |code: u8| Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))));

    Styles::styled()
        .header(fg(colors::codes::HEADER))
        .usage(fg(colors::codes::HEADER))
        .literal(fg(colors::codes::LITERAL))
        .placeholder(fg(colors::codes::CONTEXT))
        .valid(fg(colors::codes::CONTEXT))
}

/// Main help template with colorized Options header.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        colors::header("Options:")
    )
}

const CASE_COMMANDS: &[(&str, &str)] = &[
    ("list", "List test cases of the current version"),
    ("show", "Show a test case"),
    ("set", "Record a result for a platform"),
    ("edit", "Edit a test case field"),
    ("claim", "Take or release a test case"),
    ("new", "Add a test case"),
    ("delete", "Delete a test case"),
];

const REPORT_COMMANDS: &[(&str, &str)] = &[
    ("summary", "Show execution metrics"),
    ("board", "Show the big-screen dashboard"),
    ("online", "Show who is online"),
    ("export", "Export test cases to CSV"),
    ("import", "Import test cases from CSV"),
];

const SETUP_COMMANDS: &[(&str, &str)] = &[
    ("init", "Initialize a board"),
    ("login", "Log into a version"),
    ("logout", "End the current session"),
    ("whoami", "Show the current session"),
    ("version", "List, create or delete versions"),
    ("users", "Manage saved users"),
    ("envs", "Manage saved environments"),
    ("schema", "Output JSON Schema for commands"),
    ("completion", "Generate shell completions"),
];

/// Commands list shown before options in main help.
pub fn commands() -> String {
    [
        ("Test Cases:", CASE_COMMANDS),
        ("Reporting:", REPORT_COMMANDS),
        ("Setup:", SETUP_COMMANDS),
    ]
    .iter()
    .map(|(title, commands)| section(title, commands))
    .collect::<Vec<_>>()
    .join("\n\n")
}

fn section(title: &str, commands: &[(&str, &str)]) -> String {
    let mut out = colors::header(title);
    for (name, about) in commands {
        out.push_str(&format!("\n  {}{}", colors::literal(&format!("{name:<12}")), about));
    }
    out
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  qb init                        Initialize a board
  qb login Ana --role lead       Log in as QA Lead
  qb list                        List test cases
  qb set CT-001 android pass     Record a result
  qb summary                     Show metrics",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
