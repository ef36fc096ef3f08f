// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{self, Read};

use qb_core::csv::IMPORT_HEADER;
use qb_core::{Board, Clock, ImportReport, Session};

use crate::error::Result;

use super::open_session;

pub fn run(path: &str) -> Result<()> {
    let text = read_input(path)?;
    let (mut board, session, _) = open_session()?;
    run_impl(&mut board, &session, &text)
}

/// Reads a file, or stdin for `-`.
fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }
    Ok(std::fs::read_to_string(path)?)
}

/// Internal implementation that accepts the board for testing.
pub(crate) fn run_impl<C: Clock>(board: &mut Board<C>, session: &Session, text: &str) -> Result<()> {
    let report = board.import_cases(session, text)?;
    println!("{}", format_report(&report));
    Ok(())
}

fn format_report(report: &ImportReport) -> String {
    if report.added.is_empty() && report.duplicates.is_empty() {
        return format!("No test cases found in input\n  hint: expected columns {IMPORT_HEADER}");
    }
    let mut line = format!("Imported {} cases", report.added.len());
    if !report.duplicates.is_empty() {
        line.push_str(&format!(
            " (skipped {} existing: {})",
            report.duplicates.len(),
            report.duplicates.join(", ")
        ));
    }
    line
}

#[cfg(test)]
#[path = "import_tests.rs"]
mod tests;
