// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use qb_core::{Board, Clock, Session};

use crate::cli::{FilterArgs, OutputFormat};
use crate::display::format_case_line;
use crate::error::Result;
use crate::schema::list::ListOutputJson;
use crate::schema::CaseJson;

use super::open_session;

pub fn run(filter: FilterArgs, format: OutputFormat) -> Result<()> {
    let (board, session, _) = open_session()?;
    println!("{}", render(&board, &session, &filter, format)?);
    Ok(())
}

/// Renders the filtered case list of the session's version.
pub(crate) fn render<C: Clock>(
    board: &Board<C>,
    session: &Session,
    filter: &FilterArgs,
    format: OutputFormat,
) -> Result<String> {
    let cases = board.cases(session, &filter.to_filter()?);

    match format {
        OutputFormat::Text => {
            if cases.is_empty() {
                return Ok("No test cases found.".to_string());
            }
            Ok(cases
                .iter()
                .map(|c| format_case_line(c))
                .collect::<Vec<_>>()
                .join("\n"))
        }
        OutputFormat::Json => {
            let applied = filter.describe();
            let output = ListOutputJson {
                version: session.app_version.clone(),
                cases: cases.into_iter().map(CaseJson::from).collect(),
                filters_applied: (!applied.is_empty()).then_some(applied),
            };
            Ok(serde_json::to_string_pretty(&output)?)
        }
    }
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
