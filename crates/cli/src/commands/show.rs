// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use qb_core::{Board, Clock, Session};

use crate::cli::OutputFormat;
use crate::display::format_case_details;
use crate::error::Result;
use crate::schema::show::CaseDetails;

use super::open_session;

pub fn run(id: &str, format: OutputFormat) -> Result<()> {
    let (board, session, _) = open_session()?;
    println!("{}", render(&board, &session, id, format)?);
    Ok(())
}

pub(crate) fn render<C: Clock>(
    board: &Board<C>,
    session: &Session,
    id: &str,
    format: OutputFormat,
) -> Result<String> {
    let case = board.case(session, id)?;
    match format {
        OutputFormat::Text => Ok(format_case_details(case)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&CaseDetails::from(case))?),
    }
}

#[cfg(test)]
#[path = "show_tests.rs"]
mod tests;
