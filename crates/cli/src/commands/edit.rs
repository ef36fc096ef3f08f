// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use qb_core::{Board, CaseUpdate, Clock, Session};

use crate::error::Result;

use super::open_session;

pub fn run(id: &str, field: &str, value: &str) -> Result<()> {
    let (mut board, session, _) = open_session()?;
    run_impl(&mut board, &session, id, field, value)
}

/// Internal implementation that accepts the board for testing.
pub(crate) fn run_impl<C: Clock>(
    board: &mut Board<C>,
    session: &Session,
    id: &str,
    field: &str,
    value: &str,
) -> Result<()> {
    let update = CaseUpdate::parse(field, value)?;
    let case = board.update_case(session, id, update)?;
    println!("Updated {} of {}", field, case.id);
    Ok(())
}

#[cfg(test)]
#[path = "edit_tests.rs"]
mod tests;
