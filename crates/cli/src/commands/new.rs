// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use qb_core::{Board, CaseDraft, Clock, Session};

use crate::error::Result;

use super::open_session;

pub fn run(draft: CaseDraft) -> Result<()> {
    let (mut board, session, _) = open_session()?;
    run_impl(&mut board, &session, draft)
}

/// Internal implementation that accepts the board for testing.
pub(crate) fn run_impl<C: Clock>(
    board: &mut Board<C>,
    session: &Session,
    draft: CaseDraft,
) -> Result<()> {
    let case = board.add_case(session, draft)?;
    println!("Created [{}] {}: {}", case.module, case.id, case.scenario);
    Ok(())
}

#[cfg(test)]
#[path = "new_tests.rs"]
mod tests;
