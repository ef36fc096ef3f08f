// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use qb_core::{Board, Clock, Session};

use crate::error::Result;

use super::open_session;

pub fn run(id: &str) -> Result<()> {
    let (mut board, session, _) = open_session()?;
    run_impl(&mut board, &session, id)
}

/// Internal implementation that accepts the board for testing.
pub(crate) fn run_impl<C: Clock>(board: &mut Board<C>, session: &Session, id: &str) -> Result<()> {
    let removed = board.delete_case(session, id)?;
    println!("Deleted {}: {}", removed.id, removed.scenario);
    Ok(())
}

#[cfg(test)]
#[path = "delete_tests.rs"]
mod tests;
