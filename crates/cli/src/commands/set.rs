// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use qb_core::{Board, CaseUpdate, Clock, Platform, Session, TestStatus};

use crate::error::Result;

use super::open_session;

pub fn run(id: &str, platform: &str, status: &str) -> Result<()> {
    let (mut board, session, _) = open_session()?;
    run_impl(&mut board, &session, id, platform, status)
}

/// Internal implementation that accepts the board for testing.
pub(crate) fn run_impl<C: Clock>(
    board: &mut Board<C>,
    session: &Session,
    id: &str,
    platform: &str,
    status: &str,
) -> Result<()> {
    let platform: Platform = platform.parse()?;
    let status: TestStatus = status.parse()?;
    let case = board.update_case(session, id, CaseUpdate::Status(platform, status))?;

    println!("{} {}: {}", case.id, platform.label(), status.label());
    Ok(())
}

#[cfg(test)]
#[path = "set_tests.rs"]
mod tests;
