// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The `board` command: a big-screen dashboard for the session's version.

use qb_core::{Board, Clock, Session};

use crate::display::format_big_screen;
use crate::error::Result;

use super::{open_session, watch};

pub fn run(watch_mode: bool) -> Result<()> {
    let (board, session, config) = open_session()?;
    if !watch_mode {
        println!("{}", render(&board, &session));
        return Ok(());
    }

    // Reload each tick to pick up results recorded by other sessions.
    watch(config.heartbeat_interval(), || {
        let (board, session, _) = open_session()?;
        Ok(render(&board, &session))
    })
}

pub(crate) fn render<C: Clock>(board: &Board<C>, session: &Session) -> String {
    format_big_screen(
        session,
        board.current_version(session),
        &board.kpi(session),
        board.previous_rate(),
        board.online().len(),
    )
}

#[cfg(test)]
#[path = "screen_tests.rs"]
mod tests;
