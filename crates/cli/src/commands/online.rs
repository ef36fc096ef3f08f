// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use qb_core::{Board, Clock};

use crate::display::format_session_line;
use crate::error::Result;

use super::{open_session, watch};

pub fn run(watch_mode: bool) -> Result<()> {
    let (board, _, config) = open_session()?;
    if !watch_mode {
        println!("{}", render(&board));
        return Ok(());
    }

    watch(config.heartbeat_interval(), || {
        let (board, _, _) = open_session()?;
        Ok(render(&board))
    })
}

pub(crate) fn render<C: Clock>(board: &Board<C>) -> String {
    let online = board.online();
    let mut lines = vec![format!("Online ({})", online.len())];
    lines.extend(online.into_iter().map(format_session_line));
    lines.join("\n")
}

#[cfg(test)]
#[path = "online_tests.rs"]
mod tests;
