// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod claim;
pub mod delete;
pub mod edit;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod login;
pub mod new;
pub mod online;
pub mod registry;
pub mod schema;
pub mod screen;
pub mod set;
pub mod show;
pub mod summary;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;
pub mod version;

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use crossterm::{cursor, terminal, ExecutableCommand};
use qb_core::{Board, Database, Session};

use crate::config::{find_work_dir, get_db_path, Config};
use crate::current;
use crate::error::{Error, Result};

/// Helper to open the database from the current context.
pub fn open_db() -> Result<(Database, Config, PathBuf)> {
    let work_dir = find_work_dir()?;
    let config = Config::load(&work_dir)?;
    let db_path = get_db_path(&work_dir, &config);
    let db = crate::time_phase!("db::open", { Database::open(&db_path)? });
    Ok((db, config, work_dir))
}

/// Loads the board with the configured critical modules and presence window.
pub fn open_board() -> Result<(Board, Config, PathBuf)> {
    let (db, config, work_dir) = open_db()?;
    let board = crate::time_phase!("board::load", { Board::open(db)? })
        .with_critical_modules(config.critical_modules.clone())
        .with_stale_after(config.stale_after());
    Ok((board, config, work_dir))
}

/// Loads the board and the logged-in session, refreshing its presence.
/// Fails if the session's version has since been deleted.
pub fn open_session() -> Result<(Board, Session, Config)> {
    let (mut board, config, work_dir) = open_board()?;
    let session = current::load(&work_dir)?.ok_or(Error::NotLoggedIn)?;
    if board.current_version(&session).is_none() {
        return Err(Error::SessionVersionGone(session.app_version));
    }
    board.heartbeat(&session)?;
    Ok((board, session, config))
}

/// Redraws `render`'s output every `interval` until the process is
/// interrupted.
pub fn watch<F>(interval: Duration, mut render: F) -> Result<()>
where
    F: FnMut() -> Result<String>,
{
    let mut stdout = io::stdout();
    loop {
        let screen = render()?;
        stdout.execute(terminal::Clear(terminal::ClearType::All))?;
        stdout.execute(cursor::MoveTo(0, 0))?;
        writeln!(stdout, "{}", screen)?;
        stdout.flush()?;
        std::thread::sleep(interval);
    }
}
