// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Session commands: login, logout and whoami.

use std::path::Path;

use qb_core::{Board, Clock, Environment, LoginRequest, Role, Session};

use crate::current;
use crate::display::format_session_line;
use crate::error::{Error, Result};

use super::open_board;

pub fn run(
    name: &str,
    role: &str,
    app_version: Option<String>,
    env: Option<String>,
    create: bool,
) -> Result<()> {
    let (mut board, config, work_dir) = open_board()?;
    let request = build_request(name, role, app_version, env, create)?.team(config.team);
    run_impl(&mut board, &work_dir, request)
}

/// Turns the command line into a login request.
pub(crate) fn build_request(
    name: &str,
    role: &str,
    app_version: Option<String>,
    env: Option<String>,
    create: bool,
) -> Result<LoginRequest> {
    let role: Role = role.parse()?;
    let mut request = LoginRequest::new(name, role).create(create);
    if let Some(version) = app_version {
        request = request.version(version);
    }
    if let Some(env) = env {
        request = request.environment(Environment::from(env.as_str()));
    }
    Ok(request)
}

/// Internal implementation that accepts the board for testing.
pub(crate) fn run_impl<C: Clock>(
    board: &mut Board<C>,
    work_dir: &Path,
    request: LoginRequest,
) -> Result<()> {
    if let Some(previous) = current::load(work_dir)? {
        if previous.name != request.name.trim() {
            board.logout(&previous)?;
        }
    }

    let session = board.login(request)?;
    current::save(work_dir, &session)?;
    println!(
        "Logged in as {} ({}) on {} [{}]",
        session.name, session.role, session.app_version, session.environment
    );
    Ok(())
}

pub fn logout() -> Result<()> {
    let (mut board, _, work_dir) = open_board()?;
    logout_impl(&mut board, &work_dir)
}

pub(crate) fn logout_impl<C: Clock>(board: &mut Board<C>, work_dir: &Path) -> Result<()> {
    let session = current::load(work_dir)?.ok_or(Error::NotLoggedIn)?;
    board.logout(&session)?;
    current::clear(work_dir)?;
    println!("Logged out {}", session.name);
    Ok(())
}

pub fn whoami() -> Result<()> {
    let (board, _, work_dir) = open_board()?;
    let session = current::load(&work_dir)?.ok_or(Error::NotLoggedIn)?;
    println!("{}", describe(&board, &session));
    Ok(())
}

pub(crate) fn describe<C: Clock>(board: &Board<C>, session: &Session) -> String {
    let mut text = format!("{}\nTeam: {}", format_session_line(session), session.team);
    if board.current_version(session).is_none() {
        text.push_str(&format!(
            "\nwarning: version {} no longer exists, log in again",
            session.app_version
        ));
    }
    text
}

#[cfg(test)]
#[path = "login_tests.rs"]
mod tests;
