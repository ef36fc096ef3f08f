// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Saved users and environments.

use qb_core::{Board, Clock, Session};

use crate::cli::{EnvsCommand, UsersCommand};
use crate::error::Result;

use super::{open_board, open_session};

pub fn run_users(command: UsersCommand) -> Result<()> {
    match command {
        UsersCommand::List => {
            let (board, _, _) = open_board()?;
            println!("{}", render_names(board.users()));
            Ok(())
        }
        UsersCommand::Add { name } => {
            let (mut board, session, _) = open_session()?;
            add_user(&mut board, &session, &name)
        }
        UsersCommand::Remove { name } => {
            let (mut board, session, _) = open_session()?;
            remove_user(&mut board, &session, &name)
        }
    }
}

pub fn run_envs(command: EnvsCommand) -> Result<()> {
    match command {
        EnvsCommand::List => {
            let (board, _, _) = open_board()?;
            println!("{}", render_names(board.environments()));
            Ok(())
        }
        EnvsCommand::Add { name } => {
            let (mut board, session, _) = open_session()?;
            add_environment(&mut board, &session, &name)
        }
        EnvsCommand::Remove { name } => {
            let (mut board, session, _) = open_session()?;
            remove_environment(&mut board, &session, &name)
        }
    }
}

pub(crate) fn render_names(names: &[String]) -> String {
    if names.is_empty() {
        return "(none)".to_string();
    }
    names.join("\n")
}

pub(crate) fn add_user<C: Clock>(board: &mut Board<C>, session: &Session, name: &str) -> Result<()> {
    if board.add_user(session, name)? {
        println!("Saved user {}", name.trim());
    } else {
        println!("User {} is already saved", name.trim());
    }
    Ok(())
}

pub(crate) fn remove_user<C: Clock>(
    board: &mut Board<C>,
    session: &Session,
    name: &str,
) -> Result<()> {
    if board.remove_user(session, name)? {
        println!("Removed user {}", name);
    } else {
        println!("User {} was not saved", name);
    }
    Ok(())
}

pub(crate) fn add_environment<C: Clock>(
    board: &mut Board<C>,
    session: &Session,
    name: &str,
) -> Result<()> {
    if board.add_environment(session, name)? {
        println!("Saved environment {}", name.trim());
    } else {
        println!("Environment {} is already saved", name.trim());
    }
    Ok(())
}

pub(crate) fn remove_environment<C: Clock>(
    board: &mut Board<C>,
    session: &Session,
    name: &str,
) -> Result<()> {
    if board.remove_environment(session, name)? {
        println!("Removed environment {}", name);
    } else {
        println!("Environment {} was not saved", name);
    }
    Ok(())
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
