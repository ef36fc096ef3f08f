// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use qb_core::{Board, Clock, Environment, Session};

use crate::cli::{OutputFormat, VersionCommand};
use crate::current;
use crate::display::format_version_line;
use crate::error::Result;
use crate::schema::versions::{VersionJson, VersionListJson};

use super::{open_board, open_session};

pub fn run(command: VersionCommand) -> Result<()> {
    match command {
        VersionCommand::List { output } => {
            let (board, _, work_dir) = open_board()?;
            let session = current::load(&work_dir)?;
            println!("{}", render_list(&board, session.as_ref(), output)?);
            Ok(())
        }
        VersionCommand::New { name, env } => {
            let (mut board, session, _) = open_session()?;
            new_impl(&mut board, &session, &name, env.as_deref())
        }
        VersionCommand::Delete { name } => {
            let (mut board, session, _) = open_session()?;
            delete_impl(&mut board, &session, &name)
        }
    }
}

/// Lists every version, marking the session's own.
pub(crate) fn render_list<C: Clock>(
    board: &Board<C>,
    session: Option<&Session>,
    format: OutputFormat,
) -> Result<String> {
    let current = session.map(|s| s.app_version.as_str());
    match format {
        OutputFormat::Text => Ok(board
            .versions()
            .iter()
            .map(|v| format_version_line(v, Some(v.name.as_str()) == current))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => {
            let output = VersionListJson {
                current: current.map(String::from),
                versions: board.versions().iter().map(VersionJson::from).collect(),
            };
            Ok(serde_json::to_string_pretty(&output)?)
        }
    }
}

pub(crate) fn new_impl<C: Clock>(
    board: &mut Board<C>,
    session: &Session,
    name: &str,
    env: Option<&str>,
) -> Result<()> {
    let environment = env.map(Environment::from).unwrap_or_default();
    let version = board.create_version(session, name, environment)?;
    println!(
        "Created version {} [{}] with {} cases",
        version.name,
        version.environment,
        version.test_cases.len()
    );
    Ok(())
}

pub(crate) fn delete_impl<C: Clock>(
    board: &mut Board<C>,
    session: &Session,
    name: &str,
) -> Result<()> {
    board.delete_version(session, name)?;
    println!("Deleted version {}", name);
    Ok(())
}

#[cfg(test)]
#[path = "version_tests.rs"]
mod tests;
