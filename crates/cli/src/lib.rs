// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! qbrs - command-line front end for the qb test-case board.
//!
//! This crate provides the `qb` CLI on top of [`qb_core`]: argument
//! parsing, per-project configuration, the saved login session and text or
//! JSON rendering of board state.
//!
//! # Main Components
//!
//! - [`Cli`] / [`Command`] - clap definitions for every subcommand
//! - [`Config`] - Project configuration stored in `.qaboard/config.toml`
//! - [`current`] - The logged-in session kept in `.qaboard/current/`
//! - [`Error`] - Error type for all CLI operations
//!
//! # Initialization
//!
//! Use [`init_work_dir`] to create a new `.qaboard/` directory, then open
//! the board:
//!
//! ```rust,ignore
//! use qbrs::{init_work_dir, find_work_dir, get_db_path, Config};
//! use qb_core::{Board, Database};
//!
//! let work_dir = init_work_dir(Path::new("."), None)?;
//!
//! let work_dir = find_work_dir()?;
//! let config = Config::load(&work_dir)?;
//! let board = Board::open(Database::open(&get_db_path(&work_dir, &config))?)?;
//! ```

mod cli;
pub mod colors;
mod commands;
mod display;
pub mod env;
pub mod help;
pub mod logging;
mod schema;
pub mod timings;

pub mod config;
pub mod current;
pub mod error;

pub use cli::{
    Cli, Command, EnvsCommand, FilterArgs, OutputFormat, SchemaCommand, UsersCommand,
    VersionCommand,
};
pub use config::{find_work_dir, get_db_path, init_work_dir, Config};
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;
use qb_core::CaseDraft;

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(command: Command) -> Result<()> {
    tracing::debug!(command = command.name(), "running command");
    match command {
        Command::List { filter, output } => commands::list::run(filter, output),
        Command::Show { id, output } => commands::show::run(&id, output),
        Command::Set {
            id,
            platform,
            status,
        } => commands::set::run(&id, &platform, &status),
        Command::Edit { id, field, value } => commands::edit::run(&id, &field, &value),
        Command::Claim { id } => commands::claim::run(&id),
        Command::New {
            scenario,
            group,
            module,
            expected,
        } => commands::new::run(CaseDraft {
            group,
            module,
            scenario,
            expected,
        }),
        Command::Delete { id } => commands::delete::run(&id),
        Command::Summary { platform, output } => commands::summary::run(platform, output),
        Command::Board { watch } => commands::screen::run(watch),
        Command::Online { watch } => commands::online::run(watch),
        Command::Export { path, filter } => commands::export::run(path, filter),
        Command::Import { path } => commands::import::run(&path),
        Command::Init { team, path } => commands::init::run(team, path),
        Command::Login {
            name,
            role,
            app_version,
            env,
            create,
        } => commands::login::run(&name, &role, app_version, env, create),
        Command::Logout => commands::login::logout(),
        Command::Whoami => commands::login::whoami(),
        Command::Version(cmd) => commands::version::run(cmd),
        Command::Users(cmd) => commands::registry::run_users(cmd),
        Command::Envs(cmd) => commands::registry::run_envs(cmd),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "qb", &mut std::io::stdout());
            Ok(())
        }
        Command::Schema(cmd) => commands::schema::run(cmd),
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
