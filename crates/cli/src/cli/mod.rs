// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

pub use args::FilterArgs;

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "qb")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(disable_version_flag = true)]
#[command(about = "A shared QA test-case board for Android and iOS releases")]
#[command(
    long_about = "A shared QA test-case board for Android and iOS releases.\n\n\
    Track manual test results per version, delegate cases to testers and follow quality on a big screen."
)]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
#[allow(clippy::manual_non_exhaustive)]
pub struct Cli {
    /// Run as if qb was started in <path>
    #[arg(short = 'C', long = "directory", global = true, value_name = "path")]
    pub directory: Option<String>,

    /// Print version
    #[arg(short = 'v', short_alias = 'V', long = "version", action = clap::ArgAction::Version)]
    version: (),

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    // ─────────────────────────────────────────────────────────────────────────
    // Test cases
    // ─────────────────────────────────────────────────────────────────────────
    /// List test cases of the current version
    #[command(after_help = colors::examples("\
Examples:
  qb list                         List every case
  qb list -s fail                 Cases failing on either platform
  qb list -g \"1. Login\"           Cases of one module or group
  qb list -q checkout             Search scenarios and ids
  qb list -o json                 Output in JSON format"))]
    List {
        #[command(flatten)]
        filter: FilterArgs,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show a test case
    #[command(arg_required_else_help = true)]
    Show {
        /// Test case ID
        id: String,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Record a result for a platform
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  qb set CT-001 android pass      Android passed
  qb set CT-001 ios fail          iOS failed
  qb set CT-001 ios blocked       iOS blocked
  qb set CT-001 ios not_started   Reset the iOS result

Statuses: pass, fail, blocked, skipped, n/a, not_started")
    )]
    Set {
        /// Test case ID
        id: String,
        /// Platform (android, ios)
        platform: String,
        /// Result status
        status: String,
    },

    /// Edit a test case field
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  qb edit CT-001 obs \"JIRA-123\"          Set the observation
  qb edit CT-001 scenario \"New text\"     Rewrite the scenario
  qb edit CT-001 assignee Bia           Delegate the case
  qb edit CT-001 assignee none          Remove the assignee
  qb edit CT-001 tester-ios Bia         Set the iOS executor

Fields: group, module, scenario, expected, obs, assignee, tester-android, tester-ios, android, ios")
    )]
    Edit {
        /// Test case ID
        id: String,
        /// Field to change
        field: String,
        /// New value
        value: String,
    },

    /// Take an unowned test case or release your own
    #[command(arg_required_else_help = true)]
    Claim {
        /// Test case ID
        id: String,
    },

    /// Add a test case
    #[command(after_help = colors::examples("\
Examples:
  qb new \"Login with SSO\" -g Funcional -m \"1. Login\" -e \"Home is shown\""))]
    New {
        /// Scenario description
        #[arg(value_parser = non_empty_string)]
        scenario: String,

        /// Group name
        #[arg(long, short, value_parser = non_empty_string)]
        group: String,

        /// Module name
        #[arg(long, short, value_parser = non_empty_string)]
        module: String,

        /// Expected result
        #[arg(long, short, value_parser = non_empty_string)]
        expected: String,
    },

    /// Delete a test case
    #[command(arg_required_else_help = true)]
    Delete {
        /// Test case ID
        id: String,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Reporting
    // ─────────────────────────────────────────────────────────────────────────
    /// Show execution metrics for the current version
    Summary {
        /// Only count one platform (android, ios)
        #[arg(long, short)]
        platform: Option<String>,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show the big-screen dashboard
    Board {
        /// Redraw until interrupted
        #[arg(long, short)]
        watch: bool,
    },

    /// Show who is online
    Online {
        /// Redraw until interrupted
        #[arg(long, short)]
        watch: bool,
    },

    /// Export test cases to CSV
    #[command(after_help = colors::examples("\
Examples:
  qb export                       Write qa-export-<version>-<date>.csv
  qb export report.csv            Write to a chosen file
  qb export - -s fail             Print failing cases to stdout"))]
    Export {
        /// Output file path, or - for stdout
        path: Option<String>,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Import test cases from CSV
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  qb import cases.csv             Import from file
  qb import -                     Import from stdin

Columns: ID,Grupo,Modulo,Cenario,Esperado,Android,iOS,Obs")
    )]
    Import {
        /// Input file path, or - for stdin
        path: String,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Setup
    // ─────────────────────────────────────────────────────────────────────────
    /// Initialize a board in the current directory
    Init {
        /// Team name stamped on sessions
        #[arg(long)]
        team: Option<String>,

        /// Directory to initialize (defaults to the current directory)
        path: Option<String>,
    },

    /// Log into a version
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  qb login Ana                               Log into the first version as Tester
  qb login Ana --role lead --app-version v2.6.0 --new
                                             Start a new version as QA Lead
  qb login Bia --app-version v2.5.0          Pick a version
  qb login Ana --role lead --env Beta        Move the version to Beta
  qb login TV --role viewer                  Read-only session")
    )]
    Login {
        /// Your name
        name: String,

        /// Role (lead, tester, viewer)
        #[arg(long, short, default_value = "tester")]
        role: String,

        /// Version to work on (defaults to the first version)
        #[arg(long = "app-version", short = 'a')]
        app_version: Option<String>,

        /// Environment (QA, Beta or a saved custom environment)
        #[arg(long, short)]
        env: Option<String>,

        /// Create the version from the default template
        #[arg(long = "new", requires = "app_version")]
        create: bool,
    },

    /// End the current session
    Logout,

    /// Show the current session
    Whoami,

    /// List, create or delete versions
    #[command(subcommand)]
    Version(VersionCommand),

    /// Manage saved users
    #[command(subcommand)]
    Users(UsersCommand),

    /// Manage saved environments
    #[command(subcommand)]
    Envs(EnvsCommand),

    /// Generate shell completions
    #[command(arg_required_else_help = true)]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Output JSON Schema for commands with JSON output
    ///
    /// Use these schemas to validate JSON output or generate type definitions.
    #[command(
        subcommand,
        after_help = colors::examples("\
Examples:
  qb schema list       Output schema for 'qb list -o json'
  qb schema summary    Output schema for 'qb summary -o json'

Available schemas: list, show, summary, versions")
    )]
    Schema(SchemaCommand),
}

impl Command {
    /// Subcommand name as typed on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Command::List { .. } => "list",
            Command::Show { .. } => "show",
            Command::Set { .. } => "set",
            Command::Edit { .. } => "edit",
            Command::Claim { .. } => "claim",
            Command::New { .. } => "new",
            Command::Delete { .. } => "delete",
            Command::Summary { .. } => "summary",
            Command::Board { .. } => "board",
            Command::Online { .. } => "online",
            Command::Export { .. } => "export",
            Command::Import { .. } => "import",
            Command::Init { .. } => "init",
            Command::Login { .. } => "login",
            Command::Logout => "logout",
            Command::Whoami => "whoami",
            Command::Version(_) => "version",
            Command::Users(_) => "users",
            Command::Envs(_) => "envs",
            Command::Completion { .. } => "completion",
            Command::Schema(_) => "schema",
        }
    }
}

/// Version management commands.
#[derive(Subcommand)]
pub enum VersionCommand {
    /// List versions on the board
    List {
        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },
    /// Create a version from the default template
    #[command(arg_required_else_help = true)]
    New {
        /// Version name
        #[arg(value_parser = non_empty_string)]
        name: String,
        /// Environment for the new version
        #[arg(long, short)]
        env: Option<String>,
    },
    /// Delete a version and its results
    #[command(arg_required_else_help = true)]
    Delete {
        /// Version name
        name: String,
    },
}

/// Saved user commands.
#[derive(Subcommand)]
pub enum UsersCommand {
    /// List saved users
    List,
    /// Save a user
    #[command(arg_required_else_help = true)]
    Add { name: String },
    /// Forget a user
    #[command(arg_required_else_help = true)]
    Remove { name: String },
}

/// Saved environment commands.
#[derive(Subcommand)]
pub enum EnvsCommand {
    /// List saved environments
    List,
    /// Save an environment
    #[command(arg_required_else_help = true)]
    Add { name: String },
    /// Forget an environment (QA and Beta are permanent)
    #[command(arg_required_else_help = true)]
    Remove { name: String },
}

/// JSON Schema commands.
#[derive(Subcommand, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchemaCommand {
    /// Output JSON Schema for 'qb list' JSON output
    List,
    /// Output JSON Schema for 'qb show' JSON output
    Show,
    /// Output JSON Schema for 'qb summary' JSON output
    Summary,
    /// Output JSON Schema for 'qb version list' JSON output
    Versions,
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
