// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema command implementation.
//!
//! Prints JSON Schema documents for the commands with JSON output.

use crate::cli::SchemaCommand;
use crate::error::Result;
use crate::schema::{list, show, summary, versions};
use schemars::schema_for;

/// Run the schema command.
pub fn run(cmd: SchemaCommand) -> Result<()> {
    println!("{}", render(cmd)?);
    Ok(())
}

pub(crate) fn render(cmd: SchemaCommand) -> Result<String> {
    let schema = match cmd {
        SchemaCommand::List => schema_for!(list::ListOutputJson),
        SchemaCommand::Show => schema_for!(show::CaseDetails),
        SchemaCommand::Summary => schema_for!(summary::SummaryOutputJson),
        SchemaCommand::Versions => schema_for!(versions::VersionListJson),
    };
    Ok(serde_json::to_string_pretty(&schema)?)
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
