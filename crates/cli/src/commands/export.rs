// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use qb_core::{Board, Clock, Session};

use crate::cli::FilterArgs;
use crate::error::{Error, Result};

use super::open_session;

pub fn run(path: Option<String>, filter: FilterArgs) -> Result<()> {
    let (board, session, _) = open_session()?;
    run_impl(&board, &session, path.as_deref(), &filter)
}

/// File name used when no path is given.
pub fn default_file_name(version: &str, date: &str) -> String {
    format!("qa-export-{}-{}.csv", version, date)
}

/// Internal implementation that accepts the board for testing.
///
/// `-` writes to stdout.
pub(crate) fn run_impl<C: Clock>(
    board: &Board<C>,
    session: &Session,
    path: Option<&str>,
    filter: &FilterArgs,
) -> Result<()> {
    let path = match path {
        Some(p) if p.trim().is_empty() => return Err(Error::ExportPathEmpty),
        Some(p) => p.to_string(),
        None => default_file_name(&session.app_version, &board.clock().today()),
    };

    let filter = filter.to_filter()?;
    let count = board.cases(session, &filter).len();
    let csv = board.export_csv(session, &filter);

    if path == "-" {
        println!("{}", csv);
        return Ok(());
    }

    write_csv(Path::new(&path), &csv)?;
    println!("Exported {} cases to {}", count, path);
    Ok(())
}

fn write_csv(path: &Path, csv: &str) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writeln!(writer, "{}", csv)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;
