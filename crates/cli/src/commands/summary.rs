// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use qb_core::{metrics, Board, Clock, Platform, Session};

use crate::cli::OutputFormat;
use crate::display::format_summary;
use crate::error::Result;
use crate::schema::summary::SummaryOutputJson;

use super::open_session;

pub fn run(platform: Option<String>, format: OutputFormat) -> Result<()> {
    let (board, session, _) = open_session()?;
    println!("{}", render(&board, &session, platform.as_deref(), format)?);
    Ok(())
}

pub(crate) fn render<C: Clock>(
    board: &Board<C>,
    session: &Session,
    platform: Option<&str>,
    format: OutputFormat,
) -> Result<String> {
    let platform = platform.map(str::parse::<Platform>).transpose()?;
    let summary = board.summary(session, platform);
    let kpi = board.kpi(session);
    let previous_rate = board.previous_rate();

    match format {
        OutputFormat::Text => Ok(format_summary(&summary, platform, &kpi, previous_rate)),
        OutputFormat::Json => {
            let output = SummaryOutputJson {
                version: session.app_version.clone(),
                platform: platform.map(|p| p.as_str().to_string()),
                trend: metrics::trend(kpi.rate, previous_rate),
                summary,
                kpi,
                previous_rate,
            };
            Ok(serde_json::to_string_pretty(&output)?)
        }
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
