// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Spreadsheet exchange for test cases.
//!
//! The format is simpler than RFC 4180. Free-text columns are wrapped in
//! double quotes on export, but embedded quotes are not escaped and import
//! splits on every comma. A scenario containing a comma therefore shifts
//! the remaining columns when read back.

use crate::case::{TestCase, TestStatus};

/// First line of an exported file.
pub const EXPORT_HEADER: &str = "ID,Grupo,Modulo,Cenario,Resultado Esperado,Android,iOS,Observações";

/// Column order expected on import. The header row itself is skipped.
pub const IMPORT_HEADER: &str = "ID,Grupo,Modulo,Cenario,Esperado,Android,iOS,Obs";

/// Group assigned to imported rows without one.
pub const DEFAULT_IMPORT_GROUP: &str = "Importado";

/// Module assigned to imported rows without one.
pub const DEFAULT_IMPORT_MODULE: &str = "Sem módulo";

/// Renders cases as CSV, one row per case in the given order.
pub fn export_csv<'a, I>(cases: I) -> String
where
    I: IntoIterator<Item = &'a TestCase>,
{
    let mut lines = vec![EXPORT_HEADER.to_string()];
    for case in cases {
        lines.push(format!(
            "{},{},{},\"{}\",\"{}\",{},{},\"{}\"",
            case.id,
            case.group,
            case.module,
            case.scenario,
            case.expected,
            case.android.label(),
            case.ios.label(),
            case.observation,
        ));
    }
    lines.join("\n")
}

/// Parses CSV rows into fresh test cases.
///
/// Rows without an id or scenario are skipped. Unknown statuses become
/// `NotStarted`.
pub fn parse_csv(text: &str) -> Vec<TestCase> {
    let mut imported = Vec::new();

    for (line_no, line) in text
        .split('\n')
        .filter(|l| !l.trim().is_empty())
        .enumerate()
        .skip(1)
    {
        let fields: Vec<&str> = line.split(',').map(unquote).collect();
        let field = |i: usize| fields.get(i).copied().unwrap_or("");

        let (id, scenario) = (field(0), field(3));
        if id.is_empty() || scenario.is_empty() {
            tracing::debug!(line = line_no + 1, "skipping row without id or scenario");
            continue;
        }

        let mut case = TestCase::new(
            id,
            non_empty_or(field(1), DEFAULT_IMPORT_GROUP),
            non_empty_or(field(2), DEFAULT_IMPORT_MODULE),
            scenario,
            field(4),
        );
        case.android = TestStatus::coerce(field(5));
        case.ios = TestStatus::coerce(field(6));
        case.observation = field(7).to_string();
        imported.push(case);
    }

    tracing::debug!(rows = imported.len(), "parsed csv");
    imported
}

/// Trims a field and strips one pair of surrounding double quotes.
fn unquote(field: &str) -> &str {
    let field = field.trim();
    field
        .strip_prefix('"')
        .and_then(|f| f.strip_suffix('"'))
        .map(str::trim)
        .unwrap_or(field)
}

fn non_empty_or<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.is_empty() {
        default
    } else {
        value
    }
}

#[cfg(test)]
#[path = "csv_tests.rs"]
mod tests;
