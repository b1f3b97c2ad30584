// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `document-fmt rules` implementation.

use std::io::Write;

use document_fmt::error::ExitCode;
use document_fmt::rules::{RuleContext, RuleEngine};

/// Print every rule in canonical order.
pub fn run() -> anyhow::Result<ExitCode> {
    let engine = RuleEngine::all(&RuleContext::default());
    let width = engine.rules().iter().map(|r| r.name().len()).max().unwrap_or(0);

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    for rule in engine.rules() {
        writeln!(handle, "{}  {:<width$}  {}", rule.id(), rule.name(), rule.description())?;
    }
    Ok(ExitCode::Success)
}
