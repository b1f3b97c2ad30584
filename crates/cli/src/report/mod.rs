// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic report output.
//!
//! Renders runner results as colorized text or JSON.

mod json;
mod text;

use std::path::{Path, PathBuf};

use termcolor::WriteColor;

use crate::cli::OutputFormat;
use crate::runner::ResourceReport;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Trait for writing resource reports in an output format.
pub trait ReportFormatter {
    /// Write every report to `writer`.
    fn format_to(
        &self,
        writer: &mut dyn WriteColor,
        reports: &[ResourceReport],
    ) -> anyhow::Result<()>;
}

/// Create the formatter for an output format.
///
/// File paths are shown relative to `base` when they are under it.
pub fn formatter(format: OutputFormat, base: &Path) -> Box<dyn ReportFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(base)),
        OutputFormat::Json => Box::new(JsonFormatter::new(base)),
    }
}

/// Path of `path` relative to `base`, or `path` itself.
pub fn relative_path(path: &Path, base: &Path) -> PathBuf {
    path.strip_prefix(base).unwrap_or(path).to_path_buf()
}

/// Totals over a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub checked: usize,
    pub skipped: usize,
    pub remaining: usize,
    pub fixed: usize,
    pub errors: usize,
    pub written: usize,
}

impl Summary {
    pub fn of(reports: &[ResourceReport]) -> Self {
        let mut summary = Summary::default();
        for report in reports {
            if report.skipped.is_some() {
                summary.skipped += 1;
                continue;
            }
            summary.checked += 1;
            if report.error.is_some() {
                summary.errors += 1;
            }
            if report.written {
                summary.written += 1;
            }
            let remaining = report.remaining().count();
            summary.remaining += remaining;
            summary.fixed += report.diagnostics.len() - remaining;
        }
        summary
    }

    pub fn is_success(&self) -> bool {
        self.remaining == 0 && self.errors == 0
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
