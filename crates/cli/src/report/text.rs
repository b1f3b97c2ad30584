// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format report output.

use std::path::{Path, PathBuf};

use termcolor::WriteColor;

use super::{ReportFormatter, Summary, relative_path};
use crate::color::scheme;
use crate::diagnostic::Diagnostic;
use crate::runner::ResourceReport;

/// Text format report formatter.
pub struct TextFormatter {
    base: PathBuf,
}

impl TextFormatter {
    pub fn new(base: &Path) -> Self {
        Self { base: base.to_path_buf() }
    }

    fn write_report(&self, w: &mut dyn WriteColor, report: &ResourceReport) -> anyhow::Result<()> {
        w.set_color(&scheme::rule_id())?;
        write!(w, "{}", report.resource)?;
        w.reset()?;
        write!(w, " (")?;
        w.set_color(&scheme::path())?;
        write!(w, "{}", relative_path(&report.file, &self.base).display())?;
        w.reset()?;
        writeln!(w, ")")?;

        if let Some(error) = &report.error {
            w.set_color(&scheme::fail())?;
            write!(w, "  error")?;
            w.reset()?;
            writeln!(w, ": {error}")?;
        }
        for diagnostic in &report.diagnostics {
            write_diagnostic(w, diagnostic)?;
        }
        if report.written {
            w.set_color(&scheme::pass())?;
            write!(w, "  wrote")?;
            w.reset()?;
            writeln!(w, " {}", relative_path(&report.file, &self.base).display())?;
        }
        Ok(())
    }
}

fn write_diagnostic(w: &mut dyn WriteColor, diagnostic: &Diagnostic) -> anyhow::Result<()> {
    write!(w, "  ")?;
    w.set_color(&scheme::rule_id())?;
    write!(w, "{} {}", diagnostic.rule_id, diagnostic.rule_name)?;
    w.reset()?;
    if let Some(line) = diagnostic.line {
        write!(w, ":")?;
        w.set_color(&scheme::line_number())?;
        write!(w, "{line}")?;
        w.reset()?;
    }
    write!(w, ": ")?;
    w.set_color(&scheme::message())?;
    write!(w, "{}", diagnostic.message)?;
    w.reset()?;
    if !diagnostic.is_remaining() {
        w.set_color(&scheme::pass())?;
        write!(w, " (fixed)")?;
        w.reset()?;
    }
    writeln!(w)?;

    if let Some(fix) = &diagnostic.fix {
        w.set_color(&scheme::removed())?;
        writeln!(w, "    - {}", fix.before)?;
        w.set_color(&scheme::added())?;
        writeln!(w, "    + {}", fix.after)?;
        w.reset()?;
    }
    Ok(())
}

fn write_summary(w: &mut dyn WriteColor, summary: &Summary) -> anyhow::Result<()> {
    if summary.is_success() {
        w.set_color(&scheme::pass())?;
        write!(w, "PASS")?;
    } else {
        w.set_color(&scheme::fail())?;
        write!(w, "FAIL")?;
    }
    w.reset()?;

    let mut parts = vec![plural(summary.checked, "resource") + " checked"];
    if summary.remaining > 0 {
        parts.push(plural(summary.remaining, "diagnostic"));
    }
    if summary.fixed > 0 {
        parts.push(format!("{} fixed", summary.fixed));
    }
    if summary.errors > 0 {
        parts.push(plural(summary.errors, "error"));
    }
    if summary.written > 0 {
        parts.push(plural(summary.written, "file") + " written");
    }
    if summary.skipped > 0 {
        parts.push(format!("{} skipped", summary.skipped));
    }
    writeln!(w, ": {}", parts.join(", "))?;
    Ok(())
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 { format!("{count} {noun}") } else { format!("{count} {noun}s") }
}

impl ReportFormatter for TextFormatter {
    fn format_to(
        &self,
        writer: &mut dyn WriteColor,
        reports: &[ResourceReport],
    ) -> anyhow::Result<()> {
        for report in reports {
            if report.error.is_none() && report.diagnostics.is_empty() && !report.written {
                continue;
            }
            self.write_report(writer, report)?;
        }
        write_summary(writer, &Summary::of(reports))
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
