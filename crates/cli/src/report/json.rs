// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format report output.

use std::path::{Path, PathBuf};

use serde_json::json;
use termcolor::WriteColor;

use super::{ReportFormatter, Summary, relative_path};
use crate::runner::ResourceReport;

/// JSON format report formatter.
pub struct JsonFormatter {
    base: PathBuf,
}

impl JsonFormatter {
    pub fn new(base: &Path) -> Self {
        Self { base: base.to_path_buf() }
    }
}

impl ReportFormatter for JsonFormatter {
    fn format_to(
        &self,
        writer: &mut dyn WriteColor,
        reports: &[ResourceReport],
    ) -> anyhow::Result<()> {
        let mut resources = Vec::with_capacity(reports.len());
        for report in reports {
            let mut value = serde_json::to_value(report)?;
            value["file"] = value_file(&report.file, &self.base);
            if let Some(diagnostics) = value["diagnostics"].as_array_mut() {
                for diagnostic in diagnostics {
                    diagnostic["file"] = value_file(&report.file, &self.base);
                }
            }
            resources.push(value);
        }

        let summary = Summary::of(reports);
        let output = json!({
            "passed": summary.is_success(),
            "summary": {
                "checked": summary.checked,
                "skipped": summary.skipped,
                "remaining": summary.remaining,
                "fixed": summary.fixed,
                "errors": summary.errors,
                "written": summary.written,
            },
            "resources": resources,
        });
        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)?;
        Ok(())
    }
}

fn value_file(path: &Path, base: &Path) -> serde_json::Value {
    json!(relative_path(path, base))
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
