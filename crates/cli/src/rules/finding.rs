// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Line findings and their application to the document.

use std::collections::{HashMap, HashSet};

use super::Rule;
use crate::diagnostic::Diagnostic;
use crate::markdown::LineId;
use crate::resource_data::ResourceData;

type Patch = Box<dyn Fn(&str) -> String>;

/// A problem located on one documentation line, with an optional rewrite.
pub struct Finding {
    pub property: Option<String>,
    pub line: Option<LineId>,
    pub message: String,
    patch: Option<Patch>,
}

impl Finding {
    pub fn new(message: impl Into<String>) -> Self {
        Self { property: None, line: None, message: message.into(), patch: None }
    }

    pub fn on_property(mut self, path: impl Into<String>) -> Self {
        self.property = Some(path.into());
        self
    }

    pub fn at(mut self, line: LineId) -> Self {
        self.line = Some(line);
        self
    }

    /// Rewrite applied to the line's current text.
    pub fn with_patch(mut self, patch: impl Fn(&str) -> String + 'static) -> Self {
        self.patch = Some(Box::new(patch));
        self
    }
}

/// Turn findings into diagnostics, patching lines when `fix` is set.
///
/// A line is patched at most once per rule. Identical findings reached
/// through a shared block definition are reported once. A later finding on
/// an already patched line counts as fixed only when its own rewrite agrees.
pub fn resolve(
    rule: &dyn Rule,
    data: &mut ResourceData,
    findings: Vec<Finding>,
    fix: bool,
) -> Vec<Diagnostic> {
    let mut seen: HashSet<(Option<LineId>, String)> = HashSet::new();
    let mut patched: HashMap<LineId, (String, String)> = HashMap::new();
    let mut diagnostics = Vec::new();

    for finding in findings {
        if !seen.insert((finding.line, finding.message.clone())) {
            continue;
        }
        let line_number = finding.line.and_then(|id| data.document.line_number(id));
        let mut diagnostic =
            Diagnostic::new(rule.id(), rule.name(), data.document.path(), finding.message)
                .with_line(line_number);
        if let Some(path) = finding.property {
            diagnostic = diagnostic.with_property(path);
        }

        if let (Some(id), Some(patch)) = (finding.line, finding.patch) {
            if let Some((before, after)) = patched.get(&id) {
                let own = patch(before);
                if own != *before {
                    let applied = own == *after;
                    diagnostic = diagnostic.with_fix(before.as_str(), own, applied);
                }
            } else if let Some(before) = data.document.line(id).map(str::to_string) {
                let after = patch(&before);
                if after != before {
                    if fix {
                        // A continuation line left empty is dropped with its clause.
                        if after.trim().is_empty() {
                            data.document.remove_line(id);
                        } else {
                            data.document.set_line(id, &after);
                        }
                        patched.insert(id, (before.clone(), after.clone()));
                    }
                    diagnostic = diagnostic.with_fix(before, after, fix);
                }
            }
        }
        diagnostics.push(diagnostic);
    }
    diagnostics
}

#[cfg(test)]
#[path = "finding_tests.rs"]
mod tests;
