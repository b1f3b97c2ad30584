// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic records produced by rules.

use std::path::PathBuf;

use serde::Serialize;

/// A before/after line pair for a fixable diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fix {
    pub before: String,
    pub after: String,
    /// True when the fix was written to the in-memory document.
    pub applied: bool,
}

/// One consistency problem found by a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub rule_id: &'static str,
    pub rule_name: &'static str,
    pub file: PathBuf,
    /// Dotted property path (`identity.type`), when the problem is about a property.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,
    pub message: String,
    /// 1-indexed line number in the document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fix: Option<Fix>,
}

impl Diagnostic {
    pub fn new(
        rule_id: &'static str,
        rule_name: &'static str,
        file: impl Into<PathBuf>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            rule_id,
            rule_name,
            file: file.into(),
            property: None,
            message: message.into(),
            line: None,
            fix: None,
        }
    }

    pub fn with_property(mut self, property: impl Into<String>) -> Self {
        self.property = Some(property.into());
        self
    }

    pub fn with_line(mut self, line: Option<usize>) -> Self {
        self.line = line;
        self
    }

    pub fn with_fix(
        mut self,
        before: impl Into<String>,
        after: impl Into<String>,
        applied: bool,
    ) -> Self {
        self.fix = Some(Fix { before: before.into(), after: after.into(), applied });
        self
    }

    /// Whether the problem still exists after the run.
    pub fn is_remaining(&self) -> bool {
        !self.fix.as_ref().is_some_and(|f| f.applied)
    }
}
