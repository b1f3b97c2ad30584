// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! D001: surface parse problems recorded while building property trees.

use super::Rule;
use super::finding::{self, Finding};
use crate::diagnostic::Diagnostic;
use crate::markdown::SectionKind;
use crate::resource_data::ResourceData;

pub struct ParseErrorsRule;

impl Rule for ParseErrorsRule {
    fn id(&self) -> &'static str {
        "D001"
    }

    fn name(&self) -> &'static str {
        "parse_errors"
    }

    fn description(&self) -> &'static str {
        "Duplicate fields, undefined or misspelled blocks and malformed field lines"
    }

    fn run(&self, data: &mut ResourceData, fix: bool) -> Vec<Diagnostic> {
        let mut findings = Vec::new();
        for section in [SectionKind::Arguments, SectionKind::Attributes] {
            let tree = data.tree(section);
            for prop in tree.all_properties() {
                for error in &prop.parse_errors {
                    findings
                        .push(Finding::new(error.clone()).on_property(&prop.name).at(prop.line));
                }
            }
            for malformed in &tree.malformed {
                let message =
                    format!("field line has no property name: {}", malformed.content.trim());
                findings.push(Finding::new(message).at(malformed.line));
            }
        }
        finding::resolve(self, data, findings, fix)
    }
}

#[cfg(test)]
#[path = "parse_errors_tests.rs"]
mod tests;
