// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! A004: `(Required)`/`(Optional)` markers match the schema.

use super::Rule;
use super::finding::{self, Finding};
use super::walk;
use crate::diagnostic::Diagnostic;
use crate::markdown::SectionKind;
use crate::patch;
use crate::property::parse::Requiredness;
use crate::resource_data::ResourceData;

pub struct RequiredRule;

impl Rule for RequiredRule {
    fn id(&self) -> &'static str {
        "A004"
    }

    fn name(&self) -> &'static str {
        "required"
    }

    fn description(&self) -> &'static str {
        "Requiredness markers match the schema"
    }

    fn run(&self, data: &mut ResourceData, fix: bool) -> Vec<Diagnostic> {
        let mut findings = Vec::new();
        for pair in walk::pairs(data, SectionKind::Arguments) {
            let (expected, documented_ok) = if pair.schema.required {
                (Requiredness::Required, pair.doc.required)
            } else {
                (Requiredness::Optional, pair.doc.optional)
            };
            if documented_ok {
                continue;
            }
            let marker = match expected {
                Requiredness::Required => "(Required)",
                Requiredness::Optional => "(Optional)",
            };
            let message = if pair.doc.required || pair.doc.optional {
                format!("`{}` should be documented as {marker}", pair.path)
            } else {
                format!("`{}` is missing the {marker} marker", pair.path)
            };
            findings.push(
                Finding::new(message)
                    .on_property(pair.path)
                    .at(pair.doc.clause_lines.requiredness)
                    .with_patch(move |line| patch::set_requiredness(line, expected)),
            );
        }
        finding::resolve(self, data, findings, fix)
    }
}

#[cfg(test)]
#[path = "required_tests.rs"]
mod tests;
