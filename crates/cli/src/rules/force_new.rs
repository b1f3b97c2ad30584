// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! A005: the force-new sentence is present exactly when the schema forces
//! replacement.

use super::Rule;
use super::finding::{self, Finding};
use super::walk;
use crate::diagnostic::Diagnostic;
use crate::markdown::SectionKind;
use crate::patch;
use crate::resource_data::ResourceData;

pub struct ForceNewRule {
    noun: String,
}

impl ForceNewRule {
    pub fn new(noun: &str) -> Self {
        Self { noun: noun.to_string() }
    }
}

impl Rule for ForceNewRule {
    fn id(&self) -> &'static str {
        "A005"
    }

    fn name(&self) -> &'static str {
        "force_new"
    }

    fn description(&self) -> &'static str {
        "Force-new sentences match the schema"
    }

    fn run(&self, data: &mut ResourceData, fix: bool) -> Vec<Diagnostic> {
        let mut findings = Vec::new();
        for pair in walk::pairs(data, SectionKind::Arguments) {
            let finding = match (pair.schema.force_new, pair.doc.force_new) {
                (true, false) => {
                    let noun = self.noun.clone();
                    Finding::new(format!("`{}` forces a new {noun} but does not say so", pair.path))
                        .with_patch(move |line| patch::add_force_new(line, &noun))
                }
                (false, true) => Finding::new(format!(
                    "`{}` is documented as forcing a new {} but does not",
                    pair.path, self.noun
                ))
                .with_patch(patch::remove_force_new),
                _ => continue,
            };
            findings.push(finding.on_property(pair.path).at(pair.doc.clause_lines.force_new));
        }
        finding::resolve(self, data, findings, fix)
    }
}

#[cfg(test)]
#[path = "force_new_tests.rs"]
mod tests;
