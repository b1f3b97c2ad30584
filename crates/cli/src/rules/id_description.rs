// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! A008: `*_id` arguments are described as "The ID of the ...".

use super::Rule;
use super::finding::{self, Finding};
use super::walk;
use crate::diagnostic::Diagnostic;
use crate::markdown::SectionKind;
use crate::patch;
use crate::resource_data::ResourceData;

pub struct IdDescriptionRule;

impl Rule for IdDescriptionRule {
    fn id(&self) -> &'static str {
        "A008"
    }

    fn name(&self) -> &'static str {
        "id_description"
    }

    fn description(&self) -> &'static str {
        "ID arguments start with \"The ID of the\""
    }

    fn run(&self, data: &mut ResourceData, fix: bool) -> Vec<Diagnostic> {
        let mut findings = Vec::new();
        for pair in walk::pairs(data, SectionKind::Arguments) {
            if !pair.schema.name.ends_with("_id") || pair.doc.block {
                continue;
            }
            if pair.doc.description().starts_with(patch::ID_DESCRIPTION_PREFIX) {
                continue;
            }
            let mut finding = Finding::new(format!(
                "`{}` should be described as \"{}...\"",
                pair.path,
                patch::ID_DESCRIPTION_PREFIX
            ))
            .on_property(pair.path)
            .at(pair.doc.line);
            if patch::set_id_description(&pair.doc.content).is_some() {
                finding = finding.with_patch(|line| {
                    patch::set_id_description(line).unwrap_or_else(|| line.to_string())
                });
            }
            findings.push(finding);
        }
        finding::resolve(self, data, findings, fix)
    }
}

#[cfg(test)]
#[path = "id_description_tests.rs"]
mod tests;
