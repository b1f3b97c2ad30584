// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! A007: documented possible values match the schema.
//!
//! Values compare as case-insensitive sets. A property is left alone when
//! its field has several value clauses, when every schema value already
//! appears somewhere in its text, or when an upgrade guide lists it as
//! changing.

use std::collections::HashSet;
use std::rc::Rc;

use super::Rule;
use super::finding::{self, Finding};
use super::walk;
use crate::diagnostic::Diagnostic;
use crate::markdown::SectionKind;
use crate::patch;
use crate::resource_data::ResourceData;
use crate::upgrade_guide::UpgradeGuide;

pub struct PossibleValuesRule {
    upgrade_guide: Rc<UpgradeGuide>,
}

impl PossibleValuesRule {
    pub fn new(upgrade_guide: Rc<UpgradeGuide>) -> Self {
        Self { upgrade_guide }
    }
}

fn lowercase_set(values: &[String]) -> HashSet<String> {
    values.iter().map(|v| v.to_lowercase()).collect()
}

fn quoted_list(values: &[&String]) -> String {
    values.iter().map(|v| format!("`{v}`")).collect::<Vec<_>>().join(", ")
}

impl Rule for PossibleValuesRule {
    fn id(&self) -> &'static str {
        "A007"
    }

    fn name(&self) -> &'static str {
        "possible_values"
    }

    fn description(&self) -> &'static str {
        "Documented possible values match the schema"
    }

    fn run(&self, data: &mut ResourceData, fix: bool) -> Vec<Diagnostic> {
        let mut findings = Vec::new();
        for pair in walk::pairs(data, SectionKind::Arguments) {
            let expected = &pair.schema.possible_values;
            if expected.is_empty() || pair.doc.skip {
                continue;
            }
            if expected.iter().all(|v| pair.doc.text.contains(v.as_str())) {
                continue;
            }
            if self.upgrade_guide.has_change(&data.name, &pair.schema.name) {
                tracing::debug!("{}: {} changes in the upgrade guide", data.name, pair.path);
                continue;
            }

            let documented = lowercase_set(&pair.doc.enums);
            let schema = lowercase_set(expected);
            let missing: Vec<&String> =
                expected.iter().filter(|v| !documented.contains(&v.to_lowercase())).collect();
            let extra: Vec<&String> =
                pair.doc.enums.iter().filter(|v| !schema.contains(&v.to_lowercase())).collect();

            let fixable = !pair.doc.enum_range;
            let mut messages = Vec::new();
            if pair.doc.enums.is_empty() {
                messages.push(format!(
                    "`{}` does not document its possible values {}",
                    pair.path,
                    quoted_list(&missing)
                ));
            } else {
                if !missing.is_empty() {
                    messages.push(format!(
                        "`{}` is missing possible values {}",
                        pair.path,
                        quoted_list(&missing)
                    ));
                }
                if !extra.is_empty() {
                    messages.push(format!(
                        "`{}` documents possible values not in the schema: {}",
                        pair.path,
                        quoted_list(&extra)
                    ));
                }
            }

            for message in messages {
                let mut finding =
                    Finding::new(message).on_property(&pair.path).at(pair.doc.clause_lines.enums);
                if fixable {
                    let values = expected.clone();
                    finding =
                        finding.with_patch(move |line| patch::set_possible_values(line, &values));
                }
                findings.push(finding);
            }
        }
        finding::resolve(self, data, findings, fix)
    }
}

#[cfg(test)]
#[path = "possible_values_tests.rs"]
mod tests;
