// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! A001 and A002: schema properties and documented properties exist on
//! both sides.

use super::Rule;
use super::finding::{self, Finding};
use super::walk;
use crate::diagnostic::Diagnostic;
use crate::markdown::SectionKind;
use crate::resource_data::ResourceData;

/// Attributes every resource exports without declaring them.
const IMPLICIT_ATTRIBUTES: &[&str] = &["id"];

pub struct MissingPropertyRule;

impl Rule for MissingPropertyRule {
    fn id(&self) -> &'static str {
        "A001"
    }

    fn name(&self) -> &'static str {
        "missing_property"
    }

    fn description(&self) -> &'static str {
        "Every schema argument and computed attribute is documented"
    }

    fn run(&self, data: &mut ResourceData, fix: bool) -> Vec<Diagnostic> {
        let mut findings = Vec::new();
        for section in [SectionKind::Arguments, SectionKind::Attributes] {
            if data.document.section(section).is_none() {
                continue;
            }
            for level in walk::levels(data, section) {
                for prop in level.schema.iter() {
                    if level.expects(prop) && !level.doc.contains(&prop.name) {
                        let path = level.path_of(&prop.name);
                        findings.push(
                            Finding::new(format!("`{path}` is not documented in `{section}`"))
                                .on_property(path),
                        );
                    }
                }
            }
        }
        finding::resolve(self, data, findings, fix)
    }
}

pub struct UnknownPropertyRule;

impl Rule for UnknownPropertyRule {
    fn id(&self) -> &'static str {
        "A002"
    }

    fn name(&self) -> &'static str {
        "unknown_property"
    }

    fn description(&self) -> &'static str {
        "Every documented property exists in the schema"
    }

    fn run(&self, data: &mut ResourceData, fix: bool) -> Vec<Diagnostic> {
        let mut findings = Vec::new();
        for section in [SectionKind::Arguments, SectionKind::Attributes] {
            for level in walk::levels(data, section) {
                for prop in level.doc.iter() {
                    let implicit = section == SectionKind::Attributes
                        && level.depth == 0
                        && IMPLICIT_ATTRIBUTES.contains(&prop.name.as_str());
                    if implicit || level.schema.contains(&prop.name) {
                        continue;
                    }
                    let path = level.path_of(&prop.name);
                    findings.push(
                        Finding::new(format!(
                            "`{path}` is documented but does not exist in the schema, it may be misspelled"
                        ))
                        .on_property(path)
                        .at(prop.line),
                    );
                }
            }
        }
        finding::resolve(self, data, findings, fix)
    }
}

#[cfg(test)]
#[path = "existence_tests.rs"]
mod tests;
