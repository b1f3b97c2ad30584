// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! S001 and S002: which sections exist and in what order.

use super::Rule;
use super::finding::{self, Finding};
use crate::diagnostic::Diagnostic;
use crate::markdown::{Section, SectionKind};
use crate::resource_data::ResourceData;

pub struct RequiredSectionsRule;

impl Rule for RequiredSectionsRule {
    fn id(&self) -> &'static str {
        "S001"
    }

    fn name(&self) -> &'static str {
        "required_sections"
    }

    fn description(&self) -> &'static str {
        "Arguments, Attributes, Import and Timeouts sections exist where expected"
    }

    fn run(&self, data: &mut ResourceData, fix: bool) -> Vec<Diagnostic> {
        let has_timeouts = data.timeouts.is_some_and(|t| !t.is_empty());
        let mut required = vec![SectionKind::Arguments, SectionKind::Attributes];
        if data.kind.is_importable() {
            required.push(SectionKind::Import);
        }
        if has_timeouts {
            required.push(SectionKind::Timeouts);
        }

        let mut findings: Vec<Finding> = required
            .into_iter()
            .filter(|kind| data.document.section(*kind).is_none())
            .map(|kind| Finding::new(format!("missing `{kind}` section")))
            .collect();

        if !has_timeouts
            && let Some(heading) =
                data.document.section(SectionKind::Timeouts).and_then(Section::heading)
        {
            findings.push(
                Finding::new("`Timeouts` section documented but the schema declares no timeouts")
                    .at(heading.id),
            );
        }
        finding::resolve(self, data, findings, fix)
    }
}

pub struct SectionOrderRule;

impl Rule for SectionOrderRule {
    fn id(&self) -> &'static str {
        "S002"
    }

    fn name(&self) -> &'static str {
        "section_order"
    }

    fn description(&self) -> &'static str {
        "Known sections appear in canonical order"
    }

    fn run(&self, data: &mut ResourceData, fix: bool) -> Vec<Diagnostic> {
        let mut findings = Vec::new();
        let mut latest: Option<(usize, SectionKind)> = None;

        for section in data.document.sections() {
            let Some(rank) = section.kind.rank() else {
                continue;
            };
            match latest {
                Some((max, before)) if rank < max => {
                    let mut finding = Finding::new(format!(
                        "`{}` section should come before `{before}`",
                        section.kind
                    ));
                    if let Some(heading) = section.heading() {
                        finding = finding.at(heading.id);
                    }
                    findings.push(finding);
                }
                _ => latest = Some((rank, section.kind)),
            }
        }
        finding::resolve(self, data, findings, fix)
    }
}

#[cfg(test)]
#[path = "sections_tests.rs"]
mod tests;
