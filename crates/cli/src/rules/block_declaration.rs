// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! A003: nested schema objects are documented as blocks, and only they are.

use super::Rule;
use super::finding::{self, Finding};
use super::walk;
use crate::diagnostic::Diagnostic;
use crate::markdown::SectionKind;
use crate::resource_data::ResourceData;

pub struct BlockDeclarationRule;

impl Rule for BlockDeclarationRule {
    fn id(&self) -> &'static str {
        "A003"
    }

    fn name(&self) -> &'static str {
        "block_declaration"
    }

    fn description(&self) -> &'static str {
        "Block and non-block declarations agree with the schema"
    }

    fn run(&self, data: &mut ResourceData, fix: bool) -> Vec<Diagnostic> {
        let mut findings = Vec::new();
        for section in [SectionKind::Arguments, SectionKind::Attributes] {
            for pair in walk::pairs(data, section) {
                let message = match (pair.schema.is_block(), pair.doc.block) {
                    (true, false) => format!(
                        "`{}` is a block in the schema but is not documented as a block",
                        pair.path
                    ),
                    (false, true) => format!(
                        "`{}` is documented as a block but is not a block in the schema",
                        pair.path
                    ),
                    _ => continue,
                };
                findings.push(Finding::new(message).on_property(pair.path).at(pair.doc.line));
            }
        }
        finding::resolve(self, data, findings, fix)
    }
}

#[cfg(test)]
#[path = "block_declaration_tests.rs"]
mod tests;
