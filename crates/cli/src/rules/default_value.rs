// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! A006: documented defaults match the schema.

use super::Rule;
use super::finding::{self, Finding};
use super::walk;
use crate::diagnostic::Diagnostic;
use crate::markdown::SectionKind;
use crate::patch;
use crate::resource_data::ResourceData;
use crate::schema::PropertyType;

/// Textual match, or matching integer parts when both sides are finite
/// numbers (`300` and `300.0`).
pub fn same_default(schema: &str, documented: &str) -> bool {
    if schema == documented {
        return true;
    }
    match (schema.parse::<f64>(), documented.parse::<f64>()) {
        (Ok(a), Ok(b)) if a.is_finite() && b.is_finite() => a.trunc() == b.trunc(),
        _ => false,
    }
}

pub struct DefaultValueRule;

impl Rule for DefaultValueRule {
    fn id(&self) -> &'static str {
        "A006"
    }

    fn name(&self) -> &'static str {
        "default_value"
    }

    fn description(&self) -> &'static str {
        "Documented default values match the schema"
    }

    fn run(&self, data: &mut ResourceData, fix: bool) -> Vec<Diagnostic> {
        let mut findings = Vec::new();
        for pair in walk::pairs(data, SectionKind::Arguments) {
            let expected = pair.schema.default_string();
            let documented = pair.doc.default_value.as_deref();
            let message = match (&expected, documented) {
                (Some(value), None) => {
                    if pair.schema.kind == PropertyType::Bool && value == "false" {
                        continue;
                    }
                    format!(
                        "`{}` should document its default {}",
                        pair.path,
                        patch::render_default(value)
                    )
                }
                (Some(value), Some(doc)) if !same_default(value, doc) => format!(
                    "`{}` should default to {}, documented {}",
                    pair.path,
                    patch::render_default(value),
                    patch::render_default(doc)
                ),
                (None, Some(doc)) if !pair.schema.computed => format!(
                    "`{}` documents default {} but the schema has none",
                    pair.path,
                    patch::render_default(doc)
                ),
                _ => continue,
            };
            findings.push(
                Finding::new(message)
                    .on_property(pair.path)
                    .at(pair.doc.clause_lines.default_value)
                    .with_patch(move |line| patch::set_default(line, expected.as_deref())),
            );
        }
        finding::resolve(self, data, findings, fix)
    }
}

#[cfg(test)]
#[path = "default_value_tests.rs"]
mod tests;
