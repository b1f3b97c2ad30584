// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! S003: the Timeouts section lists every declared timeout in CRUD order.
//!
//! Unlike the property rules this one rewrites the whole section body in a
//! single step, so it never patches individual lines.

use super::Rule;
use crate::diagnostic::Diagnostic;
use crate::markdown::{Line, LineId, SectionKind};
use crate::patch::{self, TimeoutLine};
use crate::resource_data::ResourceData;
use crate::schema::TimeoutOperation;

const DEFAULT_PREAMBLE: &str = "The `timeouts` block allows you to specify [timeouts](https://developer.hashicorp.com/terraform/language/resources/syntax#operation-timeouts) for certain actions:";

/// A documented timeout line.
struct Documented {
    id: LineId,
    text: String,
    timeout: TimeoutLine,
}

/// Current body split into its parts.
struct Body {
    preamble: Vec<String>,
    items: Vec<Documented>,
    trailer: Vec<String>,
}

fn split_body(lines: &[Line]) -> Body {
    let mut body = Body { preamble: Vec::new(), items: Vec::new(), trailer: Vec::new() };
    for line in lines {
        match patch::parse_timeout_line(&line.text) {
            Some(timeout) => {
                body.items.push(Documented { id: line.id, text: line.text.clone(), timeout })
            }
            None if body.items.is_empty() => body.preamble.push(line.text.clone()),
            None if line.text.trim().is_empty() => {}
            None => body.trailer.push(line.text.clone()),
        }
    }
    body
}

/// "mssql_managed_instance" -> "Mssql Managed Instance".
fn display_name(short_name: &str) -> String {
    short_name
        .split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            chars
                .next()
                .map(|c| c.to_uppercase().chain(chars).collect::<String>())
                .unwrap_or_default()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub struct TimeoutsRule;

impl Rule for TimeoutsRule {
    fn id(&self) -> &'static str {
        "S003"
    }

    fn name(&self) -> &'static str {
        "timeouts"
    }

    fn description(&self) -> &'static str {
        "Timeouts are listed in CRUD order with the declared defaults"
    }

    fn run(&self, data: &mut ResourceData, fix: bool) -> Vec<Diagnostic> {
        let declared = data.timeouts.map(|t| t.entries()).unwrap_or_default();
        let Some(section) = data.document.section(SectionKind::Timeouts) else {
            return Vec::new();
        };
        if declared.is_empty() {
            return Vec::new();
        }

        let body = split_body(section.body());
        let short_name = data.name.split_once('_').map(|(_, rest)| rest).unwrap_or(&data.name);
        let subject = display_name(short_name);

        let expected_line = |op: TimeoutOperation, minutes: u32| {
            let description = body
                .items
                .iter()
                .find(|d| d.timeout.operation == op.name() && !d.timeout.description.is_empty())
                .map(|d| d.timeout.description.clone())
                .unwrap_or_else(|| format!("Used when {} the {subject}.", op.verb()));
            patch::timeout_line(op.name(), minutes, &description)
        };

        // (message, line, before, after)
        let mut problems: Vec<(String, Option<LineId>, String, String)> = Vec::new();
        for &(op, minutes) in &declared {
            let after = expected_line(op, minutes);
            match body.items.iter().find(|d| d.timeout.operation == op.name()) {
                None => problems.push((
                    format!(
                        "missing `{}` timeout, expected `{}`",
                        op.name(),
                        patch::format_duration(minutes)
                    ),
                    None,
                    String::new(),
                    after,
                )),
                Some(doc) if doc.timeout.minutes != Some(minutes) => problems.push((
                    format!(
                        "`{}` timeout should default to {}",
                        op.name(),
                        patch::format_duration(minutes)
                    ),
                    Some(doc.id),
                    doc.text.clone(),
                    after,
                )),
                Some(_) => {}
            }
        }
        for doc in &body.items {
            let known = TimeoutOperation::from_name(&doc.timeout.operation)
                .is_some_and(|op| declared.iter().any(|(d, _)| *d == op));
            if !known {
                problems.push((
                    format!("`{}` timeout is documented but not declared", doc.timeout.operation),
                    Some(doc.id),
                    doc.text.clone(),
                    String::new(),
                ));
            }
        }
        let documented_order: Vec<TimeoutOperation> = body
            .items
            .iter()
            .filter_map(|d| TimeoutOperation::from_name(&d.timeout.operation))
            .collect();
        if documented_order.windows(2).any(|w| w[0] >= w[1])
            && let Some(first) = body.items.first()
        {
            problems.push((
                "timeouts should be listed in create, read, update, delete order".to_string(),
                Some(first.id),
                first.text.clone(),
                String::new(),
            ));
        }

        if problems.is_empty() {
            return Vec::new();
        }

        let mut new_body: Vec<String> = body.preamble.clone();
        if new_body.iter().all(|l| l.trim().is_empty()) {
            new_body = vec![String::new(), DEFAULT_PREAMBLE.to_string(), String::new()];
        } else if new_body.last().is_some_and(|l| !l.trim().is_empty()) {
            new_body.push(String::new());
        }
        for &(op, minutes) in &declared {
            new_body.push(expected_line(op, minutes));
            new_body.push(String::new());
        }
        for line in &body.trailer {
            new_body.push(line.clone());
            new_body.push(String::new());
        }

        let file = data.document.path().to_path_buf();
        let diagnostics: Vec<Diagnostic> = problems
            .into_iter()
            .map(|(message, line, before, after)| {
                Diagnostic::new(self.id(), self.name(), &file, message)
                    .with_line(line.and_then(|id| data.document.line_number(id)))
                    .with_fix(before, after, fix)
            })
            .collect();

        if fix && data.document.replace_section_body(SectionKind::Timeouts, &new_body) {
            tracing::debug!("rewrote timeouts of {}", data.name);
        }
        diagnostics
    }
}

#[cfg(test)]
#[path = "timeouts_tests.rs"]
mod tests;
