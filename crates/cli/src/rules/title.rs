// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! T001: the `#` title names the resource.

use super::Rule;
use super::finding::{self, Finding};
use crate::diagnostic::Diagnostic;
use crate::markdown::SectionKind;
use crate::resource_data::ResourceData;

pub struct TitleRule;

impl Rule for TitleRule {
    fn id(&self) -> &'static str {
        "T001"
    }

    fn name(&self) -> &'static str {
        "title"
    }

    fn description(&self) -> &'static str {
        "Title is `# <prefix><resource name>`"
    }

    fn run(&self, data: &mut ResourceData, fix: bool) -> Vec<Diagnostic> {
        let expected = format!("# {}{}", data.kind.title_prefix(), data.name);
        let heading = data.document.section(SectionKind::Title).and_then(|s| s.heading());

        let findings = match heading {
            None => vec![Finding::new(format!("document has no title, expected `{expected}`"))],
            Some(line) if line.text.trim_end() != expected => {
                let found = line.text.trim_end();
                let message = format!("title should be `{expected}`, found `{found}`");
                vec![Finding::new(message).at(line.id).with_patch(move |_| expected.clone())]
            }
            Some(_) => Vec::new(),
        };
        finding::resolve(self, data, findings, fix)
    }
}

#[cfg(test)]
#[path = "title_tests.rs"]
mod tests;
