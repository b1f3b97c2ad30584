// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! F001: front matter keys and page title.

use serde::Deserialize;

use super::Rule;
use super::finding::{self, Finding};
use crate::diagnostic::Diagnostic;
use crate::error::Error;
use crate::markdown::{Line, SectionKind, mark};
use crate::resource_data::ResourceData;
use crate::schema::ResourceKind;

const PAGE_TITLE_PREFIX: &str = "Azure Resource Manager: ";

#[derive(Debug, Default, Deserialize)]
struct FrontMatter {
    subcategory: Option<String>,
    layout: Option<String>,
    page_title: Option<String>,
    description: Option<String>,
}

/// Expected `page_title` value.
pub fn page_title(name: &str, kind: ResourceKind) -> String {
    format!("{PAGE_TITLE_PREFIX}{}{name}", kind.title_prefix())
}

/// YAML lines between the opening and closing rules.
fn yaml_lines(lines: &[Line]) -> &[Line] {
    let body = lines.get(1..).unwrap_or_default();
    let end = body.iter().position(|l| mark::is_rule(&l.text)).unwrap_or(body.len());
    &body[..end]
}

pub struct FrontMatterRule;

impl Rule for FrontMatterRule {
    fn id(&self) -> &'static str {
        "F001"
    }

    fn name(&self) -> &'static str {
        "front_matter"
    }

    fn description(&self) -> &'static str {
        "Front matter has subcategory, layout, page_title and description"
    }

    fn run(&self, data: &mut ResourceData, fix: bool) -> Vec<Diagnostic> {
        let findings = match data.document.section(SectionKind::FrontMatter) {
            None => vec![Finding::new("document has no front matter")],
            Some(section) => check(yaml_lines(&section.lines), &page_title(&data.name, data.kind)),
        };
        finding::resolve(self, data, findings, fix)
    }
}

fn check(lines: &[Line], expected_title: &str) -> Vec<Finding> {
    let yaml = lines.iter().map(|l| l.text.as_str()).collect::<Vec<_>>().join("\n");
    let front: FrontMatter = match serde_yaml::from_str::<Option<FrontMatter>>(&yaml) {
        Ok(front) => front.unwrap_or_default(),
        Err(e) => return vec![Finding::new(Error::from(e).to_string())],
    };

    let mut findings = Vec::new();
    let keys = [
        ("subcategory", front.subcategory.is_some()),
        ("layout", front.layout.is_some()),
        ("page_title", front.page_title.is_some()),
        ("description", front.description.is_some()),
    ];
    for (key, present) in keys {
        if !present {
            findings.push(Finding::new(format!("front matter is missing `{key}`")));
        }
    }

    if let Some(title) = front.page_title
        && title != expected_title
    {
        let mut finding =
            Finding::new(format!("page_title should be `{expected_title}`, found `{title}`"));
        if let Some(line) = lines.iter().find(|l| l.text.trim_start().starts_with("page_title:")) {
            let replacement = format!("page_title: \"{expected_title}\"");
            finding = finding.at(line.id).with_patch(move |_| replacement.clone());
        }
        findings.push(finding);
    }
    findings
}

#[cfg(test)]
#[path = "front_matter_tests.rs"]
mod tests;
