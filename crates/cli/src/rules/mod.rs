// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rule engine.
//!
//! Rules compare a resource's schema with its documentation. Each rule runs
//! independently and returns its own diagnostics; in fix mode it rewrites
//! the in-memory document as well.

mod block_declaration;
mod default_value;
mod existence;
mod finding;
mod force_new;
mod front_matter;
mod id_description;
mod parse_errors;
mod possible_values;
mod required;
mod sections;
mod timeouts;
mod title;
pub mod walk;

use std::rc::Rc;

use crate::diagnostic::Diagnostic;
use crate::error::{Error, Result};
use crate::resource_data::ResourceData;
use crate::upgrade_guide::UpgradeGuide;

pub use finding::Finding;

/// A documentation rule.
pub trait Rule {
    /// Stable identifier (`A004`).
    fn id(&self) -> &'static str;

    /// Short snake_case name (`required`).
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Check one resource, fixing what can be fixed when `fix` is set.
    fn run(&self, data: &mut ResourceData, fix: bool) -> Vec<Diagnostic>;
}

/// Dependencies shared by rules.
#[derive(Debug, Clone)]
pub struct RuleContext {
    pub upgrade_guide: Rc<UpgradeGuide>,
    /// Noun in the force-new sentence ("resource").
    pub force_new_noun: String,
}

impl Default for RuleContext {
    fn default() -> Self {
        Self {
            upgrade_guide: Rc::new(UpgradeGuide::empty()),
            force_new_noun: "resource".to_string(),
        }
    }
}

/// Rule IDs in canonical order.
pub const RULE_IDS: &[&str] = &[
    "D001", "F001", "T001", "S001", "S002", "S003", "A001", "A002", "A003", "A004", "A005",
    "A006", "A007", "A008",
];

/// Every rule in canonical order.
pub fn registry(ctx: &RuleContext) -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(parse_errors::ParseErrorsRule),
        Box::new(front_matter::FrontMatterRule),
        Box::new(title::TitleRule),
        Box::new(sections::RequiredSectionsRule),
        Box::new(sections::SectionOrderRule),
        Box::new(timeouts::TimeoutsRule),
        Box::new(existence::MissingPropertyRule),
        Box::new(existence::UnknownPropertyRule),
        Box::new(block_declaration::BlockDeclarationRule),
        Box::new(required::RequiredRule),
        Box::new(force_new::ForceNewRule::new(&ctx.force_new_noun)),
        Box::new(default_value::DefaultValueRule),
        Box::new(possible_values::PossibleValuesRule::new(Rc::clone(&ctx.upgrade_guide))),
        Box::new(id_description::IdDescriptionRule),
    ]
}

/// Runs a selected list of rules in order.
pub struct RuleEngine {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleEngine {
    pub fn new(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    /// Engine with every rule.
    pub fn all(ctx: &RuleContext) -> Self {
        Self::new(registry(ctx))
    }

    /// Engine with the given rules, by ID or name, in the order given.
    pub fn select(ctx: &RuleContext, ids: &[String]) -> Result<Self> {
        let registered = registry(ctx);
        let keys: Vec<(&'static str, &'static str)> =
            registered.iter().map(|r| (r.id(), r.name())).collect();
        let mut available: Vec<Option<Box<dyn Rule>>> = registered.into_iter().map(Some).collect();

        let mut rules = Vec::with_capacity(ids.len());
        for id in ids {
            let index = keys
                .iter()
                .position(|(key, name)| key.eq_ignore_ascii_case(id) || name == id)
                .ok_or_else(|| Error::UnknownRule(id.clone()))?;
            // A rule listed twice runs once.
            if let Some(rule) = available[index].take() {
                rules.push(rule);
            }
        }
        Ok(Self::new(rules))
    }

    /// Run every rule; one rule's findings never stop another from running.
    pub fn run(&self, data: &mut ResourceData, fix: bool) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for rule in &self.rules {
            let found = rule.run(data, fix);
            tracing::debug!(
                "{} {}: {} diagnostic(s) for {}",
                rule.id(),
                rule.name(),
                found.len(),
                data.name
            );
            diagnostics.extend(found);
        }
        diagnostics
    }

    pub fn rules(&self) -> &[Box<dyn Rule>] {
        &self.rules
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
