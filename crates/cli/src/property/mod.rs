// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Document property model.
//!
//! The arguments or attributes section of a document is parsed into a
//! [`DocumentTree`]: top-level properties plus an arena of block definitions.
//! Block-typed properties point into the arena by [`BlockId`], so one block
//! definition is shared by every property that references it.

pub mod builder;
pub mod link;
pub mod parse;

use std::collections::HashMap;

use crate::markdown::{Line, LineId};

pub use builder::build;

/// Index of a block definition inside its [`DocumentTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockId(usize);

/// Lines of a field that hold, or should receive, each clause.
///
/// A field may wrap over several physical lines. A clause that is present is
/// addressed where it was found. A missing one is addressed where a fix would
/// insert it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClauseLines {
    pub requiredness: LineId,
    pub force_new: LineId,
    pub default_value: LineId,
    pub enums: LineId,
}

/// One parsed argument or attribute field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentProperty {
    pub name: String,
    /// First line of the field, holding the name.
    pub line: LineId,
    /// Text of the first line at parse time.
    pub content: String,
    /// Every line of the field at parse time, joined with `\n`.
    pub text: String,
    pub clause_lines: ClauseLines,
    pub required: bool,
    pub optional: bool,
    pub force_new: bool,
    pub default_value: Option<String>,
    /// Declared as a nested block ("as defined below").
    pub block: bool,
    /// Block name referenced in the text; may differ from `name`.
    pub block_type_name: String,
    /// Resolved block definition; `None` until linked or when linking failed.
    pub nested: Option<BlockId>,
    pub parse_errors: Vec<String>,
    /// Possible values in written order.
    pub enums: Vec<String>,
    /// Span of the possible-values clause within the `clause_lines.enums` line.
    pub enum_start: usize,
    pub enum_end: usize,
    /// Possible values written as a range.
    pub enum_range: bool,
    /// Several possible-values clauses; enum checks are unsafe.
    pub skip: bool,
}

impl DocumentProperty {
    /// Parse a field from its lines. Continuation lines end at the first
    /// blank line. Returns `None` when no name can be extracted.
    pub fn parse(lines: &[Line]) -> Option<Self> {
        let lines: Vec<&Line> =
            lines.iter().take_while(|l| !l.text.trim().is_empty()).collect();
        let first = *lines.first()?;
        let last = lines.last().map_or(first.id, |l| l.id);
        let name = parse::field_name(&first.text)?.to_string();

        let requiredness = lines
            .iter()
            .enumerate()
            .find_map(|(i, l)| parse::requiredness(&l.text).map(|r| (i, r)));
        let force_new = lines.iter().position(|l| parse::is_force_new(&l.text));
        let default_value = lines
            .iter()
            .enumerate()
            .find_map(|(i, l)| parse::default_value(&l.text).map(|v| (i, v)));
        let block_type_name = lines.iter().find_map(|l| parse::block_reference(&l.text));

        let mut clauses = 0;
        let mut possible_values = None;
        for (i, l) in lines.iter().enumerate() {
            if let Some(pv) = parse::possible_values(&l.text) {
                clauses += pv.clauses;
                if possible_values.is_none() {
                    possible_values = Some((i, pv));
                }
            }
        }

        let id_at = |i: Option<usize>| i.and_then(|i| lines.get(i)).map(|l| l.id);
        let default_index = default_value.as_ref().map(|(i, _)| *i);
        let enum_index = possible_values.as_ref().map(|(i, _)| *i);
        let clause_lines = ClauseLines {
            requiredness: id_at(requiredness.map(|(i, _)| i)).unwrap_or(first.id),
            force_new: id_at(force_new).unwrap_or(last),
            default_value: id_at(default_index.or(force_new)).unwrap_or(last),
            enums: id_at(enum_index.or(default_index.into_iter().chain(force_new).min()))
                .unwrap_or(last),
        };

        let requiredness = requiredness.map(|(_, r)| r);
        let mut prop = DocumentProperty {
            name,
            line: first.id,
            content: first.text.clone(),
            text: lines.iter().map(|l| l.text.as_str()).collect::<Vec<_>>().join("\n"),
            clause_lines,
            required: requiredness == Some(parse::Requiredness::Required),
            optional: requiredness == Some(parse::Requiredness::Optional),
            force_new: force_new.is_some(),
            default_value: default_value.map(|(_, v)| v),
            block: block_type_name.is_some(),
            block_type_name: block_type_name.unwrap_or_default(),
            nested: None,
            parse_errors: Vec::new(),
            enums: Vec::new(),
            enum_start: 0,
            enum_end: 0,
            enum_range: false,
            skip: false,
        };
        if let Some((_, pv)) = possible_values {
            prop.skip = clauses > 1;
            prop.enums = pv.values;
            prop.enum_start = pv.start;
            prop.enum_end = pv.end;
            prop.enum_range = pv.range;
        }
        Some(prop)
    }

    /// Block name to resolve: the referenced type name, or the property name.
    pub fn block_name(&self) -> &str {
        if self.block_type_name.is_empty() { &self.name } else { &self.block_type_name }
    }

    /// Text after the name and requiredness marker.
    pub fn description(&self) -> &str {
        parse::description(&self.content)
    }
}

/// Properties keyed by name, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentProperties {
    names: Vec<String>,
    objects: HashMap<String, DocumentProperty>,
}

impl DocumentProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a property. The first declaration wins; a later one with the same
    /// name is recorded as a parse error on the existing entry.
    pub fn insert(&mut self, prop: DocumentProperty) {
        match self.objects.get_mut(&prop.name) {
            Some(existing) => {
                existing
                    .parse_errors
                    .push(format!("duplicate fields declared for `{}`", prop.name));
            }
            None => {
                self.names.push(prop.name.clone());
                self.objects.insert(prop.name.clone(), prop);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&DocumentProperty> {
        self.objects.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut DocumentProperty> {
        self.objects.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.objects.contains_key(name)
    }

    /// Names in declaration order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Properties in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &DocumentProperty> {
        self.names.iter().filter_map(|n| self.objects.get(n))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// A parsed block definition ("A `x` block supports the following:").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockDefinition {
    /// Every name declared on the heading line.
    pub names: Vec<String>,
    /// Parent block from "of"/"within" phrasing, empty when absent.
    pub of: String,
    pub head_line: LineId,
    /// Field names in written order, duplicates included.
    pub field_names: Vec<String>,
    pub properties: DocumentProperties,
}

impl BlockDefinition {
    /// Primary name of the block.
    pub fn name(&self) -> &str {
        self.names.first().map(String::as_str).unwrap_or_default()
    }
}

/// A field line whose property name could not be extracted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedField {
    pub line: LineId,
    pub content: String,
}

/// Parsed properties of one documentation section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentTree {
    /// Properties outside any block.
    pub fields: DocumentProperties,
    /// Block definitions in written order.
    pub blocks: Vec<BlockDefinition>,
    /// Block name to the definition shared by properties in other blocks.
    pub block_definitions: HashMap<String, BlockId>,
    pub malformed: Vec<MalformedField>,
}

impl DocumentTree {
    pub fn block(&self, id: BlockId) -> Option<&BlockDefinition> {
        self.blocks.get(id.0)
    }

    /// Nested properties of a block-typed property.
    ///
    /// Falls back to the shared block definition when the linked block is
    /// missing or empty but the property names a block type different from
    /// its own name.
    pub fn nested(&self, prop: &DocumentProperty) -> Option<&DocumentProperties> {
        let linked = prop.nested.and_then(|id| self.block(id)).map(|b| &b.properties);
        if let Some(props) = linked
            && !props.is_empty()
        {
            return Some(props);
        }
        if !prop.block_type_name.is_empty() && prop.block_type_name != prop.name {
            let shared = self
                .block_definitions
                .get(&prop.block_type_name)
                .and_then(|id| self.block(*id))
                .map(|b| &b.properties);
            if shared.is_some() {
                return shared;
            }
        }
        linked
    }

    /// Every property: top-level first, then each block's in written order.
    pub fn all_properties(&self) -> impl Iterator<Item = &DocumentProperty> {
        self.fields.iter().chain(self.blocks.iter().flat_map(|b| b.properties.iter()))
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.blocks.is_empty()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
