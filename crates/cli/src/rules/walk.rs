// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Lock-step traversal of schema and documentation trees.

use crate::markdown::SectionKind;
use crate::property::{DocumentProperties, DocumentProperty, DocumentTree};
use crate::resource_data::ResourceData;
use crate::schema::{SchemaProperties, SchemaProperty};

/// Nesting limit; shared block definitions can reference each other.
const MAX_DEPTH: usize = 16;

/// One level of matching schema and documented properties.
pub struct Level<'a> {
    pub section: SectionKind,
    /// Dotted path of the enclosing block, empty at the top.
    pub path: String,
    pub depth: usize,
    pub schema: &'a SchemaProperties,
    pub doc: &'a DocumentProperties,
}

impl Level<'_> {
    /// Dotted path of a property at this level.
    pub fn path_of(&self, name: &str) -> String {
        if self.path.is_empty() { name.to_string() } else { format!("{}.{name}", self.path) }
    }

    /// Whether the schema property belongs in this section: arguments are
    /// settable, attributes computed-only. Deprecated properties never are.
    pub fn expects(&self, prop: &SchemaProperty) -> bool {
        if prop.is_deprecated() {
            return false;
        }
        match self.section {
            SectionKind::Attributes => prop.is_computed_only(),
            _ => prop.is_argument(),
        }
    }
}

/// A schema property and the documentation line describing it.
pub struct Pair<'a> {
    pub path: String,
    pub schema: &'a SchemaProperty,
    pub doc: &'a DocumentProperty,
}

/// Every level of a section, top level first.
pub fn levels(data: &ResourceData, section: SectionKind) -> Vec<Level<'_>> {
    let tree = data.tree(section);
    let mut out = Vec::new();
    collect(tree, section, String::new(), 0, &data.schema, &tree.fields, &mut out);
    out
}

fn collect<'a>(
    tree: &'a DocumentTree,
    section: SectionKind,
    path: String,
    depth: usize,
    schema: &'a SchemaProperties,
    doc: &'a DocumentProperties,
    out: &mut Vec<Level<'a>>,
) {
    let level = Level { section, path, depth, schema, doc };
    let mut children = Vec::new();
    if depth < MAX_DEPTH {
        for prop in schema.iter() {
            let (Some(nested_schema), Some(doc_prop)) = (&prop.nested, doc.get(&prop.name)) else {
                continue;
            };
            if let Some(nested_doc) = tree.nested(doc_prop) {
                children.push((level.path_of(&prop.name), nested_schema, nested_doc));
            }
        }
    }
    out.push(level);
    for (path, nested_schema, nested_doc) in children {
        collect(tree, section, path, depth + 1, nested_schema, nested_doc, out);
    }
}

/// Documented properties matched with their schema, for one section.
pub fn pairs(data: &ResourceData, section: SectionKind) -> Vec<Pair<'_>> {
    let mut out = Vec::new();
    for level in levels(data, section) {
        for schema in level.schema.iter() {
            if !level.expects(schema) {
                continue;
            }
            if let Some(doc) = level.doc.get(&schema.name) {
                out.push(Pair { path: level.path_of(&schema.name), schema, doc });
            }
        }
    }
    out
}

#[cfg(test)]
#[path = "walk_tests.rs"]
mod tests;
