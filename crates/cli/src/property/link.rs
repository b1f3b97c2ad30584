// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Block linker.
//!
//! Resolves every block-typed property to the block definition it references.

use std::collections::BTreeSet;

use super::{BlockDefinition, BlockId, DocumentTree};

/// Outcome of looking up a block by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    Found(BlockId),
    NotFound,
    /// Same-shaped definitions with different fields.
    Duplicate,
}

/// Find the block definition for `name`, preferring one scoped to a parent.
///
/// `parents` are the names of the block containing the property, empty at
/// top level.
pub fn block_of_name(blocks: &[BlockDefinition], name: &str, parents: &[String]) -> Lookup {
    let matches: Vec<usize> = blocks
        .iter()
        .enumerate()
        .filter(|(_, b)| b.names.iter().any(|n| n == name))
        .map(|(i, _)| i)
        .collect();
    if matches.is_empty() {
        return Lookup::NotFound;
    }

    if let Some(&idx) = matches.iter().find(|&&i| parents.contains(&blocks[i].of)) {
        return Lookup::Found(BlockId(idx));
    }

    let unscoped: Vec<usize> =
        matches.iter().copied().filter(|&i| blocks[i].of.is_empty()).collect();
    let candidates = if unscoped.is_empty() { matches } else { unscoped };

    let first = &blocks[candidates[0]];
    let conflicting = candidates[1..].iter().map(|&i| &blocks[i]).any(|other| {
        other.of == first.of
            && other.field_names.len() == first.field_names.len()
            && field_set(other) != field_set(first)
    });
    if conflicting {
        return Lookup::Duplicate;
    }
    Lookup::Found(BlockId(candidates[0]))
}

fn field_set(block: &BlockDefinition) -> BTreeSet<&str> {
    block.field_names.iter().map(String::as_str).collect()
}

/// Where a property lives inside the tree.
#[derive(Debug, Clone, Copy)]
enum Owner {
    Top,
    Block(usize),
}

#[derive(Debug)]
enum Resolution {
    Linked(BlockId),
    Failed(String),
}

fn resolve(
    blocks: &[BlockDefinition],
    name: &str,
    wanted: &str,
    parents: &[String],
) -> Resolution {
    match block_of_name(blocks, wanted, parents) {
        Lookup::Found(id) if blocks[id.0].properties.is_empty() => Resolution::Failed(format!(
            "`{name}` is documented as a block but block `{wanted}` defines no fields"
        )),
        Lookup::Found(id) => Resolution::Linked(id),
        Lookup::Duplicate => {
            Resolution::Failed(format!("duplicate block exists as name `{wanted}`"))
        }
        Lookup::NotFound => {
            if wanted != name && matches!(block_of_name(blocks, name, parents), Lookup::Found(_)) {
                Resolution::Failed(format!(
                    "block `{wanted}` is not defined, it may be misspelled: a block is defined as `{name}`"
                ))
            } else {
                Resolution::Failed(format!("block `{wanted}` not defined"))
            }
        }
    }
}

/// Link every block-typed property of the tree.
pub fn link(tree: &mut DocumentTree) {
    let mut resolutions: Vec<(Owner, String, Resolution)> = Vec::new();

    for prop in tree.fields.iter().filter(|p| p.block) {
        let resolution = resolve(&tree.blocks, &prop.name, prop.block_name(), &[]);
        resolutions.push((Owner::Top, prop.name.clone(), resolution));
    }
    for (idx, block) in tree.blocks.iter().enumerate() {
        for prop in block.properties.iter().filter(|p| p.block) {
            let resolution = resolve(&tree.blocks, &prop.name, prop.block_name(), &block.names);
            resolutions.push((Owner::Block(idx), prop.name.clone(), resolution));
        }
    }

    for (owner, name, resolution) in resolutions {
        let props = match owner {
            Owner::Top => &mut tree.fields,
            Owner::Block(idx) => &mut tree.blocks[idx].properties,
        };
        let Some(prop) = props.get_mut(&name) else {
            continue;
        };
        match resolution {
            Resolution::Linked(id) => prop.nested = Some(id),
            Resolution::Failed(message) => {
                prop.nested = None;
                prop.parse_errors.push(message);
            }
        }
    }
}

#[cfg(test)]
#[path = "link_tests.rs"]
mod tests;
