// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Structure builder.
//!
//! Walks tokenized items, turning field items into properties and block
//! heading items into block definitions, then links block references.

use crate::markdown::mark::{self, ItemKind};
use crate::markdown::{Line, LineId};

use super::parse::{block_head_names, block_head_parent};
use super::{
    BlockDefinition, BlockId, DocumentProperties, DocumentProperty, DocumentTree, MalformedField,
    link,
};

/// A block being assembled. At most one is open at a time.
#[derive(Debug)]
struct MarkBlock {
    names: Vec<String>,
    of: String,
    head_line: LineId,
    fields: Vec<DocumentProperty>,
}

impl MarkBlock {
    fn into_definition(self) -> BlockDefinition {
        let field_names = self.fields.iter().map(|f| f.name.clone()).collect();
        let mut properties = DocumentProperties::new();
        for field in self.fields {
            properties.insert(field);
        }
        BlockDefinition {
            names: self.names,
            of: self.of,
            head_line: self.head_line,
            field_names,
            properties,
        }
    }
}

#[derive(Debug, Default)]
struct Mark {
    fields: DocumentProperties,
    blocks: Vec<MarkBlock>,
    open: Option<MarkBlock>,
    malformed: Vec<MalformedField>,
}

impl Mark {
    fn add_field(&mut self, lines: &[Line]) {
        let Some(line) = lines.first() else {
            return;
        };
        let Some(prop) = DocumentProperty::parse(lines) else {
            self.malformed.push(MalformedField { line: line.id, content: line.text.clone() });
            return;
        };
        match self.open.as_mut() {
            Some(block) => block.fields.push(prop),
            None => self.fields.insert(prop),
        }
    }

    fn open_block(&mut self, line: &Line) {
        self.close();
        self.open = Some(MarkBlock {
            names: block_head_names(&line.text),
            of: block_head_parent(&line.text).unwrap_or_default(),
            head_line: line.id,
            fields: Vec::new(),
        });
    }

    fn close(&mut self) {
        if let Some(block) = self.open.take() {
            self.blocks.push(block);
        }
    }

    fn into_tree(mut self) -> DocumentTree {
        self.close();
        let blocks: Vec<BlockDefinition> =
            self.blocks.into_iter().map(MarkBlock::into_definition).collect();

        let mut tree = DocumentTree {
            fields: self.fields,
            block_definitions: Default::default(),
            blocks,
            malformed: self.malformed,
        };

        // Unscoped definitions take precedence for shared lookups.
        let mut order: Vec<usize> = (0..tree.blocks.len()).collect();
        order.sort_by_key(|i| !tree.blocks[*i].of.is_empty());
        for idx in order {
            for name in &tree.blocks[idx].names {
                tree.block_definitions.entry(name.clone()).or_insert(BlockId(idx));
            }
        }
        tree
    }
}

/// Build the property tree of a documentation section.
pub fn build(lines: &[Line]) -> DocumentTree {
    let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
    let mut state = Mark::default();

    for item in mark::tokenize(&texts) {
        let Some(line) = lines.get(item.from_line) else {
            continue;
        };
        match item.kind {
            ItemKind::Field => {
                state.add_field(lines.get(item.from_line..=item.to_line).unwrap_or_default())
            }
            ItemKind::BlockHead => state.open_block(line),
            ItemKind::Separator => state.close(),
            _ => {}
        }
    }

    let mut tree = state.into_tree();
    link::link(&mut tree);
    tree
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
