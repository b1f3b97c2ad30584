// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Markdown tokenizer.
//!
//! Turns the lines of a documentation section into a flat list of typed
//! items. Every input line belongs to exactly one item, so joining the
//! content of all items reproduces the input.

use std::sync::LazyLock;

use regex::Regex;

/// Heading line introducing one or more blocks, e.g.
/// "A `management`, `portal` block supports the following:".
#[allow(clippy::expect_used)]
static BLOCK_HEAD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:(?i:an?|the|each|both)\s+)?(?:`[^`]+`\s*(?:,|/|\band\b|\bor\b)?\s*)+(?:\([^)]*\)\s*)?blocks?\b",
    )
    .expect("valid regex pattern")
});

/// Kind of a tokenized item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// `#` heading of any level.
    Header,
    /// `*` list entry describing one property.
    Field,
    /// Sentence introducing a nested block definition.
    BlockHead,
    /// `->`, `~>` or `!>` callout.
    Note,
    /// Fenced code block.
    Example,
    /// `---` rule in the middle of a section.
    Separator,
    /// Leading `---` delimited front matter.
    FrontMatter,
    /// Anything else.
    PlainText,
}

/// A run of lines of one kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item<'a> {
    pub kind: ItemKind,
    /// First line index (0-based, inclusive).
    pub from_line: usize,
    /// Last line index (0-based, inclusive).
    pub to_line: usize,
    pub lines: Vec<&'a str>,
}

impl<'a> Item<'a> {
    fn new(kind: ItemKind, idx: usize, line: &'a str) -> Self {
        Self { kind, from_line: idx, to_line: idx, lines: vec![line] }
    }

    fn push(&mut self, idx: usize, line: &'a str) {
        self.to_line = idx;
        self.lines.push(line);
    }

    /// The item's lines joined with `\n`.
    pub fn content(&self) -> String {
        self.lines.join("\n")
    }

    /// First line of the item.
    pub fn head(&self) -> &'a str {
        self.lines.first().copied().unwrap_or_default()
    }

    /// Heading level for `Header` items, 0 otherwise.
    pub fn level(&self) -> usize {
        match self.kind {
            ItemKind::Header => self.head().chars().take_while(|c| *c == '#').count(),
            _ => 0,
        }
    }
}

/// Classification of a single line before merging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineClass {
    Header,
    Field,
    BlockHead,
    Note,
    Fence,
    Rule,
    Blank,
    Text,
}

fn classify(line: &str) -> LineClass {
    let trimmed = line.trim_start();
    if line.starts_with('#') {
        return LineClass::Header;
    }
    if trimmed.starts_with("```") {
        return LineClass::Fence;
    }
    if is_rule(line) {
        return LineClass::Rule;
    }
    if trimmed.starts_with('*') && !trimmed.starts_with("**") {
        return LineClass::Field;
    }
    if trimmed.starts_with("->") || trimmed.starts_with("~>") || trimmed.starts_with("!>") {
        return LineClass::Note;
    }
    if trimmed.is_empty() {
        return LineClass::Blank;
    }
    if is_block_head(trimmed) {
        return LineClass::BlockHead;
    }
    LineClass::Text
}

/// True for a horizontal rule / front matter delimiter (`---`).
pub fn is_rule(line: &str) -> bool {
    let trimmed = line.trim_end();
    trimmed.len() >= 3 && trimmed.chars().all(|c| c == '-')
}

/// True when a line introduces a block definition.
pub fn is_block_head(line: &str) -> bool {
    BLOCK_HEAD_REGEX.is_match(line.trim_start())
}

/// Tokenize lines into items.
pub fn tokenize<'a>(lines: &[&'a str]) -> Vec<Item<'a>> {
    let mut items: Vec<Item<'a>> = Vec::new();
    // Front matter and fenced examples swallow everything until they close.
    let mut open: Option<ItemKind> = None;

    for (idx, &line) in lines.iter().enumerate() {
        if let Some(kind) = open
            && let Some(last) = items.last_mut()
        {
            last.push(idx, line);
            let closes = match kind {
                ItemKind::FrontMatter => is_rule(line),
                _ => line.trim_start().starts_with("```"),
            };
            if closes {
                open = None;
            }
            continue;
        }

        match classify(line) {
            LineClass::Header => items.push(Item::new(ItemKind::Header, idx, line)),
            LineClass::Field => items.push(Item::new(ItemKind::Field, idx, line)),
            LineClass::BlockHead => items.push(Item::new(ItemKind::BlockHead, idx, line)),
            LineClass::Note => items.push(Item::new(ItemKind::Note, idx, line)),
            LineClass::Fence => {
                items.push(Item::new(ItemKind::Example, idx, line));
                open = Some(ItemKind::Example);
            }
            LineClass::Rule if idx == 0 => {
                items.push(Item::new(ItemKind::FrontMatter, idx, line));
                open = Some(ItemKind::FrontMatter);
            }
            LineClass::Rule => items.push(Item::new(ItemKind::Separator, idx, line)),
            LineClass::Blank => match items.last_mut() {
                Some(last) => last.push(idx, line),
                None => items.push(Item::new(ItemKind::PlainText, idx, line)),
            },
            LineClass::Text => match items.last_mut() {
                Some(last)
                    if matches!(
                        last.kind,
                        ItemKind::Field
                            | ItemKind::FrontMatter
                            | ItemKind::Example
                            | ItemKind::PlainText
                    ) =>
                {
                    last.push(idx, line)
                }
                _ => items.push(Item::new(ItemKind::PlainText, idx, line)),
            },
        }
    }

    items
}

#[cfg(test)]
#[path = "mark_tests.rs"]
mod tests;
