// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Heuristics extracting property facts from a single documentation line.
//!
//! Each function is pure and independent so a misfiring pattern can be
//! tested in isolation.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

macro_rules! static_regex {
    ($name:ident, $pattern:expr) => {
        #[allow(clippy::expect_used)]
        static $name: LazyLock<Regex> =
            LazyLock::new(|| Regex::new($pattern).expect("valid regex pattern"));
    };
}

static_regex!(FIELD_NAME_REGEX, r"^\s*\*\s*`([^`]+)`");
static_regex!(FIELD_PREFIX_REGEX, r"^\s*\*\s*`[^`]+`\s*(?:-|–|:)?\s*");
static_regex!(REQUIREDNESS_REGEX, r"\(\s*(?i:(required|optional))\s*\)");
static_regex!(
    FORCE_NEW_REGEX,
    r"(?i)\s*\bchanging\b[^.]*?\bforces?\b[^.]*?\b(?:re-?)?created\b\.?"
);
static_regex!(
    DEFAULT_REGEX,
    r#"(?i)\(?\b(?:it\s+|this\s+)?(?:defaults?\s+to|default\s+value\s+is|default\s+is)\s+(?:`([^`]*)`|"([^"]*)"|'([^']*)')\)?\.?"#
);
static_regex!(
    ENUM_PHRASE_REGEX,
    r"(?i)\b(?:possible\s+values?\s+(?:are|is|includes|include)|(?:must|should|can)\s+be\s+(?:one\s+of(?:\s+the\s+following)?|either)|(?:valid|allowed|accepted|supported)\s+(?:values|options)\s+(?:are|is|includes|include))\s*:?\s*"
);
static_regex!(
    ENUM_RANGE_REGEX,
    r"(?i)\b(?:possible\s+values\s+)?ranges?\s+from\s+`([^`]+)`\s+(?:to|and|through)\s+`([^`]+)`"
);
static_regex!(ENUM_SEPARATOR_REGEX, r"^\s*(?:,\s*(?:or\s+|and\s+)?|or\s+|and\s+)");
static_regex!(
    BLOCK_REFERENCE_REGEX,
    r"(?i)`([\w.\-]+)`\s+blocks?\b[^.]*?\b(?:as\s+)?(?:defined|documented|specified|described)\s+(?:below|above)"
);
static_regex!(BACKTICK_REGEX, r"`([^`]+)`");
static_regex!(BLOCK_WORD_REGEX, r"(?i)\bblocks?\b");
static_regex!(
    BLOCK_PARENT_REGEX,
    r"(?i)\bblocks?\b.*?\b(?:of|within)\s+(?:the\s+|an?\s+)?`([^`]+)`"
);

/// Requiredness marker of an argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requiredness {
    Required,
    Optional,
}

/// Property name: the first backtick-quoted token after the list marker.
pub fn field_name(line: &str) -> Option<&str> {
    FIELD_NAME_REGEX.captures(line).and_then(|c| c.get(1)).map(|m| m.as_str().trim())
}

/// Span of the list marker, name and separator (`* `name` - `).
pub fn field_prefix_span(line: &str) -> Option<Range<usize>> {
    FIELD_PREFIX_REGEX.find(line).map(|m| m.range())
}

/// Text after the name, dash and requiredness marker.
pub fn description(line: &str) -> &str {
    let rest = match FIELD_PREFIX_REGEX.find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    };
    match REQUIREDNESS_REGEX.find(rest) {
        Some(m) if m.start() == 0 => rest[m.end()..].trim_start(),
        _ => rest,
    }
}

/// `(Required)` / `(Optional)` marker, if present.
pub fn requiredness(line: &str) -> Option<Requiredness> {
    let caps = REQUIREDNESS_REGEX.captures(line)?;
    match caps.get(1)?.as_str().to_lowercase().as_str() {
        "required" => Some(Requiredness::Required),
        _ => Some(Requiredness::Optional),
    }
}

/// Span of the requiredness marker.
pub fn requiredness_span(line: &str) -> Option<Range<usize>> {
    REQUIREDNESS_REGEX.find(line).map(|m| m.range())
}

/// True when the line carries a "Changing this forces a new X to be created" sentence.
pub fn is_force_new(line: &str) -> bool {
    FORCE_NEW_REGEX.is_match(line)
}

/// Span of the force-new sentence, including leading whitespace and trailing period.
pub fn force_new_span(line: &str) -> Option<Range<usize>> {
    FORCE_NEW_REGEX.find(line).map(|m| m.range())
}

/// A default value clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultClause {
    /// The literal; a quoted empty string (`""`) yields an empty value.
    pub value: String,
    /// Span of the whole clause.
    pub span: Range<usize>,
    /// Span of the literal including its delimiters.
    pub literal: Range<usize>,
}

/// Documented default value clause.
pub fn default_clause(line: &str) -> Option<DefaultClause> {
    let caps = DEFAULT_REGEX.captures(line)?;
    let whole = caps.get(0)?;
    let (group, delimited) = (1..=3).find_map(|i| caps.get(i).map(|m| (i, m)))?;
    let raw = delimited.as_str();
    let value = if group == 1 && (raw == r#""""# || raw == "''") {
        String::new()
    } else {
        raw.to_string()
    };
    Some(DefaultClause {
        value,
        span: whole.range(),
        literal: delimited.start() - 1..delimited.end() + 1,
    })
}

/// Documented default value.
pub fn default_value(line: &str) -> Option<String> {
    default_clause(line).map(|c| c.value)
}

/// Possible values extracted from a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PossibleValues {
    /// Values in the order written.
    pub values: Vec<String>,
    /// Byte offset where the clause starts.
    pub start: usize,
    /// Byte offset after the last value.
    pub end: usize,
    /// Written as "range from `X` to `Y`".
    pub range: bool,
    /// Number of possible-values clauses found on the line.
    pub clauses: usize,
}

/// Parse possible values from a line.
pub fn possible_values(line: &str) -> Option<PossibleValues> {
    let mut found: Vec<PossibleValues> = Vec::new();

    for m in ENUM_PHRASE_REGEX.find_iter(line) {
        let (values, end) = enum_list(line, m.end());
        if !values.is_empty() {
            found.push(PossibleValues { values, start: m.start(), end, range: false, clauses: 0 });
        }
    }
    for caps in ENUM_RANGE_REGEX.captures_iter(line) {
        let (Some(whole), Some(lo), Some(hi)) = (caps.get(0), caps.get(1), caps.get(2)) else {
            continue;
        };
        found.push(PossibleValues {
            values: vec![lo.as_str().to_string(), hi.as_str().to_string()],
            start: whole.start(),
            end: whole.end(),
            range: true,
            clauses: 0,
        });
    }

    let clauses = found.len();
    let mut first = found.into_iter().min_by_key(|p| p.start)?;
    first.clauses = clauses;
    Some(first)
}

/// Read consecutive backtick literals starting at `pos`.
fn enum_list(line: &str, mut pos: usize) -> (Vec<String>, usize) {
    let mut values: Vec<String> = Vec::new();
    let mut end = pos;
    loop {
        let rest = &line[pos..];
        let Some(body) = rest.strip_prefix('`') else {
            break;
        };
        let Some(close) = body.find('`') else {
            break;
        };
        let value = &body[..close];
        if !values.iter().any(|v| v == value) {
            values.push(value.to_string());
        }
        pos += close + 2;
        end = pos;

        match ENUM_SEPARATOR_REGEX.find(&line[pos..]) {
            Some(sep) if line[pos + sep.end()..].starts_with('`') => pos += sep.end(),
            _ => break,
        }
    }
    (values, end)
}

/// Block type named by "A `x` block as defined below" phrasing.
pub fn block_reference(line: &str) -> Option<String> {
    BLOCK_REFERENCE_REGEX
        .captures(line)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Block names declared on a block heading line.
pub fn block_head_names(line: &str) -> Vec<String> {
    let head = match BLOCK_WORD_REGEX.find(line) {
        Some(m) => &line[..m.start()],
        None => line,
    };
    BACKTICK_REGEX
        .captures_iter(head)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .collect()
}

/// Parent block named by "of"/"within" phrasing on a block heading line.
pub fn block_head_parent(line: &str) -> Option<String> {
    BLOCK_PARENT_REGEX
        .captures(line)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
