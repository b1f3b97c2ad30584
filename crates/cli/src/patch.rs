// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Line rewrites used by fixes.
//!
//! Every function takes the current text of one documentation line and
//! returns its replacement. Spans are recomputed from the text passed in, so
//! a line already rewritten by another rule in the same pass is handled
//! correctly. Nothing outside the targeted clause is touched.

use std::cmp::Ordering;
use std::sync::LazyLock;

use regex::Regex;

use crate::property::parse::{self, Requiredness};

#[allow(clippy::expect_used)]
static ID_PREFIX_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:specifies\s+)?(?:the\s+|an?\s+)?(?:resource\s+|unique\s+)?id\s+(?:of|for)\s+(?:the\s+|an?\s+|this\s+)?",
    )
    .expect("valid regex pattern")
});

#[allow(clippy::expect_used)]
static TIMEOUT_LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\*\s*`(\w+)`\s*-\s*\(\s*[Dd]efaults\s+to\s+([^)]*)\)\s*(.*)$")
        .expect("valid regex pattern")
});

/// Canonical prefix of ID argument descriptions.
pub const ID_DESCRIPTION_PREFIX: &str = "The ID of the ";

/// Canonical force-new sentence.
pub fn force_new_sentence(noun: &str) -> String {
    format!("Changing this forces a new {noun} to be created.")
}

/// Replace the requiredness marker, or insert one after the name.
pub fn set_requiredness(line: &str, requiredness: Requiredness) -> String {
    let marker = match requiredness {
        Requiredness::Required => "(Required)",
        Requiredness::Optional => "(Optional)",
    };
    if let Some(span) = parse::requiredness_span(line) {
        return format!("{}{marker}{}", &line[..span.start], &line[span.end..]);
    }
    let Some(prefix) = parse::field_prefix_span(line) else {
        return line.to_string();
    };
    let head = line[..prefix.end].trim_end();
    let rest = &line[prefix.end..];
    let separator = if head.ends_with('-') || head.ends_with('–') || head.ends_with(':') {
        ""
    } else {
        " -"
    };
    if rest.is_empty() {
        format!("{head}{separator} {marker}")
    } else {
        format!("{head}{separator} {marker} {rest}")
    }
}

/// Append the force-new sentence unless present.
pub fn add_force_new(line: &str, noun: &str) -> String {
    if parse::is_force_new(line) {
        return line.to_string();
    }
    append_sentence(line, &force_new_sentence(noun))
}

/// Remove the force-new sentence.
pub fn remove_force_new(line: &str) -> String {
    match parse::force_new_span(line) {
        Some(span) => join_around(line, span.start, span.end),
        None => line.to_string(),
    }
}

/// Render a default literal as it appears in prose.
pub fn render_default(value: &str) -> String {
    if value.is_empty() { "`\"\"`".to_string() } else { format!("`{value}`") }
}

/// Set, rewrite or remove the "Defaults to" clause.
pub fn set_default(line: &str, value: Option<&str>) -> String {
    let clause = parse::default_clause(line);
    match (value, clause) {
        (Some(value), Some(clause)) => format!(
            "{}{}{}",
            &line[..clause.literal.start],
            render_default(value),
            &line[clause.literal.end..]
        ),
        (Some(value), None) => {
            let sentence = format!("Defaults to {}.", render_default(value));
            match parse::force_new_span(line) {
                Some(span) => insert_sentence(line, span.start, &sentence),
                None => append_sentence(line, &sentence),
            }
        }
        (None, Some(clause)) => join_around(line, clause.span.start, clause.span.end),
        (None, None) => line.to_string(),
    }
}

/// Weekday names in chronological order.
const WEEKDAYS: [&str; 7] =
    ["monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday"];

fn weekday_index(value: &str) -> Option<usize> {
    let lower = value.to_lowercase();
    WEEKDAYS.iter().position(|d| *d == lower)
}

/// Sort values for rendering: chronologically when all are weekdays,
/// otherwise case-insensitively.
pub fn sort_values(values: &[String]) -> Vec<String> {
    let mut sorted = values.to_vec();
    if !sorted.is_empty() && sorted.iter().all(|v| weekday_index(v).is_some()) {
        sorted.sort_by_key(|v| weekday_index(v));
    } else {
        sorted.sort_by(|a, b| match a.to_lowercase().cmp(&b.to_lowercase()) {
            Ordering::Equal => a.cmp(b),
            other => other,
        });
    }
    sorted
}

/// Render `A`, `B` and `C`.
pub fn render_enum_list(values: &[String]) -> String {
    let quoted: Vec<String> = values.iter().map(|v| format!("`{v}`")).collect();
    match quoted.split_last() {
        None => String::new(),
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{} and {last}", rest.join(", ")),
    }
}

/// "Possible values are `A` and `B`" (no trailing period).
pub fn possible_values_clause(values: &[String]) -> String {
    let list = render_enum_list(values);
    if values.len() == 1 {
        format!("Possible value is {list}")
    } else {
        format!("Possible values are {list}")
    }
}

/// Replace the possible-values clause, or insert one.
///
/// A new clause goes before a default or force-new clause when one exists,
/// otherwise at the end of the line.
pub fn set_possible_values(line: &str, values: &[String]) -> String {
    let clause = possible_values_clause(&sort_values(values));

    if let Some(pv) = parse::possible_values(line) {
        let mid_sentence = line[..pv.start]
            .trim_end()
            .chars()
            .last()
            .is_some_and(|c| !matches!(c, '.' | '!' | '?' | ':' | ')' | '-'));
        let clause = if mid_sentence { lowercase_first(&clause) } else { clause };
        return format!("{}{clause}{}", &line[..pv.start], &line[pv.end..]);
    }

    let sentence = format!("{clause}.");
    let default_start = parse::default_clause(line).map(|c| c.span.start);
    let force_new_start = parse::force_new_span(line).map(|s| s.start);
    match default_start.into_iter().chain(force_new_start).min() {
        Some(pos) => insert_sentence(line, pos, &sentence),
        None => append_sentence(line, &sentence),
    }
}

/// Rewrite an ID-ish description prefix to "The ID of the".
///
/// Returns `None` when the description has no recognizable prefix.
pub fn set_id_description(line: &str) -> Option<String> {
    let description = parse::description(line);
    if description.starts_with(ID_DESCRIPTION_PREFIX) {
        return Some(line.to_string());
    }
    let offset = line.len() - description.len();
    let prefix = ID_PREFIX_REGEX.find(description)?;
    Some(format!(
        "{}{ID_DESCRIPTION_PREFIX}{}",
        &line[..offset],
        &description[prefix.end()..]
    ))
}

/// Render a timeout duration ("1 hour", "30 minutes").
pub fn format_duration(minutes: u32) -> String {
    let (n, unit) = if minutes >= 60 && minutes % 60 == 0 {
        (minutes / 60, "hour")
    } else {
        (minutes, "minute")
    };
    if n == 1 { format!("{n} {unit}") } else { format!("{n} {unit}s") }
}

/// Parse a duration written as "N minutes" or "N hours".
pub fn parse_duration(text: &str) -> Option<u32> {
    let mut words = text.split_whitespace();
    let n: u32 = words.next()?.parse().ok()?;
    let unit = words.next()?.to_lowercase();
    match unit.trim_end_matches('s') {
        "minute" => Some(n),
        "hour" => n.checked_mul(60),
        _ => None,
    }
}

/// One documented timeout line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeoutLine {
    pub operation: String,
    /// Minutes, when the duration text is understood.
    pub minutes: Option<u32>,
    pub description: String,
}

/// Parse "* `create` - (Defaults to 30 minutes) Used when creating the X."
pub fn parse_timeout_line(line: &str) -> Option<TimeoutLine> {
    let caps = TIMEOUT_LINE_REGEX.captures(line)?;
    Some(TimeoutLine {
        operation: caps.get(1)?.as_str().to_string(),
        minutes: parse_duration(caps.get(2)?.as_str()),
        description: caps.get(3).map(|m| m.as_str().trim().to_string()).unwrap_or_default(),
    })
}

/// Render a timeout line.
pub fn timeout_line(operation: &str, minutes: u32, description: &str) -> String {
    format!("* `{operation}` - (Defaults to {}) {description}", format_duration(minutes))
}

fn lowercase_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Close the text as a sentence so another sentence can follow.
fn end_sentence(text: &str) -> String {
    let trimmed = text.trim_end();
    if parse::description(trimmed).trim().is_empty() {
        return trimmed.to_string();
    }
    let base = trimmed.trim_end_matches([',', ';']);
    if base.ends_with(['.', '!', '?', ':']) {
        base.to_string()
    } else {
        format!("{base}.")
    }
}

/// Append a sentence at the end of the line.
fn append_sentence(line: &str, sentence: &str) -> String {
    format!("{} {sentence}", end_sentence(line))
}

/// Insert a sentence at `pos`, keeping the text after it.
fn insert_sentence(line: &str, pos: usize, sentence: &str) -> String {
    let after = line[pos..].trim_start();
    format!("{} {sentence} {after}", end_sentence(&line[..pos]))
}

/// Remove `start..end` and rejoin the remaining text with one space.
fn join_around(line: &str, start: usize, end: usize) -> String {
    let before = line[..start].trim_end();
    let after = line[end..].trim_start();
    if after.is_empty() {
        match before.strip_suffix(',') {
            Some(stripped) => format!("{stripped}."),
            None => before.to_string(),
        }
    } else {
        format!("{before} {after}")
    }
}

#[cfg(test)]
#[path = "patch_tests.rs"]
mod tests;
