// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Upgrade guide lookups.
//!
//! Major-version upgrade guides list per-resource changes. A property
//! mentioned under a resource's heading is changing across versions, so its
//! documented possible values may legitimately differ from the schema.
//!
//! The guides are read at most once, on the first query.

use std::cell::OnceCell;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use globset::{Glob, GlobMatcher};
use regex::Regex;

#[allow(clippy::expect_used)]
static IDENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([A-Za-z0-9_.]+)`").expect("valid regex pattern"));

/// Changed properties keyed by resource name.
type Changes = HashMap<String, HashSet<String>>;

/// Lazily-loaded upgrade guide changes.
#[derive(Debug, Default)]
pub struct UpgradeGuide {
    docs_root: PathBuf,
    pattern: String,
    changes: OnceCell<Changes>,
}

impl UpgradeGuide {
    /// Guides matching `pattern` in `docs_root` and `docs_root/guides`.
    pub fn new(docs_root: impl Into<PathBuf>, pattern: impl Into<String>) -> Self {
        Self { docs_root: docs_root.into(), pattern: pattern.into(), changes: OnceCell::new() }
    }

    /// A guide that lists no changes.
    pub fn empty() -> Self {
        let guide = Self::default();
        let _ = guide.changes.set(Changes::new());
        guide
    }

    /// A guide parsed from in-memory content.
    pub fn from_content(content: &str) -> Self {
        let guide = Self::default();
        let _ = guide.changes.set(parse_changes(content));
        guide
    }

    /// True when the guide mentions `property` under `resource`.
    pub fn has_change(&self, resource: &str, property: &str) -> bool {
        self.changes()
            .get(resource)
            .is_some_and(|props| props.contains(property))
    }

    fn changes(&self) -> &Changes {
        self.changes.get_or_init(|| self.load())
    }

    fn load(&self) -> Changes {
        let matcher = match Glob::new(&self.pattern) {
            Ok(glob) => glob.compile_matcher(),
            Err(_) => {
                tracing::warn!("invalid upgrade guide pattern: {}", self.pattern);
                return Changes::new();
            }
        };

        let mut changes = Changes::new();
        for dir in [self.docs_root.clone(), self.docs_root.join("guides")] {
            for path in matching_files(&dir, &matcher) {
                tracing::debug!("reading upgrade guide {}", path.display());
                match std::fs::read_to_string(&path) {
                    Ok(content) => {
                        for (resource, props) in parse_changes(&content) {
                            changes.entry(resource).or_default().extend(props);
                        }
                    }
                    Err(e) => tracing::warn!("failed to read {}: {}", path.display(), e),
                }
            }
        }
        changes
    }
}

fn matching_files(dir: &Path, matcher: &GlobMatcher) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut paths: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file())
        .filter(|p| p.file_name().is_some_and(|name| matcher.is_match(name)))
        .collect();
    paths.sort();
    paths
}

/// Collect backticked identifiers listed under resource headings.
///
/// A heading naming a resource (`### azurerm_x` or ``### `azurerm_x` ``)
/// opens its scope; any other heading closes it.
pub fn parse_changes(content: &str) -> Changes {
    let mut changes = Changes::new();
    let mut current: Option<String> = None;

    for line in content.lines() {
        if line.starts_with('#') {
            current = resource_of_heading(line);
            continue;
        }
        let Some(resource) = &current else {
            continue;
        };
        for caps in IDENT_REGEX.captures_iter(line) {
            if let Some(m) = caps.get(1)
                && m.as_str() != resource
            {
                let property = m.as_str().rsplit('.').next().unwrap_or(m.as_str());
                changes.entry(resource.clone()).or_default().insert(property.to_string());
            }
        }
    }
    changes
}

fn resource_of_heading(line: &str) -> Option<String> {
    line.trim_start_matches('#')
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| c == '`' || c == ':' || c == ','))
        .find(|w| w.contains('_') && w.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'))
        .map(str::to_string)
}

#[cfg(test)]
#[path = "upgrade_guide_tests.rs"]
mod tests;
