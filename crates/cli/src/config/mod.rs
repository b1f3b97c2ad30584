// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `document-fmt.toml` configuration.

pub mod defaults;

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::rules::RULE_IDS;

/// Keys accepted at the top level of the config file.
const KNOWN_KEYS: &[&str] =
    &["version", "docs_root", "schema", "upgrade_guide", "exclude", "force_new_noun", "rules"];

/// Project configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub version: u32,

    /// Documentation root, relative to the config file.
    pub docs_root: PathBuf,

    /// Schema dump, relative to the config file.
    pub schema: PathBuf,

    /// Upgrade guide file name glob.
    pub upgrade_guide: String,

    /// Resource name globs to skip.
    pub exclude: Vec<String>,

    pub force_new_noun: String,

    pub rules: RulesConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: 1,
            docs_root: Self::default_docs_root(),
            schema: Self::default_schema(),
            upgrade_guide: defaults::paths::UPGRADE_GUIDE.to_string(),
            exclude: Vec::new(),
            force_new_noun: defaults::wording::FORCE_NEW_NOUN.to_string(),
            rules: RulesConfig::default(),
        }
    }
}

impl Config {
    fn default_docs_root() -> PathBuf {
        PathBuf::from(defaults::paths::DOCS_ROOT)
    }

    fn default_schema() -> PathBuf {
        PathBuf::from(defaults::paths::SCHEMA)
    }
}

/// Rule selection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Rules to run (empty = all).
    pub enable: Vec<String>,

    /// Rules to skip.
    pub disable: Vec<String>,
}

impl RulesConfig {
    /// Rule IDs to run: `enable` (or every rule) minus `disable`.
    pub fn selected(&self) -> Vec<String> {
        let base: Vec<String> = if self.enable.is_empty() {
            RULE_IDS.iter().map(|id| id.to_string()).collect()
        } else {
            self.enable.clone()
        };
        base.into_iter()
            .filter(|id| !self.disable.iter().any(|d| d.eq_ignore_ascii_case(id)))
            .collect()
    }
}

/// Parse config from TOML text.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    toml::from_str(content).map_err(|source| Error::Config { path: path.to_path_buf(), source })
}

/// Load config from a file.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    parse(&content, path)
}

/// Load config, warning about unrecognized keys.
pub fn load_with_warnings(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    for key in unknown_keys(&content) {
        tracing::warn!("{}: unrecognized field `{}`, ignoring", path.display(), key);
    }
    parse(&content, path)
}

/// Top-level keys the config does not understand.
pub fn unknown_keys(content: &str) -> Vec<String> {
    let Ok(table) = content.parse::<toml::Table>() else {
        return Vec::new();
    };
    table.keys().filter(|key| !KNOWN_KEYS.contains(&key.as_str())).cloned().collect()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
