// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Resource runner with error recovery.
//!
//! Drives each resource through read, rules and write, one at a time.
//! I/O errors are recorded on the failing resource's report so the rest
//! of the batch still runs.

use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::Serialize;

use crate::diagnostic::Diagnostic;
use crate::error::{Error, Result};
use crate::markdown::Document;
use crate::resource_data::ResourceData;
use crate::rules::RuleEngine;
use crate::schema::{ProviderSchema, Resource};

/// Configuration for the runner.
#[derive(Debug, Clone, Default)]
pub struct RunnerConfig {
    /// Documentation root.
    pub docs_root: PathBuf,

    /// Apply fixes and write changed documents.
    pub fix: bool,

    /// Only these resources (empty = all).
    pub resources: Vec<String>,

    /// Resource name globs to skip.
    pub exclude: Vec<String>,
}

/// Why a resource was not checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Matched an exclude pattern.
    Excluded,
    /// Documentation is generated.
    Generated,
    /// Deprecated and undocumented.
    Deprecated,
}

/// Outcome of one resource.
#[derive(Debug, Serialize)]
pub struct ResourceReport {
    pub resource: String,
    pub file: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipped: Option<SkipReason>,
    pub written: bool,
    pub diagnostics: Vec<Diagnostic>,
}

impl ResourceReport {
    fn new(resource: &str, file: PathBuf) -> Self {
        Self {
            resource: resource.to_string(),
            file,
            error: None,
            skipped: None,
            written: false,
            diagnostics: Vec::new(),
        }
    }

    /// Diagnostics that still need attention.
    pub fn remaining(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_remaining())
    }

    /// Whether this resource should fail the run.
    pub fn is_failure(&self) -> bool {
        self.error.is_some() || self.remaining().next().is_some()
    }
}

/// The runner checks resources sequentially.
pub struct Runner {
    config: RunnerConfig,
    exclude: GlobSet,
}

impl Runner {
    pub fn new(config: RunnerConfig) -> Self {
        let exclude = build_glob_set(&config.exclude);
        Self { config, exclude }
    }

    /// Run the engine over every selected resource of the schema.
    ///
    /// Resources run in schema order, or in the order they were requested.
    pub fn run(&self, schema: &ProviderSchema, engine: &RuleEngine) -> Vec<ResourceReport> {
        if self.config.resources.is_empty() {
            return schema.resources.iter().map(|r| self.run_resource(r, engine)).collect();
        }
        self.config
            .resources
            .iter()
            .map(|name| match schema.resource(name) {
                Some(resource) => self.run_resource(resource, engine),
                None => {
                    tracing::warn!("{}: not found in schema", name);
                    let mut report = ResourceReport::new(name, PathBuf::new());
                    report.error = Some(format!("resource `{name}` not found in schema"));
                    report
                }
            })
            .collect()
    }

    /// Check one resource, recording any error on its report.
    pub fn run_resource(&self, resource: &Resource, engine: &RuleEngine) -> ResourceReport {
        let docs_root = &self.config.docs_root;
        let path = resource.doc_path(docs_root);
        let mut report = ResourceReport::new(&resource.name, path.clone());

        if let Some(reason) = self.skip_reason(resource, &path) {
            tracing::debug!("{}: skipped ({:?})", resource.name, reason);
            report.skipped = Some(reason);
            return report;
        }

        match self.check(resource, &path, engine) {
            Ok((diagnostics, written)) => {
                report.diagnostics = diagnostics;
                report.written = written;
            }
            Err(e) => {
                tracing::warn!("{}: {}", resource.name, e);
                report.error = Some(e.to_string());
            }
        }
        report
    }

    fn skip_reason(&self, resource: &Resource, path: &Path) -> Option<SkipReason> {
        if self.exclude.is_match(&resource.name) {
            return Some(SkipReason::Excluded);
        }
        if resource.generated_path(&self.config.docs_root).exists() {
            return Some(SkipReason::Generated);
        }
        if resource.deprecation_message.is_some() && !path.exists() {
            return Some(SkipReason::Deprecated);
        }
        None
    }

    fn check(
        &self,
        resource: &Resource,
        path: &Path,
        engine: &RuleEngine,
    ) -> Result<(Vec<Diagnostic>, bool)> {
        if !path.exists() {
            return Err(Error::MissingDocument(path.to_path_buf()));
        }
        let document = Document::read(path)?;
        let mut data = ResourceData::new(resource, document);
        tracing::debug!("{}: checking {}", resource.name, path.display());

        let diagnostics = engine.run(&mut data, self.config.fix);

        let mut written = false;
        if self.config.fix && data.document.has_change() {
            data.document.write()?;
            tracing::info!("{}: wrote {}", resource.name, path.display());
            written = true;
        }
        Ok((diagnostics, written))
    }
}

/// Build a GlobSet from pattern strings.
fn build_glob_set(patterns: &[String]) -> GlobSet {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        match Glob::new(pattern) {
            Ok(glob) => {
                builder.add(glob);
            }
            Err(_) => tracing::warn!("invalid glob pattern: {}", pattern),
        }
    }
    builder.build().unwrap_or_else(|_| GlobSet::empty())
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
