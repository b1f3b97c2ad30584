// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `document-fmt validate` and `document-fmt fix` implementation.

use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::Context;
use termcolor::{ColorChoice, StandardStream};

use document_fmt::cli::{Cli, OutputFormat, RunArgs};
use document_fmt::config::{self, Config};
use document_fmt::discovery;
use document_fmt::error::ExitCode;
use document_fmt::report::{self, ReportFormatter, Summary};
use document_fmt::rules::{RuleContext, RuleEngine};
use document_fmt::runner::{Runner, RunnerConfig};
use document_fmt::schema::ProviderSchema;
use document_fmt::upgrade_guide::UpgradeGuide;

/// Run the rules over every selected resource, fixing when `fix` is set.
pub fn run(cli: &Cli, args: &RunArgs, fix: bool) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;

    // Config paths are relative to the config file, flags to the working directory.
    let (config, root) = load_config(cli.config.as_deref(), &cwd)?;
    let docs_root = match &args.docs_root {
        Some(path) => cwd.join(path),
        None => root.join(&config.docs_root),
    };
    let schema_path = match &args.schema {
        Some(path) => cwd.join(path),
        None => root.join(&config.schema),
    };
    tracing::debug!("docs root: {}", docs_root.display());

    let schema = ProviderSchema::load(&schema_path)
        .with_context(|| format!("failed to load schema from {}", schema_path.display()))?;

    let guide = UpgradeGuide::new(docs_root.clone(), config.upgrade_guide.as_str());
    let ctx = RuleContext {
        upgrade_guide: Rc::new(guide),
        force_new_noun: config.force_new_noun.clone(),
    };
    let selected = if args.rules.is_empty() { config.rules.selected() } else { args.rules.clone() };
    let engine = RuleEngine::select(&ctx, &selected)?;

    let runner = Runner::new(RunnerConfig {
        docs_root,
        fix,
        resources: args.resources.clone(),
        exclude: config.exclude.clone(),
    });
    let reports = runner.run(&schema, &engine);

    let color = match args.output {
        OutputFormat::Text => args.color.choice(args.no_color),
        OutputFormat::Json => ColorChoice::Never,
    };
    let mut stdout = StandardStream::stdout(color);
    report::formatter(args.output, &cwd).format_to(&mut stdout, &reports)?;

    if Summary::of(&reports).is_success() { Ok(ExitCode::Success) } else { Ok(ExitCode::Failure) }
}

/// Load the explicit or discovered config and the directory it is relative to.
fn load_config(explicit: Option<&Path>, cwd: &Path) -> anyhow::Result<(Config, PathBuf)> {
    let path = match explicit {
        Some(path) => Some(cwd.join(path)),
        None => discovery::find_config(cwd),
    };
    let Some(path) = path else {
        tracing::debug!("no config found, using defaults");
        return Ok((Config::default(), cwd.to_path_buf()));
    };

    let config = config::load_with_warnings(&path)
        .with_context(|| format!("failed to load config from {}", path.display()))?;
    let root = path.parent().map(Path::to_path_buf).unwrap_or_else(|| cwd.to_path_buf());
    Ok((config, root))
}
