// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::color::ColorMode;

/// Keeps resource documentation consistent with the provider schema
#[derive(Parser)]
#[command(name = "document-fmt")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "DOCUMENT_FMT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Report documentation that disagrees with the schema
    Validate(RunArgs),
    /// Rewrite documentation to agree with the schema
    Fix(RunArgs),
    /// List available rules
    Rules,
}

#[derive(clap::Args)]
pub struct RunArgs {
    /// Only check this resource (repeatable)
    #[arg(long = "resource", value_name = "NAME")]
    pub resources: Vec<String>,

    /// Only run this rule, by ID or name (repeatable)
    #[arg(long = "rule", value_name = "ID")]
    pub rules: Vec<String>,

    /// Documentation root (overrides config)
    #[arg(long, value_name = "DIR")]
    pub docs_root: Option<PathBuf>,

    /// Schema dump (overrides config)
    #[arg(long, value_name = "FILE")]
    pub schema: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
