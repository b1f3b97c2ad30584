// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod cmd_rules;
mod cmd_run;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use document_fmt::cli::{Cli, Command};
use document_fmt::error::ExitCode;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "DOCUMENT_FMT_LOG";

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let verbose = match &cli.command {
        Command::Validate(args) | Command::Fix(args) => args.verbose,
        Command::Rules => false,
    };
    init_logging(verbose);

    let result = match &cli.command {
        Command::Validate(args) => cmd_run::run(&cli, args, false),
        Command::Fix(args) => cmd_run::run(&cli, args, true),
        Command::Rules => cmd_rules::run(),
    };
    match result {
        Ok(code) => code.into(),
        Err(e) => {
            eprintln!("document-fmt: {e:#}");
            ExitCode::Error.into()
        }
    }
}

/// Log to stderr, filtered by `DOCUMENT_FMT_LOG` or the verbosity flag.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}
