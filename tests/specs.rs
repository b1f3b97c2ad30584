//! Behavioral specifications for the document-fmt CLI.
//!
//! These tests are black-box: they invoke the CLI binary and verify
//! stdout, stderr, and exit codes.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

#[path = "specs/prelude.rs"]
mod prelude;

#[path = "specs/config.rs"]
mod config;
#[path = "specs/fix.rs"]
mod fix;
#[path = "specs/rules.rs"]
mod rules;
#[path = "specs/validate.rs"]
mod validate;

use prelude::*;

/// Exit code 0 when invoked with --help
#[test]
fn help_exits_successfully() {
    document_fmt_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicates::str::contains("document-fmt"));
}

/// Exit code 0 when invoked with --version
#[test]
fn version_exits_successfully() {
    document_fmt_cmd().arg("--version").assert().success();
}

/// A subcommand is required
#[test]
fn missing_subcommand_is_usage_error() {
    document_fmt_cmd().assert().code(2);
}
