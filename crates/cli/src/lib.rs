// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! document-fmt library.
//!
//! Cross-checks the schema a provider declares for each resource against the
//! hand-written markdown documentation for that resource, and optionally
//! rewrites the documentation so both agree.

pub mod cli;
pub mod color;
pub mod config;
pub mod diagnostic;
pub mod discovery;
pub mod error;
pub mod markdown;
pub mod patch;
pub mod property;
pub mod report;
pub mod resource_data;
pub mod rules;
pub mod runner;
pub mod schema;
pub mod upgrade_guide;

#[cfg(test)]
pub mod test_utils;

pub use error::{Error, Result};
