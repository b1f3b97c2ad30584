// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types.
//!
//! Only I/O, configuration and schema loading failures are errors.
//! Documentation problems are reported as diagnostics instead.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading inputs or writing documentation.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading or writing a file failed.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The schema dump could not be parsed.
    #[error("invalid schema {}: {source}", path.display())]
    Schema {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The configuration file could not be parsed.
    #[error("invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A rule ID that is not registered.
    #[error("unknown rule: {0}")]
    UnknownRule(String),

    /// The documentation file of a resource does not exist.
    #[error("documentation file does not exist: {}", .0.display())]
    MissingDocument(PathBuf),

    /// Front matter is not valid YAML.
    #[error("invalid front matter: {0}")]
    FrontMatter(#[from] serde_yaml::Error),
}

impl Error {
    /// Wrap an I/O error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }
}

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Nothing left to fix.
    Success = 0,
    /// Diagnostics remain or a resource could not be processed.
    Failure = 1,
    /// Configuration or schema could not be loaded.
    Error = 2,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

/// Result alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;
