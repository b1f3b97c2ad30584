//! Test helpers for behavioral specifications.
//!
//! Provides high-level DSL for testing document-fmt CLI behavior.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Returns a Command configured to run the document-fmt binary
pub fn document_fmt_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("document-fmt"));
    cmd.env_remove("DOCUMENT_FMT_CONFIG").env_remove("DOCUMENT_FMT_LOG");
    cmd
}

/// Get path to a test fixture directory
pub fn fixture(name: &str) -> PathBuf {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR should be set");
    PathBuf::from(manifest_dir)
        .parent()
        .expect("parent should exist")
        .parent()
        .expect("grandparent should exist")
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// A scratch project in a temporary directory.
pub struct Project {
    dir: tempfile::TempDir,
}

impl Project {
    /// An empty project with a `.git` marker so config discovery stops here.
    pub fn empty() -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        Self { dir }
    }

    /// A writable copy of a fixture.
    pub fn fixture(name: &str) -> Self {
        let project = Self::empty();
        copy_dir(&fixture(name), project.path());
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file, creating parent directories.
    pub fn file(&self, path: &str, content: &str) {
        let full = self.path().join(path);
        fs::create_dir_all(full.parent().unwrap()).unwrap();
        fs::write(full, content).unwrap();
    }

    pub fn read(&self, path: &str) -> String {
        fs::read_to_string(self.path().join(path)).unwrap()
    }

    /// Run document-fmt in the project directory.
    pub fn cmd(&self) -> Command {
        let mut cmd = document_fmt_cmd();
        cmd.current_dir(self.path());
        cmd
    }
}

fn copy_dir(from: &Path, to: &Path) {
    for entry in fs::read_dir(from).unwrap() {
        let entry = entry.unwrap();
        let target = to.join(entry.file_name());
        if entry.file_type().unwrap().is_dir() {
            fs::create_dir_all(&target).unwrap();
            copy_dir(&entry.path(), &target);
        } else {
            fs::copy(entry.path(), target).unwrap();
        }
    }
}

/// Documentation path of a resource in the `provider` fixture.
pub const SHARE_DOC: &str = "website/docs/r/storage_share.html.markdown";
pub const SECRET_DOC: &str = "website/docs/r/key_vault_secret.html.markdown";
