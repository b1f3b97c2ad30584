// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color handling.

use std::io::IsTerminal;

use termcolor::ColorChoice;

/// `--color` argument.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve against `--no-color`, which always wins.
    pub fn choice(self, no_color: bool) -> ColorChoice {
        match self {
            ColorMode::Always => resolve_color(true, no_color),
            ColorMode::Never => ColorChoice::Never,
            ColorMode::Auto => resolve_color(false, no_color),
        }
    }
}

/// Decide whether to color stdout.
///
/// Without `force_color`, color is used only on a terminal and when
/// `NO_COLOR` is unset.
pub fn resolve_color(force_color: bool, no_color: bool) -> ColorChoice {
    if no_color {
        return ColorChoice::Never;
    }
    if force_color {
        return ColorChoice::Always;
    }
    if std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

/// Color scheme for text output.
pub mod scheme {
    use termcolor::{Color, ColorSpec};

    /// Rule ID and name.
    pub fn rule_id() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        spec
    }

    /// Remaining diagnostics.
    pub fn fail() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red)).set_bold(true);
        spec
    }

    /// Clean or fixed.
    pub fn pass() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green)).set_bold(true);
        spec
    }

    pub fn path() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan));
        spec
    }

    pub fn line_number() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow));
        spec
    }

    /// Line before a fix.
    pub fn removed() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red));
        spec
    }

    /// Line after a fix.
    pub fn added() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green));
        spec
    }

    /// Diagnostic message text.
    pub fn message() -> ColorSpec {
        ColorSpec::new()
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
