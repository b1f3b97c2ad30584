// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.
//!
//! All default values are documented here for easy reference.
//! Config structs delegate to these constants via their `default_*` methods.

/// Default locations of the inputs.
pub mod paths {
    /// Documentation root, relative to the project root.
    pub const DOCS_ROOT: &str = "website/docs";

    /// Schema dump, relative to the project root.
    pub const SCHEMA: &str = "schema.json";

    /// File name pattern of upgrade guides under the docs root.
    pub const UPGRADE_GUIDE: &str = "*-upgrade-guide.html.markdown";
}

/// Default wording used by fixes.
pub mod wording {
    /// Noun in "Changing this forces a new resource to be created."
    pub const FORCE_NEW_NOUN: &str = "resource";
}
