// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! State shared by every rule for one resource and its document.

use crate::markdown::{Document, SectionKind};
use crate::property::{self, DocumentTree};
use crate::schema::{Resource, ResourceKind, SchemaProperties, Timeouts};

/// A resource schema paired with its parsed documentation.
#[derive(Debug)]
pub struct ResourceData {
    pub name: String,
    pub kind: ResourceKind,
    pub schema: SchemaProperties,
    pub timeouts: Option<Timeouts>,
    pub document: Document,
    /// Properties documented in the Arguments section.
    pub arguments: DocumentTree,
    /// Properties documented in the Attributes section.
    pub attributes: DocumentTree,
}

impl ResourceData {
    pub fn new(resource: &Resource, document: Document) -> Self {
        let arguments = tree_of_section(&document, SectionKind::Arguments);
        let attributes = tree_of_section(&document, SectionKind::Attributes);
        Self {
            name: resource.name.clone(),
            kind: resource.kind,
            schema: resource.schema.clone(),
            timeouts: resource.timeouts,
            document,
            arguments,
            attributes,
        }
    }

    /// Documented tree for arguments or attributes.
    pub fn tree(&self, section: SectionKind) -> &DocumentTree {
        match section {
            SectionKind::Attributes => &self.attributes,
            _ => &self.arguments,
        }
    }
}

fn tree_of_section(document: &Document, kind: SectionKind) -> DocumentTree {
    document
        .section(kind)
        .map(|section| property::build(section.body()))
        .unwrap_or_default()
}
