// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema property model.
//!
//! A read-only mirror of the arguments and attributes a provider declares for
//! each resource, loaded from a JSON schema dump.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// Value type of a schema property.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    #[default]
    String,
    Int,
    Float,
    Bool,
    List,
    Set,
    Map,
}

/// One declared argument or attribute.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SchemaProperty {
    /// Filled from the map key.
    #[serde(skip)]
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PropertyType,
    pub required: bool,
    pub optional: bool,
    pub computed: bool,
    pub force_new: bool,
    /// Deprecation message, when deprecated.
    pub deprecated: Option<String>,
    pub default: Option<serde_json::Value>,
    pub possible_values: Vec<String>,
    pub nested: Option<SchemaProperties>,
}

impl SchemaProperty {
    /// Computed without being settable.
    pub fn is_computed_only(&self) -> bool {
        self.computed && !self.required && !self.optional
    }

    /// Settable by the user.
    pub fn is_argument(&self) -> bool {
        !self.is_computed_only()
    }

    pub fn is_block(&self) -> bool {
        self.nested.is_some()
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecated.is_some()
    }

    /// Default value rendered as documentation text.
    pub fn default_string(&self) -> Option<String> {
        self.default.as_ref().and_then(|value| match value {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        })
    }
}

/// Schema properties keyed by name.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "BTreeMap<String, SchemaProperty>")]
pub struct SchemaProperties {
    properties: BTreeMap<String, SchemaProperty>,
}

impl From<BTreeMap<String, SchemaProperty>> for SchemaProperties {
    fn from(mut properties: BTreeMap<String, SchemaProperty>) -> Self {
        for (name, prop) in properties.iter_mut() {
            prop.name = name.clone();
        }
        Self { properties }
    }
}

impl FromIterator<SchemaProperty> for SchemaProperties {
    fn from_iter<I: IntoIterator<Item = SchemaProperty>>(iter: I) -> Self {
        Self { properties: iter.into_iter().map(|p| (p.name.clone(), p)).collect() }
    }
}

impl SchemaProperties {
    pub fn get(&self, name: &str) -> Option<&SchemaProperty> {
        self.properties.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// Properties sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = &SchemaProperty> {
        self.properties.values()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

/// What kind of provider object a schema belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    #[default]
    Resource,
    DataSource,
    Ephemeral,
}

impl ResourceKind {
    /// Documentation directory under the docs root.
    pub fn docs_dir(self) -> &'static str {
        match self {
            ResourceKind::Resource => "r",
            ResourceKind::DataSource => "d",
            ResourceKind::Ephemeral => "ephemeral-resources",
        }
    }

    /// Prefix of the document title and page title.
    pub fn title_prefix(self) -> &'static str {
        match self {
            ResourceKind::Resource => "",
            ResourceKind::DataSource => "Data Source: ",
            ResourceKind::Ephemeral => "Ephemeral: ",
        }
    }

    /// Whether the resource has an import section.
    pub fn is_importable(self) -> bool {
        self == ResourceKind::Resource
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ResourceKind::Resource => "resource",
            ResourceKind::DataSource => "data source",
            ResourceKind::Ephemeral => "ephemeral resource",
        })
    }
}

/// A CRUD operation with a configurable timeout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TimeoutOperation {
    Create,
    Read,
    Update,
    Delete,
}

impl TimeoutOperation {
    pub const ALL: [TimeoutOperation; 4] = [
        TimeoutOperation::Create,
        TimeoutOperation::Read,
        TimeoutOperation::Update,
        TimeoutOperation::Delete,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TimeoutOperation::Create => "create",
            TimeoutOperation::Read => "read",
            TimeoutOperation::Update => "update",
            TimeoutOperation::Delete => "delete",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.name() == name)
    }

    /// Verb used in the timeout description ("Used when creating ...").
    pub fn verb(self) -> &'static str {
        match self {
            TimeoutOperation::Create => "creating",
            TimeoutOperation::Read => "retrieving",
            TimeoutOperation::Update => "updating",
            TimeoutOperation::Delete => "deleting",
        }
    }
}

/// Declared timeouts in minutes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Timeouts {
    pub create: Option<u32>,
    pub read: Option<u32>,
    pub update: Option<u32>,
    pub delete: Option<u32>,
}

impl Timeouts {
    /// Declared timeouts in CRUD order.
    pub fn entries(&self) -> Vec<(TimeoutOperation, u32)> {
        TimeoutOperation::ALL
            .into_iter()
            .filter_map(|op| self.get(op).map(|minutes| (op, minutes)))
            .collect()
    }

    pub fn get(&self, op: TimeoutOperation) -> Option<u32> {
        match op {
            TimeoutOperation::Create => self.create,
            TimeoutOperation::Read => self.read,
            TimeoutOperation::Update => self.update,
            TimeoutOperation::Delete => self.delete,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

/// A resource, data source or ephemeral resource schema.
#[derive(Debug, Clone, Deserialize)]
pub struct Resource {
    pub name: String,
    #[serde(default)]
    pub kind: ResourceKind,
    #[serde(default)]
    pub deprecation_message: Option<String>,
    #[serde(default)]
    pub timeouts: Option<Timeouts>,
    #[serde(default)]
    pub schema: SchemaProperties,
}

/// Suffix of documentation files.
const DOC_SUFFIX: &str = ".html.markdown";

/// Suffix marking a generated documentation file.
const GENERATED_SUFFIX: &str = "-gen.html.markdown";

impl Resource {
    /// Name without the provider prefix (`azurerm_x_y` -> `x_y`).
    pub fn short_name(&self) -> &str {
        self.name.split_once('_').map(|(_, rest)| rest).unwrap_or(&self.name)
    }

    /// Documentation path under the docs root.
    pub fn doc_path(&self, docs_root: &Path) -> PathBuf {
        docs_root
            .join(self.kind.docs_dir())
            .join(format!("{}{DOC_SUFFIX}", self.short_name()))
    }

    /// Marker path whose existence means the documentation is generated.
    pub fn generated_path(&self, docs_root: &Path) -> PathBuf {
        docs_root
            .join(self.kind.docs_dir())
            .join(format!("{}{GENERATED_SUFFIX}", self.short_name()))
    }

    /// Arguments: every property that is not computed-only.
    pub fn arguments(&self) -> impl Iterator<Item = &SchemaProperty> {
        self.schema.iter().filter(|p| p.is_argument())
    }

    /// Attributes: computed-only properties.
    pub fn attributes(&self) -> impl Iterator<Item = &SchemaProperty> {
        self.schema.iter().filter(|p| p.is_computed_only())
    }
}

/// A provider schema dump.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderSchema {
    #[serde(default)]
    pub resources: Vec<Resource>,
}

impl ProviderSchema {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Load a schema dump from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_json(&content)
            .map_err(|source| Error::Schema { path: path.to_path_buf(), source })
    }

    pub fn resource(&self, name: &str) -> Option<&Resource> {
        self.resources.iter().find(|r| r.name == name)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
