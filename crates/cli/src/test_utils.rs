//! Shared unit test utilities.
//!
//! Provides common helpers for unit tests in the cli crate.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use crate::markdown::{Document, Line};
use crate::property::{self, DocumentTree};
use crate::resource_data::ResourceData;
use crate::schema::{ProviderSchema, Resource};

/// Parse markdown and return all of its lines with their ids.
pub fn lines_of(markdown: &str) -> Vec<Line> {
    Document::parse("test.html.markdown", markdown)
        .sections()
        .iter()
        .flat_map(|s| s.lines.iter().cloned())
        .collect()
}

/// Build a property tree from a markdown fragment.
pub fn tree_of(markdown: &str) -> DocumentTree {
    property::build(&lines_of(markdown))
}

/// Parse a single resource from schema JSON (the `resources[0]` entry).
pub fn resource_from_json(json: &str) -> Resource {
    let schema = ProviderSchema::from_json(json).unwrap();
    schema.resources.into_iter().next().unwrap()
}

/// Build resource data for a resource and an in-memory document.
pub fn resource_data(resource: &Resource, markdown: &str) -> ResourceData {
    ResourceData::new(resource, Document::parse("test.html.markdown", markdown))
}

/// Schema of a managed instance used across rule tests.
pub const MANAGED_INSTANCE_SCHEMA: &str = r#"{
  "resources": [
    {
      "name": "azurerm_mssql_managed_instance",
      "timeouts": { "create": 1440, "read": 5, "update": 1440, "delete": 1440 },
      "schema": {
        "name": { "type": "string", "required": true, "force_new": true },
        "resource_group_name": { "type": "string", "required": true, "force_new": true },
        "sku_name": { "type": "string", "required": true, "possible_values": ["GP_Gen5", "BC_Gen5", "GP_Gen8IM"] },
        "subnet_id": { "type": "string", "required": true, "force_new": true },
        "license_type": { "type": "string", "optional": true, "possible_values": ["LicenseIncluded", "BasePrice"] },
        "minimum_tls_version": { "type": "string", "optional": true, "default": "1.2", "possible_values": ["1.0", "1.1", "1.2"] },
        "public_data_endpoint_enabled": { "type": "bool", "optional": true, "default": false },
        "storage_size_in_gb": { "type": "int", "optional": true, "default": 32 },
        "identity": {
          "type": "list",
          "optional": true,
          "nested": {
            "type": { "type": "string", "required": true, "possible_values": ["SystemAssigned", "UserAssigned"] },
            "principal_id": { "type": "string", "computed": true }
          }
        },
        "fqdn": { "type": "string", "computed": true }
      }
    }
  ]
}"#;

/// Documentation that agrees with [`MANAGED_INSTANCE_SCHEMA`].
pub const MANAGED_INSTANCE_DOC: &str = r#"---
subcategory: "Database"
layout: "azurerm"
page_title: "Azure Resource Manager: azurerm_mssql_managed_instance"
description: |-
  Manages a Microsoft SQL Azure Managed Instance.
---

# azurerm_mssql_managed_instance

Manages a Microsoft SQL Azure Managed Instance.

## Example Usage

```hcl
resource "azurerm_mssql_managed_instance" "example" {
  name = "example"
}
```

## Arguments Reference

The following arguments are supported:

* `name` - (Required) The name of the SQL Managed Instance. Changing this forces a new resource to be created.

* `resource_group_name` - (Required) The name of the resource group. Changing this forces a new resource to be created.

* `sku_name` - (Required) Specifies the SKU Name for the SQL Managed Instance. Possible values are `GP_Gen5`, `BC_Gen5` and `GP_Gen8IM`.

* `subnet_id` - (Required) The ID of the subnet. Changing this forces a new resource to be created.

---

* `identity` - (Optional) An `identity` block as defined below.

* `license_type` - (Optional) What type of license the Managed Instance will use. Possible values are `LicenseIncluded` and `BasePrice`.

* `minimum_tls_version` - (Optional) The Minimum TLS Version. Possible values are `1.0`, `1.1` and `1.2`. Defaults to `1.2`.

* `public_data_endpoint_enabled` - (Optional) Is the public data endpoint enabled?

* `storage_size_in_gb` - (Optional) Maximum storage space for the SQL Managed Instance. Defaults to `32`.

---

An `identity` block supports the following:

* `type` - (Required) The type of identity. Possible values are `SystemAssigned` and `UserAssigned`.

## Attributes Reference

In addition to the Arguments listed above - the following Attributes are exported:

* `id` - The SQL Managed Instance ID.

* `fqdn` - The fully qualified domain name of the Azure Managed SQL Instance.

* `identity` - An `identity` block as defined below.

---

An `identity` block exports the following:

* `principal_id` - The Principal ID for the Service Principal associated with the Identity of this SQL Managed Instance.

## Timeouts

The `timeouts` block allows you to specify [timeouts](https://developer.hashicorp.com/terraform/language/resources/syntax#operation-timeouts) for certain actions:

* `create` - (Defaults to 24 hours) Used when creating the Microsoft SQL Managed Instance.

* `read` - (Defaults to 5 minutes) Used when retrieving the Microsoft SQL Managed Instance.

* `update` - (Defaults to 24 hours) Used when updating the Microsoft SQL Managed Instance.

* `delete` - (Defaults to 24 hours) Used when deleting the Microsoft SQL Managed Instance.

## Import

SQL Managed Instances can be imported using the `resource id`, e.g.

```shell
terraform import azurerm_mssql_managed_instance.example /subscriptions/00000000-0000-0000-0000-000000000000/resourceGroups/myresourcegroup/providers/Microsoft.Sql/managedInstances/myserver
```
"#;

/// Managed instance resource data built from `markdown`.
pub fn managed_instance(markdown: &str) -> ResourceData {
    resource_data(&resource_from_json(MANAGED_INSTANCE_SCHEMA), markdown)
}

/// Managed instance documentation with `from` replaced by `to`.
pub fn managed_instance_doc_with(from: &str, to: &str) -> String {
    assert!(MANAGED_INSTANCE_DOC.contains(from), "fixture does not contain {from:?}");
    MANAGED_INSTANCE_DOC.replacen(from, to, 1)
}

/// Creates a temp directory with a minimal document-fmt.toml.
pub fn temp_project() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("document-fmt.toml"), "version = 1\n").unwrap();
    dir
}

/// Creates a directory tree from a list of (path, content) pairs.
///
/// Parent directories are created automatically.
///
/// # Example
///
/// ```ignore
/// let tmp = temp_project();
/// create_tree(tmp.path(), &[
///     ("website/docs/r/foo.html.markdown", "# azurerm_foo"),
///     ("schema.json", "{\"resources\": []}"),
/// ]);
/// ```
pub fn create_tree(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }
}
