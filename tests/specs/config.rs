//! Behavioral specs for configuration.

use crate::prelude::*;

#[test]
fn config_is_discovered_from_subdirectory() {
    let project = Project::fixture("provider");

    project
        .cmd()
        .current_dir(project.path().join("website/docs"))
        .args(["validate", "--resource", "azurerm_storage_share"])
        .assert()
        .success();
}

#[test]
fn disabled_rules_do_not_run() {
    let project = Project::fixture("provider");
    project.file(
        "document-fmt.toml",
        "version = 1\n\n[rules]\ndisable = [\"A004\", \"A005\"]\n",
    );

    project
        .cmd()
        .args(["validate", "--resource", "azurerm_key_vault_secret"])
        .assert()
        .success();
}

#[test]
fn excluded_resources_are_skipped() {
    let project = Project::fixture("provider");
    project.file("document-fmt.toml", "version = 1\nexclude = [\"azurerm_storage_container\"]\n");

    project
        .cmd()
        .args(["validate", "--no-color"])
        .assert()
        .code(1)
        .stdout(predicates::str::contains("azurerm_storage_container").not())
        .stdout(predicates::str::contains("3 skipped"));
}

#[test]
fn explicit_config_flag() {
    let project = Project::fixture("provider");
    project.file("alt/custom.toml", "docs_root = \"../website/docs\"\nschema = \"../schema.json\"\n");

    project
        .cmd()
        .args(["-C", "alt/custom.toml", "validate", "--resource", "azurerm_storage_share"])
        .assert()
        .success();
}

#[test]
fn config_from_environment() {
    let project = Project::fixture("provider");
    project.file("alt/custom.toml", "[rules]\nenable = [\"T001\"]\n");

    // Paths in alt/custom.toml resolve against alt/, where there is no schema.
    project
        .cmd()
        .env("DOCUMENT_FMT_CONFIG", "alt/custom.toml")
        .arg("validate")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("alt/schema.json"));
}

#[test]
fn invalid_config_is_an_error() {
    let project = Project::fixture("provider");
    project.file("document-fmt.toml", "exclude = \"not a list\"\n");

    project
        .cmd()
        .arg("validate")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("failed to load config"));
}

#[test]
fn docs_root_flag_overrides_config() {
    let project = Project::fixture("provider");

    project
        .cmd()
        .args(["validate", "--docs-root", "missing", "--resource", "azurerm_storage_share"])
        .assert()
        .code(1)
        .stdout(predicates::str::contains("documentation file does not exist"));
}
