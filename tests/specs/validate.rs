//! Behavioral specs for `document-fmt validate`.

use crate::prelude::*;

#[test]
fn consistent_resource_passes() {
    let project = Project::fixture("provider");

    project
        .cmd()
        .args(["validate", "--resource", "azurerm_storage_share"])
        .assert()
        .success()
        .stdout("PASS: 1 resource checked\n");
}

#[test]
fn inconsistent_resource_fails_without_writing() {
    let project = Project::fixture("provider");
    let before = project.read(SECRET_DOC);

    project
        .cmd()
        .args(["validate", "--resource", "azurerm_key_vault_secret", "--no-color"])
        .assert()
        .code(1)
        .stdout(predicates::str::contains(
            "azurerm_key_vault_secret (website/docs/r/key_vault_secret.html.markdown)",
        ))
        .stdout(predicates::str::contains("A004 required:"))
        .stdout(predicates::str::contains("`name` should be documented as (Required)"))
        .stdout(predicates::str::contains("A005 force_new:"))
        .stdout(predicates::str::contains("    + * `name` - (Required)"))
        .stdout(predicates::str::contains("FAIL: 1 resource checked, 2 diagnostics"));

    assert_eq!(project.read(SECRET_DOC), before);
}

#[test]
fn full_run_reports_missing_documents_and_skips() {
    let project = Project::fixture("provider");

    project
        .cmd()
        .args(["validate", "--no-color"])
        .assert()
        .code(1)
        .stdout(predicates::str::contains("azurerm_storage_container"))
        .stdout(predicates::str::contains("documentation file does not exist"))
        .stdout(predicates::str::contains("azurerm_sql_server").not())
        .stdout(predicates::str::contains("3 resources checked"))
        .stdout(predicates::str::contains("1 error"))
        .stdout(predicates::str::contains("2 skipped"));
}

#[test]
fn json_output_lists_diagnostics() {
    let project = Project::fixture("provider");

    let output = project
        .cmd()
        .args(["validate", "--resource", "azurerm_key_vault_secret", "-o", "json"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["passed"], false);
    let resource = &json["resources"][0];
    assert_eq!(resource["resource"], "azurerm_key_vault_secret");
    assert_eq!(resource["file"], SECRET_DOC);
    let rules: Vec<&str> = resource["diagnostics"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["rule_id"].as_str().unwrap())
        .collect();
    assert_eq!(rules, vec!["A004", "A005"]);
}

#[test]
fn rule_flag_limits_rules() {
    let project = Project::fixture("provider");

    project
        .cmd()
        .args(["validate", "--resource", "azurerm_key_vault_secret", "--rule", "A005"])
        .assert()
        .code(1)
        .stdout(predicates::str::contains("A005 force_new"))
        .stdout(predicates::str::contains("A004").not());
}

#[test]
fn unknown_rule_is_an_error() {
    let project = Project::fixture("provider");

    project
        .cmd()
        .args(["validate", "--rule", "Z999"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unknown rule: Z999"));
}

#[test]
fn missing_schema_is_an_error() {
    let project = Project::empty();

    project
        .cmd()
        .arg("validate")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("failed to load schema"));
}

#[test]
fn upgrade_guide_suppresses_possible_values() {
    let project = Project::fixture("provider");
    let doc = project.read(SHARE_DOC).replace(
        "Possible values are `Cool`, `Hot` and `TransactionOptimized`.",
        "Possible values are `Cool` and `Hot`.",
    );
    project.file(SHARE_DOC, &doc);

    project
        .cmd()
        .args(["validate", "--resource", "azurerm_storage_share"])
        .assert()
        .success();

    std::fs::remove_file(
        project.path().join("website/docs/guides/4.0-upgrade-guide.html.markdown"),
    )
    .unwrap();

    project
        .cmd()
        .args(["validate", "--resource", "azurerm_storage_share"])
        .assert()
        .code(1)
        .stdout(predicates::str::contains("A007 possible_values"))
        .stdout(predicates::str::contains("TransactionOptimized"));
}
