#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use crate::test_utils::{MANAGED_INSTANCE_DOC, managed_instance, managed_instance_doc_with};

const LICENSE: &str = "Possible values are `LicenseIncluded` and `BasePrice`.";

fn rule() -> PossibleValuesRule {
    PossibleValuesRule::new(Rc::new(UpgradeGuide::empty()))
}

fn messages(markdown: &str) -> Vec<String> {
    let mut data = managed_instance(markdown);
    rule().run(&mut data, false).into_iter().map(|d| d.message).collect()
}

#[test]
fn matching_values_pass() {
    assert!(messages(MANAGED_INSTANCE_DOC).is_empty());
}

#[test]
fn case_differences_are_tolerated() {
    let doc = managed_instance_doc_with(LICENSE, "Possible values are `licenseincluded` and `baseprice`.");
    assert!(messages(&doc).is_empty());
}

#[test]
fn missing_and_extra_values_are_reported_separately() {
    let doc = managed_instance_doc_with(LICENSE, "Possible values are `LicenseIncluded` and `PayAsYouGo`.");
    assert_eq!(
        messages(&doc),
        vec![
            "`license_type` is missing possible values `BasePrice`",
            "`license_type` documents possible values not in the schema: `PayAsYouGo`",
        ]
    );
}

#[test]
fn undocumented_values_are_reported() {
    let doc = managed_instance_doc_with(&format!(" {LICENSE}"), "");
    assert_eq!(
        messages(&doc),
        vec!["`license_type` does not document its possible values `LicenseIncluded`, `BasePrice`"]
    );
}

#[test]
fn fix_replaces_clause_once_for_both_findings() {
    let doc = managed_instance_doc_with(LICENSE, "Must be one of `LicenseIncluded` or `PayAsYouGo`.");
    let mut data = managed_instance(&doc);
    let diagnostics = rule().run(&mut data, true);
    assert_eq!(diagnostics.len(), 2);
    assert!(diagnostics.iter().all(|d| !d.is_remaining()));
    let expected = MANAGED_INSTANCE_DOC
        .replace(LICENSE, "Possible values are `BasePrice` and `LicenseIncluded`.");
    assert_eq!(data.document.render(), expected);
}

#[test]
fn values_present_verbatim_are_accepted() {
    let doc = managed_instance_doc_with(
        LICENSE,
        "Use `LicenseIncluded` for new licenses or `BasePrice` with Azure Hybrid Benefit.",
    );
    assert!(messages(&doc).is_empty());
}

#[test]
fn several_clauses_skip_the_property() {
    let doc = managed_instance_doc_with(
        LICENSE,
        "Possible values are `LicenseIncluded` for v1, possible values are `PayAsYouGo` for v2.",
    );
    assert!(messages(&doc).is_empty());
}

#[test]
fn upgrade_guide_change_suppresses_check() {
    let doc = managed_instance_doc_with(LICENSE, "Possible values are `LicenseIncluded`.");
    let guide = UpgradeGuide::from_content(
        "### `azurerm_mssql_managed_instance`\n\n* `license_type` no longer accepts `PayAsYouGo`.\n",
    );
    let mut data = managed_instance(&doc);
    let diagnostics = PossibleValuesRule::new(Rc::new(guide)).run(&mut data, false);
    assert!(diagnostics.is_empty());
}

#[test]
fn ranges_are_reported_but_not_fixed() {
    let doc = managed_instance_doc_with(
        "Possible values are `1.0`, `1.1` and `1.2`.",
        "Possible values range from `1.0` to `1.2`.",
    );
    let mut data = managed_instance(&doc);
    let diagnostics = rule().run(&mut data, true);
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].fix.is_none());
    assert!(diagnostics[0].is_remaining());
    assert_eq!(data.document.render(), doc);
}

#[test]
fn unquoted_values_in_text_are_accepted() {
    let doc = managed_instance_doc_with(LICENSE, "Use LicenseIncluded unless BasePrice applies.");
    assert!(messages(&doc).is_empty());
}

#[test]
fn values_on_continuation_line_are_read() {
    let doc = managed_instance_doc_with(
        " Possible values are `LicenseIncluded` and `BasePrice`.",
        "\nPossible values are `LicenseIncluded` and `PayAsYouGo`.",
    );
    let mut data = managed_instance(&doc);
    let diagnostics = rule().run(&mut data, true);
    assert_eq!(diagnostics.len(), 2);
    assert!(diagnostics.iter().all(|d| !d.is_remaining()));
    assert_eq!(
        data.document.render(),
        managed_instance_doc_with(
            " Possible values are `LicenseIncluded` and `BasePrice`.",
            "\nPossible values are `BasePrice` and `LicenseIncluded`.",
        )
    );
}
