//! Behavioral specs for `document-fmt fix`.

use crate::prelude::*;

#[test]
fn fix_rewrites_documentation() {
    let project = Project::fixture("provider");

    project
        .cmd()
        .args(["fix", "--resource", "azurerm_key_vault_secret", "--no-color"])
        .assert()
        .success()
        .stdout(predicates::str::contains("(fixed)"))
        .stdout(predicates::str::contains("wrote website/docs/r/key_vault_secret.html.markdown"))
        .stdout(predicates::str::contains("PASS: 1 resource checked, 2 fixed, 1 file written"));

    let doc = project.read(SECRET_DOC);
    assert!(doc.contains(
        "* `name` - (Required) Specifies the name of the Key Vault Secret. \
         Changing this forces a new resource to be created."
    ));
    assert!(doc.contains(
        "* `key_vault_id` - (Required) The ID of the Key Vault where the Secret should be \
         created. Changing this forces a new resource to be created."
    ));
}

#[test]
fn fix_is_idempotent() {
    let project = Project::fixture("provider");
    let args = ["fix", "--resource", "azurerm_key_vault_secret"];

    project.cmd().args(args).assert().success();
    let fixed = project.read(SECRET_DOC);

    project
        .cmd()
        .args(args)
        .assert()
        .success()
        .stdout("PASS: 1 resource checked\n");
    assert_eq!(project.read(SECRET_DOC), fixed);
}

#[test]
fn fix_leaves_consistent_documents_untouched() {
    let project = Project::fixture("provider");
    let before = project.read(SHARE_DOC);

    project
        .cmd()
        .args(["fix", "--resource", "azurerm_storage_share"])
        .assert()
        .success();
    assert_eq!(project.read(SHARE_DOC), before);
}

#[test]
fn unfixable_problems_still_fail() {
    let project = Project::fixture("provider");
    let doc = project.read(SECRET_DOC).replace(
        "* `content_type` - (Optional) Specifies the content type for the Key Vault Secret.\n",
        "",
    );
    project.file(SECRET_DOC, &doc);

    project
        .cmd()
        .args(["fix", "--resource", "azurerm_key_vault_secret", "--no-color"])
        .assert()
        .code(1)
        .stdout(predicates::str::contains("`content_type` is not documented"))
        .stdout(predicates::str::contains("wrote"));
}

#[test]
fn fix_regenerates_timeouts() {
    let project = Project::fixture("provider");
    let doc = project
        .read(SHARE_DOC)
        .replace("* `read` - (Defaults to 5 minutes)", "* `read` - (Defaults to 10 minutes)");
    project.file(SHARE_DOC, &doc);

    project
        .cmd()
        .args(["fix", "--resource", "azurerm_storage_share"])
        .assert()
        .success();
    assert!(project.read(SHARE_DOC).contains(
        "* `read` - (Defaults to 5 minutes) Used when retrieving the Storage Share."
    ));
}
