#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use crate::test_utils::{
    MANAGED_INSTANCE_DOC, MANAGED_INSTANCE_SCHEMA, managed_instance, resource_data,
    resource_from_json,
};

#[test]
fn complete_document_has_required_sections() {
    let mut data = managed_instance(MANAGED_INSTANCE_DOC);
    assert!(RequiredSectionsRule.run(&mut data, false).is_empty());
}

#[test]
fn missing_import_is_reported_for_resources() {
    let end = MANAGED_INSTANCE_DOC.find("## Import").unwrap();
    let mut data = managed_instance(&MANAGED_INSTANCE_DOC[..end]);
    let diagnostics = RequiredSectionsRule.run(&mut data, false);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, "missing `Import` section");
}

#[test]
fn data_sources_need_no_import_or_undeclared_timeouts() {
    let mut resource = resource_from_json(MANAGED_INSTANCE_SCHEMA);
    resource.kind = crate::schema::ResourceKind::DataSource;
    resource.timeouts = None;
    let start = MANAGED_INSTANCE_DOC.find("## Timeouts").unwrap();
    let mut data = resource_data(&resource, &MANAGED_INSTANCE_DOC[..start]);
    assert!(RequiredSectionsRule.run(&mut data, false).is_empty());
}

#[test]
fn undeclared_timeouts_section_is_reported() {
    let mut resource = resource_from_json(MANAGED_INSTANCE_SCHEMA);
    resource.timeouts = None;
    let mut data = resource_data(&resource, MANAGED_INSTANCE_DOC);
    let diagnostics = RequiredSectionsRule.run(&mut data, false);
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].message.contains("declares no timeouts"));
    assert!(diagnostics[0].line.is_some());
}

#[test]
fn canonical_order_passes() {
    let mut data = managed_instance(MANAGED_INSTANCE_DOC);
    assert!(SectionOrderRule.run(&mut data, false).is_empty());
}

#[test]
fn import_before_timeouts_is_out_of_order() {
    let timeouts = MANAGED_INSTANCE_DOC.find("## Timeouts").unwrap();
    let import = MANAGED_INSTANCE_DOC.find("## Import").unwrap();
    let doc = format!(
        "{}{}{}",
        &MANAGED_INSTANCE_DOC[..timeouts],
        &MANAGED_INSTANCE_DOC[import..],
        &MANAGED_INSTANCE_DOC[timeouts..import],
    );
    let mut data = managed_instance(&doc);
    let diagnostics = SectionOrderRule.run(&mut data, false);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, "`Timeouts` section should come before `Import`");
}

#[test]
fn unknown_sections_do_not_affect_order() {
    let doc = MANAGED_INSTANCE_DOC.replace("## Import", "## Notes\n\nSome notes.\n\n## Import");
    let mut data = managed_instance(&doc);
    assert!(SectionOrderRule.run(&mut data, false).is_empty());
}
