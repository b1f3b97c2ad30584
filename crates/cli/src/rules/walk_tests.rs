#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use crate::test_utils::{MANAGED_INSTANCE_DOC, managed_instance, managed_instance_doc_with};

#[test]
fn argument_levels_descend_into_linked_blocks() {
    let data = managed_instance(MANAGED_INSTANCE_DOC);
    let levels = levels(&data, SectionKind::Arguments);
    let paths: Vec<&str> = levels.iter().map(|l| l.path.as_str()).collect();
    assert_eq!(paths, vec!["", "identity"]);
    assert_eq!(levels[1].depth, 1);
    assert!(levels[1].doc.contains("type"));
}

#[test]
fn pairs_use_dotted_paths() {
    let data = managed_instance(MANAGED_INSTANCE_DOC);
    let paths: Vec<String> =
        pairs(&data, SectionKind::Arguments).into_iter().map(|p| p.path).collect();
    assert!(paths.contains(&"identity.type".to_string()));
    assert!(paths.contains(&"subnet_id".to_string()));
    assert!(!paths.contains(&"fqdn".to_string()));
}

#[test]
fn attribute_pairs_are_computed_only() {
    let data = managed_instance(MANAGED_INSTANCE_DOC);
    let paths: Vec<String> =
        pairs(&data, SectionKind::Attributes).into_iter().map(|p| p.path).collect();
    assert_eq!(paths, vec!["fqdn", "identity.principal_id"]);
}

#[test]
fn unlinked_block_is_not_descended() {
    let doc = managed_instance_doc_with(
        "An `identity` block supports the following:",
        "An `identities` block supports the following:",
    );
    let data = managed_instance(&doc);
    let levels = levels(&data, SectionKind::Arguments);
    assert_eq!(levels.len(), 1);
}

#[test]
fn nested_path_of_joins_with_dot() {
    let data = managed_instance(MANAGED_INSTANCE_DOC);
    let levels = levels(&data, SectionKind::Arguments);
    assert_eq!(levels[0].path_of("name"), "name");
    assert_eq!(levels[1].path_of("type"), "identity.type");
}
