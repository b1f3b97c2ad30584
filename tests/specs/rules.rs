//! Behavioral specs for `document-fmt rules`.

use crate::prelude::*;

#[test]
fn rules_lists_every_rule_in_order() {
    let output = document_fmt_cmd().arg("rules").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let ids: Vec<&str> = stdout.lines().filter_map(|l| l.split_whitespace().next()).collect();
    assert_eq!(
        ids,
        vec![
            "D001", "F001", "T001", "S001", "S002", "S003", "A001", "A002", "A003", "A004",
            "A005", "A006", "A007", "A008",
        ]
    );
    assert!(stdout.contains("possible_values"));
}
