#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use proptest::prelude::*;
use yare::parameterized;

use super::*;

fn kinds(input: &str) -> Vec<ItemKind> {
    let lines: Vec<&str> = input.lines().collect();
    tokenize(&lines).iter().map(|i| i.kind).collect()
}

// =============================================================================
// CLASSIFICATION
// =============================================================================

#[parameterized(
    header = { "## Arguments Reference", ItemKind::Header },
    field = { "* `name` - (Required) The name.", ItemKind::Field },
    indented_field = { "  * `name` - (Required) The name.", ItemKind::Field },
    note = { "-> **NOTE:** Something.", ItemKind::Note },
    warning_note = { "~> **NOTE:** Something.", ItemKind::Note },
    block_head = { "A `identity` block supports the following:", ItemKind::BlockHead },
    block_head_many = { "A `management`, `portal` block supports:", ItemKind::BlockHead },
    block_head_plural = { "The `rule` blocks export the following:", ItemKind::BlockHead },
    plain = { "The following arguments are supported:", ItemKind::PlainText },
    bold_is_not_field = { "**Note** this is bold", ItemKind::PlainText },
)]
fn classifies_first_line(line: &str, expected: ItemKind) {
    assert_eq!(kinds(line), vec![expected]);
}

#[test]
fn front_matter_only_on_first_line() {
    let input = "---\nsubcategory: \"Database\"\n---\n\n# azurerm_x\n\n---\n";
    assert_eq!(
        kinds(input),
        vec![ItemKind::FrontMatter, ItemKind::Header, ItemKind::Separator]
    );
}

#[test]
fn front_matter_swallows_lines_until_closed() {
    let lines = vec!["---", "layout: \"azurerm\"", "* `not_a_field`", "---"];
    let items = tokenize(&lines);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].to_line, 3);
}

#[test]
fn fenced_example_is_one_item() {
    let input = "```hcl\n# comment\n* not a field\n```\ntext after";
    let lines: Vec<&str> = input.lines().collect();
    let items = tokenize(&lines);
    assert_eq!(items[0].kind, ItemKind::Example);
    assert_eq!((items[0].from_line, items[0].to_line), (0, 4));
}

#[test]
fn every_field_line_starts_its_own_item() {
    let input = "* `a` - (Required) A.\n* `b` - (Optional) B.\n";
    assert_eq!(kinds(input), vec![ItemKind::Field, ItemKind::Field]);
}

#[test]
fn continuation_lines_merge_into_field() {
    let input = "* `a` - (Required) A\ncontinues here.\n\n* `b` - (Optional) B.";
    let lines: Vec<&str> = input.lines().collect();
    let items = tokenize(&lines);
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].lines.len(), 3);
    assert_eq!(items[0].head(), "* `a` - (Required) A");
}

#[test]
fn blank_lines_merge_into_header() {
    let input = "## Arguments Reference\n\nThe following arguments are supported:";
    assert_eq!(kinds(input), vec![ItemKind::Header, ItemKind::PlainText]);
}

#[test]
fn text_after_block_head_starts_plain_item() {
    let input = "A `foo` block supports the following:\nsome text";
    assert_eq!(kinds(input), vec![ItemKind::BlockHead, ItemKind::PlainText]);
}

#[test]
fn header_level_counts_hashes() {
    let lines = vec!["### Nested"];
    assert_eq!(tokenize(&lines)[0].level(), 3);
}

// =============================================================================
// COVERAGE PROPERTIES
// =============================================================================

fn line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("---".to_string()),
        Just("```hcl".to_string()),
        Just("```".to_string()),
        Just("## Arguments Reference".to_string()),
        Just("* `name` - (Required) The name.".to_string()),
        Just("A `block` block supports the following:".to_string()),
        Just("-> **NOTE:** note".to_string()),
        "[a-zA-Z `*#>~-]{0,30}",
    ]
}

proptest! {
    #[test]
    fn items_cover_every_line_once(lines in prop::collection::vec(line_strategy(), 0..40)) {
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        let items = tokenize(&refs);

        let covered: usize = items.iter().map(|i| i.to_line - i.from_line + 1).sum();
        prop_assert_eq!(covered, refs.len());

        let mut next = 0;
        for item in &items {
            prop_assert_eq!(item.from_line, next);
            prop_assert_eq!(item.lines.len(), item.to_line - item.from_line + 1);
            next = item.to_line + 1;
        }
    }

    #[test]
    fn joined_items_reproduce_input(lines in prop::collection::vec(line_strategy(), 1..40)) {
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        let items = tokenize(&refs);
        let joined = items.iter().map(Item::content).collect::<Vec<_>>().join("\n");
        prop_assert_eq!(joined, refs.join("\n"));
    }
}
