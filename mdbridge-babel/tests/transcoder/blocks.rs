use crate::common::{blocks, Block};
use insta::assert_snapshot;
use mdbridge_babel::to_rich;

#[test]
fn test_tight_list_is_one_block() {
    let rich = to_rich("- one\n- two\n- three");
    assert_eq!(rich, "- one\n- two\n- three");
    assert_eq!(blocks(&rich), vec![Block::List(3)]);
}

#[test]
fn test_nested_list_stays_one_list() {
    let rich = to_rich("- one\n\t- two\n- three");
    assert_eq!(blocks(&rich), vec![Block::List(2)]);
}

#[test]
fn test_ordered_list_is_one_block() {
    let rich = to_rich("1. one\n2. two");
    assert!(!rich.contains("\n\n"));
    assert_eq!(blocks(&rich), vec![Block::List(2)]);
}

#[test]
fn test_paragraph_lines_become_paragraphs() {
    let rich = to_rich("first\nsecond");
    assert_eq!(rich, "first\n\nsecond");
    assert_eq!(blocks(&rich), vec![Block::Paragraph, Block::Paragraph]);
}

#[test]
fn test_blank_line_survives_as_paragraph() {
    let rich = to_rich("a\n\nb");
    assert_eq!(
        blocks(&rich),
        vec![Block::Paragraph, Block::Paragraph, Block::Paragraph]
    );
}

#[test]
fn test_table_is_one_block() {
    let rich = to_rich("| a | b |\n| - | - |\n| 1 | 2 |");
    assert_eq!(blocks(&rich), vec![Block::Table]);
}

#[test]
fn test_list_after_paragraph_is_separate() {
    let rich = to_rich("Heading text\n- item");
    assert_eq!(rich, "Heading text\n\n- item");
    assert_eq!(blocks(&rich), vec![Block::Paragraph, Block::List(1)]);
}

#[test]
fn test_heading_and_list_snapshot() {
    assert_snapshot!(to_rich("# Title\n\n- one\n\t- two\n- three\n\nSee [[My Note|this]]"), @r"
    # Title

    &#x20;

    - one
      - two
    - three

    &#x20;

    See [this](My%20Note)
    ");
}
