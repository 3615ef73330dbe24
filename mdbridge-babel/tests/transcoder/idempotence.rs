//! A second `to_rich` pass over rich output must not re-indent or re-split anything.
//!
//! Blank lines are the exception: an empty host line is encoded as an entity paragraph, and a
//! second pass sees the blank separators around it as new empty lines.

use mdbridge_babel::to_rich;

fn leading_spaces(text: &str) -> Vec<usize> {
    text.lines()
        .map(|line| line.len() - line.trim_start_matches(' ').len())
        .collect()
}

#[test]
fn test_nested_list_is_stable() {
    let once = to_rich("- a\n\t- b\n\t\t- c\n- d");
    let twice = to_rich(&once);
    assert_eq!(twice, once);
    assert_eq!(leading_spaces(&twice), vec![0, 2, 4, 0]);
}

#[test]
fn test_table_is_stable() {
    let once = to_rich("| a | b |\n| - | - |\n| 1 | 2 |");
    assert_eq!(to_rich(&once), once);
}

#[test]
fn test_entities_are_stable() {
    let once = to_rich("- key\tvalue  ");
    assert_eq!(once, "- key&#x9;value&#x20;&#x20;");
    assert_eq!(to_rich(&once), once);
}

#[test]
fn test_links_are_not_encoded_twice() {
    let once = to_rich("[[My Note]] and [[a/b c|alias]]");
    assert_eq!(to_rich(&once), once);
}

#[test]
fn test_blank_line_count_grows_only_by_separators() {
    let once = to_rich("a\n\nb");
    let twice = to_rich(&once);
    assert_eq!(once.matches("&#x20;").count(), 1);
    // the original entity paragraph, plus one per separator around it
    assert_eq!(twice.matches("&#x20;").count(), 3);
    assert!(leading_spaces(&twice).iter().all(|&n| n == 0));
}
