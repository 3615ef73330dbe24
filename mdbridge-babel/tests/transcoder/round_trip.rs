use mdbridge_babel::{to_host, to_rich, Transcoder, TranscodeRules};
use proptest::prelude::*;

fn assert_round_trip(host: &str) {
    let rich = to_rich(host);
    assert_eq!(to_host(&rich), host, "rich form was {rich:?}");
}

#[test]
fn test_single_blank_line() {
    assert_round_trip("a\n\nb");
}

#[test]
fn test_many_blank_lines() {
    assert_round_trip("a\n\n\nb");
    assert_round_trip("a\n\n\n\n\nb");
}

#[test]
fn test_leading_and_trailing_blank_lines() {
    assert_round_trip("\na");
    assert_round_trip("a\n");
    assert_round_trip("a\n\n");
}

#[test]
fn test_empty_document() {
    assert_round_trip("");
}

#[test]
fn test_nested_list() {
    assert_round_trip("- one\n\t- two\n\t\t- three\n- four");
}

#[test]
fn test_trailing_spaces_and_inline_tabs() {
    assert_round_trip("line with two trailing  \nkey\tvalue\n\tindented\tcell");
}

#[test]
fn test_whitespace_only_line() {
    assert_round_trip("a\n\t\nb");
    assert_round_trip("a\n\t\t\nb");
}

#[test]
fn test_table() {
    assert_round_trip("| a | b |\n| - | - |\n| 1 | 2 |");
}

#[test]
fn test_kitchensink() {
    let host = "# Daily\n\
                \n\
                - [[Project Plan]]\n\
                \t- see [[Meeting Notes|notes]]\n\
                \t- read [the docs](https://example.com/docs)\n\
                \n\
                \n\
                | when | what |\n\
                | - | - |\n\
                | 9:00 | standup |\n\
                \n\
                Closing thought  ";
    assert_round_trip(host);
}

#[test]
fn test_crlf_input_normalizes() {
    assert_eq!(to_host(&to_rich("a\r\n\r\nb")), "a\n\nb");
}

#[test]
fn test_custom_indent_round_trip() {
    let transcoder = Transcoder::new(TranscodeRules {
        indent_string: "    ".to_string(),
        ..TranscodeRules::default()
    });
    let host = "- a\n\t- b\n\t\t- c";
    let rich = transcoder.to_rich(host);
    assert_eq!(rich, "- a\n    - b\n        - c");
    assert_eq!(transcoder.to_host(&rich), host);
}

fn link_target() -> impl Strategy<Value = String> {
    "[A-Z][a-zé]{0,4}( [a-z0-9é%#]{1,4})?( \\([a-z0-9]{1,3}\\))?"
}

fn host_link() -> impl Strategy<Value = String> {
    // aliases are lowercase so they never equal the target
    (link_target(), prop::option::of("[a-z]{1,5}( [a-z]{1,3})?")).prop_map(|(target, alias)| {
        match alias {
            Some(alias) => format!("[[{target}|{alias}]]"),
            None => format!("[[{target}]]"),
        }
    })
}

fn host_line() -> impl Strategy<Value = String> {
    (
        0usize..4,
        prop::option::of(Just("- ")),
        "[a-zA-Z0-9]{1,6}( [a-z]{1,4})?",
        prop::option::of(host_link()),
        prop::option::of(Just("  ")),
    )
        .prop_map(|(tabs, marker, content, link, trailing)| {
            let link = link.map(|l| format!(" {l}")).unwrap_or_default();
            format!(
                "{}{}{}{}{}",
                "\t".repeat(tabs),
                marker.unwrap_or(""),
                content,
                link,
                trailing.unwrap_or("")
            )
        })
}

fn table() -> impl Strategy<Value = String> {
    prop::collection::vec(("[a-z]{1,4}", "[0-9]{1,3}"), 1..4).prop_map(|rows| {
        let mut lines = vec!["| key | value |".to_string(), "| - | - |".to_string()];
        lines.extend(rows.iter().map(|(k, v)| format!("| {k} | {v} |")));
        lines.join("\n")
    })
}

fn host_document() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![4 => host_line(), 1 => Just(String::new()), 1 => table()],
        0..12,
    )
    .prop_map(|lines| lines.join("\n"))
}

proptest! {
    #[test]
    fn prop_tab_indented_documents_round_trip(host in host_document()) {
        prop_assert_eq!(to_host(&to_rich(&host)), host);
    }
}
