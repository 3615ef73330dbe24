use insta::assert_snapshot;
use mdbridge_babel::common::links::extract_links;
use mdbridge_babel::{to_host, to_rich, Transcoder, TranscodeRules};

#[test]
fn test_plain_link_round_trip() {
    assert_eq!(to_rich("[[My Note]]"), "[My Note](My%20Note)");
    assert_eq!(to_host(&to_rich("[[My Note]]")), "[[My Note]]");
}

#[test]
fn test_aliased_link_round_trip() {
    assert_eq!(to_rich("[[My Note|See this]]"), "[See this](My%20Note)");
    assert_eq!(
        to_host(&to_rich("[[My Note|See this]]")),
        "[[My Note|See this]]"
    );
}

#[test]
fn test_parenthesized_targets_round_trip() {
    let host = "see [[Meeting (draft)]] and [[Plan (v2)|plan]]";
    let rich = to_rich(host);
    assert_eq!(
        rich,
        "see [Meeting (draft)](Meeting%20%28draft%29) and [plan](Plan%20%28v2%29)"
    );
    assert_eq!(to_host(&rich), host);
}

#[test]
fn test_code_span_is_not_rewritten() {
    let host = "use `[[name]]` to link, like [[name]]";
    let rich = to_rich(host);
    assert_eq!(rich, "use `[[name]]` to link, like [name](name)");
    assert_eq!(to_host(&rich), host);
    assert_eq!(to_host("`[a](b)`"), "`[a](b)`");
}

#[test]
fn test_external_link_passthrough() {
    let link = "[text](https://example.com/x)";
    assert_eq!(to_rich(link), link);
    assert_eq!(to_host(link), link);
    let wrapped = "[text](<http://example.com/a b>)";
    assert_eq!(to_host(wrapped), wrapped);
}

#[test]
fn test_editor_relabelled_link_becomes_alias() {
    assert_eq!(to_host("[renamed](My%20Note)"), "[[My Note|renamed]]");
}

#[test]
fn test_angle_bracket_target() {
    assert_eq!(to_host("[My Note](<My Note>)"), "[[My Note]]");
}

#[test]
fn test_several_links_on_one_line() {
    let host = "[[a]] and [[b c|d]] then [[e/f.md]]";
    let rich = to_rich(host);
    assert_snapshot!(rich, @"[a](a) and [d](b%20c) then [e/f.md](e/f.md)");
    assert_eq!(to_host(&rich), host);
}

#[test]
fn test_unicode_target() {
    let rich = to_rich("[[Café notes]]");
    assert_eq!(rich, "[Café notes](Caf%C3%A9%20notes)");
    assert_eq!(to_host(&rich), "[[Café notes]]");
}

#[test]
fn test_malformed_links_pass_through() {
    assert_eq!(to_rich("[[]]"), "[[]]");
    assert_eq!(to_rich("[[open"), "[[open");
    assert_eq!(to_host("[label]()"), "[label]()");
}

#[test]
fn test_embed_and_tag_from_editor() {
    assert_eq!(to_host("![](diagram.png)"), "![[diagram.png]]");
    assert_eq!(to_host("see [#project/x](tag:project/x) "), "see #project/x ");
}

#[test]
fn test_rules_disable_editor_shapes() {
    let transcoder = Transcoder::new(TranscodeRules {
        convert_embeds: false,
        collapse_tag_links: false,
        ..TranscodeRules::default()
    });
    assert_eq!(transcoder.to_host("![](diagram.png)"), "![](diagram.png)");
    assert_eq!(transcoder.to_host("[#x](tag:x)"), "[[tag:x|#x]]");
}

#[test]
fn test_extract_links_in_order() {
    let links = extract_links(&to_rich("[[a]] text [[b|c]] [x](https://x.org)"));
    let targets: Vec<_> = links.iter().map(|l| l.target.as_str()).collect();
    assert_eq!(targets, vec!["a", "b", "https://x.org"]);
}
