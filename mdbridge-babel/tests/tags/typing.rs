use mdbridge_babel::tags::{Caret, Inline, Paragraph};
use mdbridge_babel::{handle_key, to_host, EditSurface, TagRecognizer, TriggerOutcome};

fn typed(text: &str) -> EditSurface {
    let mut recognizer = TagRecognizer::new("tag");
    recognizer.attach();
    let mut surface = EditSurface::new();
    for ch in text.chars() {
        handle_key(&mut recognizer, &mut surface, ch);
    }
    surface
}

#[test]
fn test_tag_recognized_on_space() {
    let surface = typed("see #project/x ");
    assert_eq!(
        surface.paragraphs()[0].inlines,
        vec![
            Inline::Text("see ".to_string()),
            Inline::Link {
                url: "tag:project/x".to_string(),
                text: "#project/x".to_string(),
            },
            Inline::Text(" ".to_string()),
        ]
    );
    assert_eq!(
        surface.caret(),
        Caret {
            block: 0,
            inline: 2,
            offset: 1
        }
    );
}

#[test]
fn test_typed_tags_round_trip_to_host() {
    let surface = typed("plan #work and #home/chores\n(#idea) done");
    let rich = surface.to_markdown();
    assert_eq!(
        rich,
        "plan [#work](tag:work) and #home/chores\n\n(#idea) done"
    );
    assert_eq!(to_host(&rich), "plan #work and #home/chores\n(#idea) done");
}

#[test]
fn test_no_nested_link_when_typing_inside_link() {
    let mut recognizer = TagRecognizer::new("tag");
    recognizer.attach();
    let mut surface = EditSurface::from_paragraphs(vec![Paragraph::new(vec![Inline::Link {
        url: "tag:a".to_string(),
        text: "#a".to_string(),
    }])]);

    assert_eq!(
        recognizer.on_trigger(&mut surface),
        TriggerOutcome::PassThrough
    );
    handle_key(&mut recognizer, &mut surface, ' ');

    let links = surface.paragraphs()[0]
        .inlines
        .iter()
        .filter(|inline| matches!(inline, Inline::Link { .. }))
        .count();
    assert_eq!(links, 1);
    assert_eq!(surface.to_markdown(), "[#a ](tag:a)");
}

#[test]
fn test_hash_in_word_is_not_a_tag() {
    let surface = typed("issue#12 ");
    assert_eq!(surface.to_markdown(), "issue#12 ");
}

#[test]
fn test_empty_paragraph_survives_to_host() {
    let surface = typed("a\n\nb");
    let rich = surface.to_markdown();
    assert_eq!(rich, "a\n\n&#x20;\n\nb");
    assert_eq!(to_host(&rich), "a\n\nb");
}
