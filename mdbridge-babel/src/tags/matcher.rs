//! Tag token matching
//!
//! A tag token is `#` followed by one or more tag characters (ASCII letters, digits, `_`, `/`,
//! `-`) ending exactly at the caret. The `#` must sit at the start of the text or right after
//! whitespace or one of the opening characters `(`, `[`, `{`, `>`.
//!
//! [`plan_tag_edit`] is the pure half of the recognizer: given a text segment and a caret offset
//! it computes the replacement segments and where the caret lands, without touching any surface.

use super::surface::Inline;

/// A tag token found at the end of the text before the caret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagMatch {
    /// Byte offset of the `#` in the inspected text
    pub start: usize,
    /// Byte offset just past the tag body
    pub end: usize,
    /// The tag body, without the `#`
    pub body: String,
}

/// The planned replacement of one text segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagEdit {
    /// Segments replacing the original text segment, in order
    pub segments: Vec<Inline>,
    /// Index into `segments` of the segment holding the caret afterwards
    pub caret_segment: usize,
    /// Byte offset of the caret within that segment
    pub caret_offset: usize,
}

fn is_tag_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '_' | '/' | '-')
}

fn is_tag_boundary(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, '(' | '[' | '{' | '>')
}

/// Find a tag token ending at the end of `before`.
pub fn match_tag(before: &str) -> Option<TagMatch> {
    let body_start = before
        .char_indices()
        .rev()
        .take_while(|(_, ch)| is_tag_char(*ch))
        .last()
        .map(|(idx, _)| idx)?;

    let hash_start = body_start.checked_sub(1)?;
    if before.as_bytes()[hash_start] != b'#' {
        return None;
    }

    let boundary_ok = before[..hash_start]
        .chars()
        .next_back()
        .map_or(true, is_tag_boundary);
    if !boundary_ok {
        return None;
    }

    Some(TagMatch {
        start: hash_start,
        end: before.len(),
        body: before[body_start..].to_string(),
    })
}

/// Plan the edit for a trigger typed at `caret` inside the text segment `text`.
///
/// Returns `None` when the caret is not a valid offset into `text` or no tag ends at the caret.
/// The edit replaces the tag token with a link to `<scheme>:<body>` labelled `#<body>`, followed by
/// a space segment holding the caret. Text after the caret is kept as a trailing segment.
pub fn plan_tag_edit(text: &str, caret: usize, scheme: &str) -> Option<TagEdit> {
    if !text.is_char_boundary(caret) {
        return None;
    }
    let (before, after) = text.split_at(caret);
    let found = match_tag(before)?;

    let mut segments = Vec::with_capacity(4);
    let prefix = &before[..found.start];
    if !prefix.is_empty() {
        segments.push(Inline::Text(prefix.to_string()));
    }
    segments.push(Inline::Link {
        url: format!("{scheme}:{}", found.body),
        text: format!("#{}", found.body),
    });
    segments.push(Inline::Text(" ".to_string()));
    let caret_segment = segments.len() - 1;
    if !after.is_empty() {
        segments.push(Inline::Text(after.to_string()));
    }

    Some(TagEdit {
        segments,
        caret_segment,
        caret_offset: 1,
    })
}
