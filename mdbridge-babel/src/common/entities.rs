//! Whitespace entity codec.
//!
//! The rich surface collapses whitespace it considers insignificant: trailing spaces, empty
//! paragraphs and tabs inside running text. To keep them, the host→rich direction rewrites each
//! of them as an inert character reference that the surface displays as-is and emits back
//! unchanged:
//!
//! - every trailing space becomes one [`PRESERVED_SPACE`] (one entity per space, so the count
//!   survives single-character edits)
//! - a tab preceded by a non-tab character on the same line becomes [`PRESERVED_TAB`]
//!   (leading tabs are indentation and belong to [`super::indent`])
//! - an empty line becomes a single [`PRESERVED_SPACE`]
//!
//! [`decode`] reverses the substitutions and undoes the blank-line doubling introduced by the
//! block joiner. The codec cannot tell user-typed entity text from codec output; such text is
//! decoded literally.

/// Character reference standing for one preserved space.
pub const PRESERVED_SPACE: &str = "&#x20;";

/// Character reference standing for one tab inside running text.
pub const PRESERVED_TAB: &str = "&#x9;";

/// Replaces every tab that follows a non-tab character on the same line with [`PRESERVED_TAB`].
pub fn encode_inline_tabs(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut prev: Option<char> = None;
    for ch in line.chars() {
        match (ch, prev) {
            ('\t', Some(p)) if p != '\t' && p != '\n' => out.push_str(PRESERVED_TAB),
            _ => out.push(ch),
        }
        prev = Some(ch);
    }
    out
}

/// Replaces each space of the trailing run with its own [`PRESERVED_SPACE`].
pub fn encode_trailing_spaces(line: &str) -> String {
    let body = line.trim_end_matches(' ');
    let trailing = line.len() - body.len();
    if trailing == 0 {
        return line.to_string();
    }
    let mut out = String::with_capacity(body.len() + trailing * PRESERVED_SPACE.len());
    out.push_str(body);
    for _ in 0..trailing {
        out.push_str(PRESERVED_SPACE);
    }
    out
}

/// Encodes one line whose leading indentation has already been converted.
///
/// An empty line turns into a lone [`PRESERVED_SPACE`] so the surface keeps it as a paragraph.
pub fn encode_line(line: &str) -> String {
    if line.is_empty() {
        return PRESERVED_SPACE.to_string();
    }
    encode_trailing_spaces(line)
}

/// Reverses both entities and halves every run of two or more newlines.
///
/// A line made of exactly one [`PRESERVED_SPACE`] is the encoding of an empty host line and
/// decodes to nothing, so that halving restores the original blank-line count.
pub fn decode(text: &str) -> String {
    let normalized = text.replace("\r\n", "\n");
    let decoded: Vec<String> = normalized
        .split('\n')
        .map(|line| {
            if line == PRESERVED_SPACE {
                String::new()
            } else {
                line.replace(PRESERVED_SPACE, " ")
                    .replace(PRESERVED_TAB, "\t")
            }
        })
        .collect();
    halve_newline_runs(&decoded.join("\n"))
}

/// Collapses each run of `n >= 2` newlines to `n / 2` newlines.
pub fn halve_newline_runs(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut run = 0usize;
    for ch in text.chars() {
        if ch == '\n' {
            run += 1;
            continue;
        }
        flush_newlines(&mut out, run);
        run = 0;
        out.push(ch);
    }
    flush_newlines(&mut out, run);
    out
}

fn flush_newlines(out: &mut String, run: usize) {
    let keep = if run >= 2 { run / 2 } else { run };
    for _ in 0..keep {
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_spaces_become_one_entity_each() {
        assert_eq!(encode_trailing_spaces("end  "), "end&#x20;&#x20;");
        assert_eq!(encode_trailing_spaces("no trailing"), "no trailing");
        assert_eq!(encode_trailing_spaces("in side"), "in side");
    }

    #[test]
    fn leading_tabs_are_not_entities() {
        assert_eq!(encode_inline_tabs("\t\titem"), "\t\titem");
        assert_eq!(encode_inline_tabs("a\tb"), "a&#x9;b");
    }

    #[test]
    fn only_first_tab_of_a_run_is_encoded() {
        assert_eq!(encode_inline_tabs("a\t\tb"), "a&#x9;\tb");
    }

    #[test]
    fn empty_line_is_a_single_entity() {
        assert_eq!(encode_line(""), PRESERVED_SPACE);
        assert_eq!(encode_line("x "), "x&#x20;");
    }

    #[test]
    fn decode_restores_characters() {
        assert_eq!(decode("a&#x9;b&#x20;&#x20;"), "a\tb  ");
    }

    #[test]
    fn decode_halves_newline_runs() {
        assert_eq!(decode("a\n\nb"), "a\nb");
        assert_eq!(decode("a\nb"), "a\nb");
        assert_eq!(decode("a\n\n\n\nb"), "a\n\nb");
        assert_eq!(decode("a\n\n\nb"), "a\nb");
    }

    #[test]
    fn decode_restores_empty_line_from_lone_entity() {
        assert_eq!(decode("a\n\n&#x20;\n\nb"), "a\n\nb");
        assert_eq!(decode("a\n\n&#x20;\n\n&#x20;\n\nb"), "a\n\n\nb");
    }

    #[test]
    fn decode_normalizes_crlf() {
        assert_eq!(decode("a\r\n\r\nb"), "a\nb");
    }
}
