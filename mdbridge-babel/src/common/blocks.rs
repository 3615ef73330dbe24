//! Block joining for the host→rich direction.
//!
//! The rich dialect separates paragraphs with a blank line but keeps the items of one list, or
//! the rows of one table, on consecutive lines. Host notes separate every line with a single
//! newline, so each host line is either appended to the previous block (tight continuation) or
//! opens a new one, and the blocks are joined with blank lines at the end.
//!
//! The rich→host direction has no counterpart: the editor's own list and paragraph model already
//! decides tightness in the markdown it emits.

use super::entities::PRESERVED_SPACE;

/// Structural class of a line, independent of its indentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `-`, `*` or `N.` marker followed by whitespace
    ListItem,
    /// first non-blank character is `|`
    TableRow,
    Other,
}

impl LineKind {
    fn is_tight(self) -> bool {
        !matches!(self, LineKind::Other)
    }
}

/// Classifies a host line.
pub fn classify(line: &str) -> LineKind {
    if is_list_item(line) {
        LineKind::ListItem
    } else if line.trim().starts_with('|') {
        LineKind::TableRow
    } else {
        LineKind::Other
    }
}

fn is_list_item(line: &str) -> bool {
    let rest = line.trim_start();
    let after_marker = if let Some(after) = rest.strip_prefix(['-', '*']) {
        after
    } else {
        let digits = rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_digit()).len();
        if digits == 0 {
            return false;
        }
        match rest[digits..].strip_prefix('.') {
            Some(after) => after,
            None => return false,
        }
    };
    after_marker.chars().next().is_some_and(char::is_whitespace)
}

/// Accumulates encoded lines into blocks.
#[derive(Debug, Default)]
pub struct BlockJoiner {
    blocks: Vec<String>,
    /// kind and blankness of the previous source line
    prev: Option<(LineKind, bool)>,
}

impl BlockJoiner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one line. `source` is the host line used for classification, `encoded` is what ends
    /// up in the rich document.
    pub fn push(&mut self, source: &str, encoded: String) {
        let kind = classify(source);

        if source.is_empty() {
            self.blocks.push(PRESERVED_SPACE.to_string());
        } else {
            let tight = matches!(self.prev, Some((prev_kind, false)) if prev_kind == kind && kind.is_tight());
            match self.blocks.last_mut() {
                Some(last) if tight => {
                    last.push('\n');
                    last.push_str(&encoded);
                }
                _ => self.blocks.push(encoded),
            }
        }

        self.prev = Some((kind, source.trim().is_empty()));
    }

    pub fn blocks(&self) -> &[String] {
        &self.blocks
    }

    /// Joins the blocks with blank lines.
    pub fn finish(self) -> String {
        self.blocks.join("\n\n")
    }
}
