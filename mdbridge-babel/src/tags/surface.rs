//! In-memory edit surface
//!
//! A minimal model of the rich editor's document: paragraphs of inline segments and a caret. It is
//! what the tag recognizer splices into, and it renders itself as rich markdown so the result can
//! be fed to [`crate::Transcoder::to_host`].

use crate::common::entities::PRESERVED_SPACE;

/// An inline segment of a paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Link { url: String, text: String },
    HardBreak,
}

impl Inline {
    fn render(&self, out: &mut String) {
        match self {
            Inline::Text(text) => out.push_str(text),
            Inline::Link { url, text } => {
                out.push('[');
                out.push_str(text);
                out.push_str("](");
                out.push_str(url);
                out.push(')');
            }
            Inline::HardBreak => out.push_str("\\\n"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paragraph {
    pub inlines: Vec<Inline>,
}

impl Paragraph {
    pub fn new(inlines: Vec<Inline>) -> Self {
        Self { inlines }
    }

    pub fn text(text: &str) -> Self {
        Self::new(vec![Inline::Text(text.to_string())])
    }
}

/// Caret position: paragraph index, inline index, byte offset within the inline's text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Caret {
    pub block: usize,
    pub inline: usize,
    pub offset: usize,
}

/// What the caret currently sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaretTarget<'a> {
    /// A plain text segment, with the segment's full text
    PlainText(&'a str),
    /// The text of an existing link
    InsideLink,
    /// A hard break, or a position that does not exist
    NotText,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSurface {
    paragraphs: Vec<Paragraph>,
    caret: Caret,
}

impl Default for EditSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl EditSurface {
    /// An empty surface: one empty paragraph with the caret in it.
    pub fn new() -> Self {
        Self {
            paragraphs: vec![Paragraph::default()],
            caret: Caret::default(),
        }
    }

    /// A surface holding the given paragraphs, caret at the end of the last one.
    pub fn from_paragraphs(paragraphs: Vec<Paragraph>) -> Self {
        let mut surface = Self {
            paragraphs,
            caret: Caret::default(),
        };
        if surface.paragraphs.is_empty() {
            surface.paragraphs.push(Paragraph::default());
        }
        surface.move_to_end();
        surface
    }

    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    pub fn caret(&self) -> Caret {
        self.caret
    }

    pub fn set_caret(&mut self, caret: Caret) {
        self.caret = caret;
    }

    /// Move the caret to the end of the last paragraph.
    pub fn move_to_end(&mut self) {
        let block = self.paragraphs.len().saturating_sub(1);
        let inlines = self
            .paragraphs
            .get(block)
            .map(|p| p.inlines.as_slice())
            .unwrap_or_default();
        let (inline, offset) = match inlines.last() {
            Some(Inline::Text(text)) => (inlines.len() - 1, text.len()),
            Some(Inline::Link { text, .. }) => (inlines.len() - 1, text.len()),
            Some(Inline::HardBreak) => (inlines.len() - 1, 0),
            None => (0, 0),
        };
        self.caret = Caret {
            block,
            inline,
            offset,
        };
    }

    /// Classify what the caret is in.
    pub fn caret_target(&self) -> CaretTarget<'_> {
        let inline = self
            .paragraphs
            .get(self.caret.block)
            .and_then(|p| p.inlines.get(self.caret.inline));
        match inline {
            Some(Inline::Text(text)) => CaretTarget::PlainText(text),
            Some(Inline::Link { .. }) => CaretTarget::InsideLink,
            Some(Inline::HardBreak) => CaretTarget::NotText,
            // an empty paragraph accepts text at its only position
            None if self.caret_in_empty_paragraph() => CaretTarget::PlainText(""),
            None => CaretTarget::NotText,
        }
    }

    fn caret_in_empty_paragraph(&self) -> bool {
        self.caret.inline == 0
            && self.caret.offset == 0
            && self
                .paragraphs
                .get(self.caret.block)
                .is_some_and(|p| p.inlines.is_empty())
    }

    /// Insert text at the caret and advance the caret past it.
    ///
    /// Inside a link the link's label is edited. Returns `false` when the caret does not point at
    /// a valid text position, in which case nothing changes.
    pub fn insert_text(&mut self, text: &str) -> bool {
        let Caret {
            block,
            inline,
            offset,
        } = self.caret;
        let Some(paragraph) = self.paragraphs.get_mut(block) else {
            return false;
        };
        if paragraph.inlines.is_empty() && inline == 0 && offset == 0 {
            paragraph.inlines.push(Inline::Text(String::new()));
        }
        let target = match paragraph.inlines.get_mut(inline) {
            Some(Inline::Text(current)) => current,
            Some(Inline::Link { text: label, .. }) => label,
            _ => return false,
        };
        if !target.is_char_boundary(offset) {
            return false;
        }
        target.insert_str(offset, text);
        self.caret.offset += text.len();
        true
    }

    /// Split the current paragraph at the caret; the caret moves to the start of the new one.
    pub fn split_paragraph(&mut self) -> bool {
        let Caret {
            block,
            inline,
            offset,
        } = self.caret;
        let Some(paragraph) = self.paragraphs.get_mut(block) else {
            return false;
        };

        let tail = if paragraph.inlines.is_empty() {
            Vec::new()
        } else {
            let Some(Inline::Text(current)) = paragraph.inlines.get_mut(inline) else {
                return false;
            };
            if !current.is_char_boundary(offset) {
                return false;
            }
            let rest = current.split_off(offset);
            let mut tail = paragraph.inlines.split_off(inline + 1);
            if !rest.is_empty() {
                tail.insert(0, Inline::Text(rest));
            }
            paragraph
                .inlines
                .retain(|i| !matches!(i, Inline::Text(t) if t.is_empty()));
            tail
        };

        self.paragraphs.insert(block + 1, Paragraph::new(tail));
        self.caret = Caret {
            block: block + 1,
            inline: 0,
            offset: 0,
        };
        true
    }

    /// Replace the inline at `index` of paragraph `block` with `segments`, then put the caret at
    /// `offset` within `segments[caret_segment]`.
    pub fn splice(
        &mut self,
        block: usize,
        index: usize,
        segments: Vec<Inline>,
        caret_segment: usize,
        offset: usize,
    ) -> bool {
        let Some(paragraph) = self.paragraphs.get_mut(block) else {
            return false;
        };
        if caret_segment >= segments.len() {
            return false;
        }
        if paragraph.inlines.is_empty() && index == 0 {
            paragraph.inlines = segments;
        } else if index < paragraph.inlines.len() {
            paragraph.inlines.splice(index..=index, segments);
        } else {
            return false;
        }
        self.caret = Caret {
            block,
            inline: index + caret_segment,
            offset,
        };
        true
    }

    /// Render the surface as rich markdown.
    ///
    /// Paragraphs are separated by a blank line; an empty paragraph renders as a preserved-space
    /// entity so that it survives the rich→host conversion.
    pub fn to_markdown(&self) -> String {
        let rendered: Vec<String> = self
            .paragraphs
            .iter()
            .map(|p| {
                let mut out = String::new();
                for inline in &p.inlines {
                    inline.render(&mut out);
                }
                if out.is_empty() {
                    out.push_str(PRESERVED_SPACE);
                }
                out
            })
            .collect();
        rendered.join("\n\n")
    }
}
