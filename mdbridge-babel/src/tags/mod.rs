//! Tag token recognizer
//!
//! Turns `#tag` tokens typed in the rich editor into tag links as soon as the trigger key (space)
//! is pressed after them. The recognizer has two states: idle, and armed with a planned edit.
//! [`TagRecognizer::on_trigger`] runs synchronously inside the keypress and finishes its structural
//! edit before returning, so the caller only has to decide whether to run its default handler.
//!
//! The recognizer declines (and the keypress falls through to default handling) when it is not
//! attached to a surface, when the caret is inside an existing link or not in text, or when no
//! tag ends at the caret.

pub mod matcher;
pub mod surface;

pub use matcher::{match_tag, plan_tag_edit, TagEdit, TagMatch};
pub use surface::{Caret, CaretTarget, EditSurface, Inline, Paragraph};

use crate::rules::TranscodeRules;

/// Whether the recognizer consumed the trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// The edit was applied, including the trigger character itself
    Handled,
    /// Nothing changed; the default handler should process the key
    PassThrough,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognizerState {
    Idle,
    Armed { edit: TagEdit, caret: Caret },
}

#[derive(Debug, Clone)]
pub struct TagRecognizer {
    scheme: String,
    attached: bool,
    state: RecognizerState,
}

impl TagRecognizer {
    /// A detached recognizer emitting links with the given URL scheme (without the colon).
    pub fn new(scheme: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            attached: false,
            state: RecognizerState::Idle,
        }
    }

    pub fn from_rules(rules: &TranscodeRules) -> Self {
        Self::new(rules.tag_scheme.clone())
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn state(&self) -> &RecognizerState {
        &self.state
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Start reacting to triggers.
    pub fn attach(&mut self) {
        self.attached = true;
    }

    /// Stop reacting to triggers and drop any pending edit.
    pub fn detach(&mut self) {
        self.attached = false;
        self.state = RecognizerState::Idle;
    }

    pub fn is_trigger(ch: char) -> bool {
        ch == ' '
    }

    /// Inspect the surface at its caret and arm the recognizer if a tag ends there.
    ///
    /// Returns whether the recognizer is armed afterwards.
    pub fn evaluate(&mut self, surface: &EditSurface) -> bool {
        self.state = RecognizerState::Idle;
        if !self.attached {
            return false;
        }

        let caret = surface.caret();
        let text = match surface.caret_target() {
            CaretTarget::PlainText(text) => text,
            CaretTarget::InsideLink => {
                log::trace!("tag recognizer: caret inside link, declining");
                return false;
            }
            CaretTarget::NotText => {
                log::trace!("tag recognizer: caret not in text, declining");
                return false;
            }
        };

        match plan_tag_edit(text, caret.offset, &self.scheme) {
            Some(edit) => {
                log::trace!("tag recognizer: armed at {caret:?}");
                self.state = RecognizerState::Armed { edit, caret };
                true
            }
            None => false,
        }
    }

    /// Apply the armed edit to the surface and return to idle.
    ///
    /// Returns `false` when there was nothing to apply or the surface rejected the edit.
    pub fn commit(&mut self, surface: &mut EditSurface) -> bool {
        let state = std::mem::replace(&mut self.state, RecognizerState::Idle);
        let RecognizerState::Armed { edit, caret } = state else {
            return false;
        };
        if surface.caret() != caret {
            // the surface moved on since evaluation
            return false;
        }
        surface.splice(
            caret.block,
            caret.inline,
            edit.segments,
            edit.caret_segment,
            edit.caret_offset,
        )
    }

    /// Handle a trigger keypress: evaluate, then commit.
    pub fn on_trigger(&mut self, surface: &mut EditSurface) -> TriggerOutcome {
        if self.evaluate(surface) && self.commit(surface) {
            log::trace!("tag recognizer: handled");
            TriggerOutcome::Handled
        } else {
            TriggerOutcome::PassThrough
        }
    }
}

/// Feed one keypress to the surface, giving the recognizer first refusal on triggers.
///
/// `'\n'` splits the paragraph; any other character is inserted at the caret.
pub fn handle_key(recognizer: &mut TagRecognizer, surface: &mut EditSurface, ch: char) {
    if TagRecognizer::is_trigger(ch) && recognizer.on_trigger(surface) == TriggerOutcome::Handled {
        return;
    }
    if ch == '\n' {
        surface.split_paragraph();
    } else {
        let mut buf = [0u8; 4];
        surface.insert_text(ch.encode_utf8(&mut buf));
    }
}
