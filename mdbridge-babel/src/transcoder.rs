//! Dialect transcoder
//!
//! Orchestrates the passes in [`crate::common`] in each direction. Both directions take the
//! whole document as a value and return a whole new document; nothing is cached between calls.
//!
//! Host→rich, in order:
//! 1. normalize line endings
//! 2. bracket links to standard links (aliased form first), on the whole text, so that encoded
//!    targets are never mistaken for indentation
//! 3. per line: inline tabs to entities, leading tabs to spaces, trailing spaces and empty lines
//!    to entities
//! 4. join lines into blocks (tight lists and tables stay together), blocks separated by a
//!    blank line
//!
//! Rich→host undoes this in reverse: decode entities and halve blank-line runs, leading spaces
//! to tabs, standard links back to bracket links (external links are skipped).

use crate::common::blocks::BlockJoiner;
use crate::common::{entities, indent, links};
use crate::rules::TranscodeRules;

/// Converts documents between the host and rich dialects.
#[derive(Debug, Clone, Default)]
pub struct Transcoder {
    rules: TranscodeRules,
}

impl Transcoder {
    pub fn new(rules: TranscodeRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &TranscodeRules {
        &self.rules
    }

    /// Host (vault) text to rich (editor) text.
    pub fn to_rich(&self, host: &str) -> String {
        let normalized = host.replace("\r\n", "\n");
        let linked = links::bracket_links_to_standard(&normalized);

        let mut joiner = BlockJoiner::new();
        for line in linked.split('\n') {
            let tabs = entities::encode_inline_tabs(line);
            let indented = indent::tabs_to_spaces(&tabs, &self.rules.indent_string);
            joiner.push(line, entities::encode_line(&indented));
        }

        log::debug!(
            "to_rich: {} bytes in, {} blocks",
            host.len(),
            joiner.blocks().len()
        );
        joiner.finish()
    }

    /// Rich (editor) text to host (vault) text.
    pub fn to_host(&self, rich: &str) -> String {
        let decoded = entities::decode(rich);
        let indented: Vec<String> = decoded
            .split('\n')
            .map(|line| indent::spaces_to_tabs(line, &self.rules.indent_string))
            .collect();
        let host = links::standard_links_to_bracket(&indented.join("\n"), &self.rules);

        log::debug!("to_host: {} bytes in, {} bytes out", rich.len(), host.len());
        host
    }
}

/// Host text to rich text with default rules.
pub fn to_rich(host: &str) -> String {
    Transcoder::default().to_rich(host)
}

/// Rich text to host text with default rules.
pub fn to_host(rich: &str) -> String {
    Transcoder::default().to_host(rich)
}
