use serde::{Deserialize, Serialize};

/// Configuration for the dialect transcoder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscodeRules {
    /// Rich-dialect string standing for one host tab of leading indentation
    pub indent_string: String,

    /// Whether `![](target)` images emitted by the editor become `![[target]]` embeds
    pub convert_embeds: bool,

    /// Whether `[#body](tag:body)` links collapse back to a plain `#body` tag
    pub collapse_tag_links: bool,

    /// URL scheme used for recognized tags (without the trailing colon)
    pub tag_scheme: String,
}

impl TranscodeRules {
    /// Prefix of tagged-link targets, e.g. `tag:`.
    pub fn tag_prefix(&self) -> String {
        format!("{}:", self.tag_scheme)
    }
}

impl Default for TranscodeRules {
    fn default() -> Self {
        Self {
            indent_string: "  ".to_string(),
            convert_embeds: true,
            collapse_tag_links: true,
            tag_scheme: "tag".to_string(),
        }
    }
}
