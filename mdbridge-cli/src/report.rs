//! Link listing for the `links` command.

use mdbridge_babel::common::links::extract_links;
use mdbridge_babel::common::resolve::{classify_target, resolve_target, FsResolver, LinkTarget};
use mdbridge_babel::{TranscodeRules, Transcoder};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    External,
    Tag,
    Internal,
}

/// One link of a note, as the rich editor sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkEntry {
    pub kind: LinkKind,
    pub label: String,
    /// Target as written in rich text
    pub href: String,
    /// External URL, tag body or decoded vault path
    pub target: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved: Option<String>,
}

/// Lists the links of a host document.
///
/// With a vault resolver, internal targets are resolved relative to `base` (the note's path inside
/// the vault); targets that match no file keep `resolved` empty.
pub fn collect_links(
    host: &str,
    rules: &TranscodeRules,
    vault: Option<&FsResolver>,
    base: &str,
) -> Vec<LinkEntry> {
    let rich = Transcoder::new(rules.clone()).to_rich(host);
    extract_links(&rich)
        .into_iter()
        .map(|link| {
            let (kind, target) = match classify_target(&link.target, rules) {
                LinkTarget::External(url) => (LinkKind::External, url),
                LinkTarget::Tag(body) => (LinkKind::Tag, body),
                LinkTarget::Internal(path) => (LinkKind::Internal, path),
            };
            let resolved = match (&kind, vault) {
                (LinkKind::Internal, Some(resolver)) => {
                    let located = resolve_target(&link.target, base, resolver);
                    (located != link.target).then_some(located)
                }
                _ => None,
            };
            LinkEntry {
                kind,
                label: link.label,
                href: link.target,
                target,
                resolved,
            }
        })
        .collect()
}

/// Tab-separated rendering, one link per line.
pub fn render_text(entries: &[LinkEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        let kind = match entry.kind {
            LinkKind::External => "external",
            LinkKind::Tag => "tag",
            LinkKind::Internal => "internal",
        };
        out.push_str(&format!("{kind}\t{}\t{}", entry.target, entry.label));
        if let Some(resolved) = &entry.resolved {
            out.push_str(&format!("\t{resolved}"));
        }
        out.push('\n');
    }
    out
}
