//! Conversion between host bracket links and rich standard links.
//!
//! Host notes cross-reference each other with `[[target]]` or `[[target|alias]]`. The rich
//! surface only knows `[label](target)`. The mapping is:
//!
//! | host                | rich                          |
//! |---------------------|-------------------------------|
//! | `[[target]]`        | `[target](encoded target)`    |
//! | `[[target\|alias]]` | `[alias](encoded target)`     |
//!
//! Going back, a rich link whose label equals its decoded target becomes the plain form, any
//! other label becomes the alias. Links to `http://` or `https://` targets are external and never
//! touched. Every match is resolved from its own captured text, so neighbouring links cannot
//! interfere with each other.
//!
//! Two editor-specific shapes are handled on the way back as well, each behind a
//! [`TranscodeRules`] switch: images inserted by the editor (`![](target)`, empty alt) become
//! `![[target]]` embeds, and tagged links produced by the tag recognizer (`[#body](tag:body)`)
//! become plain `#body` tags again.
//!
//! Links never span lines; an unterminated or empty bracket is left as it is. Text inside an
//! inline code span (a backtick run closed by a run of the same length on the same line) is
//! copied through untouched in both directions.

use super::percent::{decode_target, encode_target};
use crate::rules::TranscodeRules;

/// A bracket link as written in the host dialect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostLink {
    pub target: String,
    pub alias: Option<String>,
}

/// A standard link as written in the rich dialect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RichLink {
    pub label: String,
    pub target: String,
}

impl HostLink {
    /// Converts to the rich form. Returns `None` when the target is blank.
    pub fn to_rich(&self) -> Option<RichLink> {
        let target = self.target.trim();
        if target.is_empty() {
            return None;
        }
        let label = match &self.alias {
            Some(alias) => alias.clone(),
            None => self.target.clone(),
        };
        Some(RichLink {
            label,
            target: encode_target(target),
        })
    }

    pub fn render(&self) -> String {
        match &self.alias {
            Some(alias) => format!("[[{}|{}]]", self.target, alias),
            None => format!("[[{}]]", self.target),
        }
    }
}

impl RichLink {
    /// Converts to the host form. Returns `None` for external links.
    pub fn to_host(&self) -> Option<HostLink> {
        if is_external(&self.target) {
            return None;
        }
        let unwrapped = unwrap_angle_brackets(&self.target);
        if is_external(unwrapped) {
            return None;
        }
        let target = decode_target(unwrapped).into_owned();
        let alias = (self.label != target).then(|| self.label.clone());
        Some(HostLink { target, alias })
    }

    pub fn render(&self) -> String {
        format!("[{}]({})", self.label, self.target)
    }
}

/// Whether a target points outside the vault.
pub fn is_external(target: &str) -> bool {
    target.starts_with("http://") || target.starts_with("https://")
}

/// Strips one layer of `<...>` around a target.
pub fn unwrap_angle_brackets(target: &str) -> &str {
    target
        .strip_prefix('<')
        .and_then(|inner| inner.strip_suffix('>'))
        .unwrap_or(target)
}

/// Host→rich: converts aliased bracket links first, then plain ones.
pub fn bracket_links_to_standard(text: &str) -> String {
    let aliased = replace_matches(text, |rest| {
        let (consumed, link) = scan_aliased_bracket(rest)?;
        Some((consumed, link.to_rich()?.render()))
    });
    replace_matches(&aliased, |rest| {
        let (consumed, link) = scan_plain_bracket(rest)?;
        Some((consumed, link.to_rich()?.render()))
    })
}

/// Rich→host: converts standard links (and, per `rules`, embeds and tags) back to host syntax.
pub fn standard_links_to_bracket(text: &str, rules: &TranscodeRules) -> String {
    replace_matches(text, |rest| {
        if rules.convert_embeds {
            if let Some((consumed, target)) = scan_embed(rest) {
                if let Some(host) = embed_to_host(target) {
                    return Some((consumed, host));
                }
            }
        }
        let (consumed, link) = scan_standard(rest)?;
        if rules.collapse_tag_links {
            if let Some(tag) = collapse_tag(&link, rules) {
                return Some((consumed, tag));
            }
        }
        Some((consumed, link.to_host()?.render()))
    })
}

/// Lists every rich link occurrence in document order, editor images included (with an empty
/// label).
pub fn extract_links(text: &str) -> Vec<RichLink> {
    let mut links = Vec::new();
    let mut rest = text;
    while let Some(ch) = rest.chars().next() {
        let verbatim = code_span_len(rest);
        if verbatim > 0 {
            rest = &rest[verbatim..];
        } else if let Some((consumed, target)) = scan_embed(rest) {
            links.push(RichLink {
                label: String::new(),
                target: target.to_string(),
            });
            rest = &rest[consumed..];
        } else if let Some((consumed, link)) = scan_standard(rest) {
            links.push(link);
            rest = &rest[consumed..];
        } else {
            rest = &rest[ch.len_utf8()..];
        }
    }
    links
}

fn embed_to_host(target: &str) -> Option<String> {
    if is_external(target) {
        return None;
    }
    let unwrapped = unwrap_angle_brackets(target);
    if is_external(unwrapped) {
        return None;
    }
    Some(format!("![[{}]]", decode_target(unwrapped)))
}

fn collapse_tag(link: &RichLink, rules: &TranscodeRules) -> Option<String> {
    let body = link.target.strip_prefix(&rules.tag_prefix())?;
    let label_body = link.label.strip_prefix('#')?;
    (!body.is_empty() && body == label_body).then(|| link.label.clone())
}

/// Walks `text`, letting `matcher` replace a prefix of the remaining input. Unmatched characters
/// and code spans are copied through.
fn replace_matches(text: &str, mut matcher: impl FnMut(&str) -> Option<(usize, String)>) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(ch) = rest.chars().next() {
        let verbatim = code_span_len(rest);
        if verbatim > 0 {
            out.push_str(&rest[..verbatim]);
            rest = &rest[verbatim..];
        } else if let Some((consumed, replacement)) = matcher(rest) {
            out.push_str(&replacement);
            rest = &rest[consumed..];
        } else {
            out.push(ch);
            rest = &rest[ch.len_utf8()..];
        }
    }
    out
}

/// `[[target|alias]]` at the start of `rest`.
fn scan_aliased_bracket(rest: &str) -> Option<(usize, HostLink)> {
    let body = rest.strip_prefix("[[")?;
    let target_len = body.find(['|', ']', '\n'])?;
    if target_len == 0 || !body[target_len..].starts_with('|') {
        return None;
    }
    let after = &body[target_len + 1..];
    let alias_len = after.find([']', '\n'])?;
    if alias_len == 0 || !after[alias_len..].starts_with("]]") {
        return None;
    }
    let link = HostLink {
        target: body[..target_len].to_string(),
        alias: Some(after[..alias_len].to_string()),
    };
    Some((2 + target_len + 1 + alias_len + 2, link))
}

/// `[[target]]` at the start of `rest`.
fn scan_plain_bracket(rest: &str) -> Option<(usize, HostLink)> {
    let body = rest.strip_prefix("[[")?;
    let target_len = body.find(['|', ']', '\n'])?;
    if target_len == 0 || !body[target_len..].starts_with("]]") {
        return None;
    }
    let link = HostLink {
        target: body[..target_len].to_string(),
        alias: None,
    };
    Some((2 + target_len + 2, link))
}

/// `[label](target)` at the start of `rest`.
fn scan_standard(rest: &str) -> Option<(usize, RichLink)> {
    let body = rest.strip_prefix('[')?;
    let label_len = body.find([']', '\n'])?;
    if label_len == 0 {
        return None;
    }
    let after = body[label_len..].strip_prefix("](")?;
    let (target_len, target) = scan_target(after)?;
    let link = RichLink {
        label: body[..label_len].to_string(),
        target: target.to_string(),
    };
    Some((1 + label_len + 2 + target_len + 1, link))
}

/// `![](target)` at the start of `rest`.
fn scan_embed(rest: &str) -> Option<(usize, &str)> {
    let after = rest.strip_prefix("![](")?;
    let (target_len, target) = scan_target(after)?;
    Some((4 + target_len + 1, target))
}

/// Non-empty target up to the closing parenthesis. Nested parentheses must balance, as in a
/// CommonMark link destination.
fn scan_target(after: &str) -> Option<(usize, &str)> {
    let mut depth = 0usize;
    for (idx, ch) in after.char_indices() {
        match ch {
            '\n' => return None,
            '(' => depth += 1,
            ')' if depth > 0 => depth -= 1,
            ')' if idx == 0 => return None,
            ')' => return Some((idx, &after[..idx])),
            _ => {}
        }
    }
    None
}

/// Bytes at the start of `rest` that must be copied verbatim: a whole code span, or an unmatched
/// backtick run. Zero when `rest` does not start with a backtick.
fn code_span_len(rest: &str) -> usize {
    let run = rest.len() - rest.trim_start_matches('`').len();
    if run == 0 {
        return 0;
    }
    let line = &rest[..rest.find('\n').unwrap_or(rest.len())];
    let mut pos = run;
    while let Some(found) = line[pos..].find('`') {
        let start = pos + found;
        let closing = line[start..].len() - line[start..].trim_start_matches('`').len();
        if closing == run {
            return start + closing;
        }
        pos = start + closing;
    }
    run
}
