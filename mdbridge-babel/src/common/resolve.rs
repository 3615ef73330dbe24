//! Link target classification and the resolver seam.
//!
//! Resolving a link to something displayable (a file URL, an app resource path) belongs to the
//! host application. This module only does the part that depends on the dialect: it recognizes
//! external and tag targets, strips the optional `<...>` wrapper and percent-decodes internal
//! targets before handing them to a [`LinkResolver`]. Whatever the resolver returns is passed
//! back unmodified.

use super::links::{is_external, unwrap_angle_brackets};
use super::percent::decode_target;
use crate::rules::TranscodeRules;
use std::path::{Path, PathBuf};

/// What a rich link target points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// `http://` or `https://` URL, never rewritten
    External(String),
    /// Synthetic tag target, carrying the tag body
    Tag(String),
    /// Decoded vault path
    Internal(String),
}

/// Classifies a rich link target.
pub fn classify_target(target: &str, rules: &TranscodeRules) -> LinkTarget {
    let unwrapped = unwrap_angle_brackets(target);
    if is_external(target) || is_external(unwrapped) {
        return LinkTarget::External(unwrapped.to_string());
    }
    if let Some(body) = unwrapped.strip_prefix(&rules.tag_prefix()) {
        if !body.is_empty() {
            return LinkTarget::Tag(body.to_string());
        }
    }
    LinkTarget::Internal(decode_target(unwrapped).into_owned())
}

/// Maps a decoded vault path, relative to a base document, to a displayable locator.
pub trait LinkResolver {
    fn resolve(&self, target: &str, base: &str) -> Option<String>;
}

impl<F> LinkResolver for F
where
    F: Fn(&str, &str) -> Option<String>,
{
    fn resolve(&self, target: &str, base: &str) -> Option<String> {
        self(target, base)
    }
}

/// Resolves `href` through `resolver`.
///
/// External hrefs and hrefs the resolver does not know are returned as given.
pub fn resolve_target<R>(href: &str, base: &str, resolver: &R) -> String
where
    R: LinkResolver + ?Sized,
{
    let unwrapped = unwrap_angle_brackets(href);
    if is_external(href) || is_external(unwrapped) {
        return href.to_string();
    }
    let decoded = decode_target(unwrapped);
    resolver
        .resolve(&decoded, base)
        .unwrap_or_else(|| href.to_string())
}

/// Resolves targets against files on disk.
///
/// A target is looked up next to the base document first, then at the vault root, each time
/// as given and with a `.md` extension appended when it has none. The answer is the path
/// relative to the root.
#[derive(Debug, Clone)]
pub struct FsResolver {
    root: PathBuf,
}

impl FsResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn candidates(&self, target: &str, base: &str) -> Vec<PathBuf> {
        let base_dir = Path::new(base)
            .parent()
            .map(|dir| self.root.join(dir))
            .unwrap_or_else(|| self.root.clone());

        let mut candidates = Vec::new();
        for dir in [base_dir, self.root.clone()] {
            let path = dir.join(target);
            if path.extension().is_none() {
                candidates.push(dir.join(format!("{target}.md")));
            }
            candidates.push(path);
        }
        candidates
    }
}

impl LinkResolver for FsResolver {
    fn resolve(&self, target: &str, base: &str) -> Option<String> {
        let found = self
            .candidates(target, base)
            .into_iter()
            .find(|path| path.is_file())?;
        let relative = pathdiff::diff_paths(&found, &self.root)?;
        log::debug!("resolved link '{target}' to {}", relative.display());
        Some(relative.to_string_lossy().replace('\\', "/"))
    }
}
