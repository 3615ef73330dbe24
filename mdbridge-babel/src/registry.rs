//! Dialect registry for dialect discovery and selection
//!
//! This module provides a centralized registry for all available dialects.
//! Dialects can be registered and retrieved by name.

use crate::dialect::Dialect;
use crate::error::TranscodeError;
use crate::rules::TranscodeRules;
use std::collections::HashMap;

/// Registry of markdown dialects
///
/// # Examples
///
/// ```ignore
/// let registry = DialectRegistry::default();
/// let rich = registry.convert("- a\n\t- b", "host", "rich")?;
/// ```
pub struct DialectRegistry {
    dialects: HashMap<String, Box<dyn Dialect>>,
}

impl DialectRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        DialectRegistry {
            dialects: HashMap::new(),
        }
    }

    /// Register a dialect
    ///
    /// If a dialect with the same name already exists, it will be replaced.
    pub fn register<D: Dialect + 'static>(&mut self, dialect: D) {
        self.dialects
            .insert(dialect.name().to_string(), Box::new(dialect));
    }

    /// Get a dialect by name
    pub fn get(&self, name: &str) -> Result<&dyn Dialect, TranscodeError> {
        self.dialects
            .get(name)
            .map(|d| d.as_ref())
            .ok_or_else(|| TranscodeError::DialectNotFound(name.to_string()))
    }

    /// Check if a dialect exists
    pub fn has(&self, name: &str) -> bool {
        self.dialects.contains_key(name)
    }

    /// List all available dialect names (sorted)
    pub fn list_dialects(&self) -> Vec<String> {
        let mut names: Vec<_> = self.dialects.keys().cloned().collect();
        names.sort();
        names
    }

    /// Detect dialect from filename based on file extension
    pub fn detect_dialect_from_filename(&self, filename: &str) -> Option<String> {
        let extension = std::path::Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())?;

        let mut names: Vec<_> = self
            .dialects
            .values()
            .filter(|d| d.file_extensions().contains(&extension))
            .map(|d| d.name().to_string())
            .collect();
        names.sort();
        names.into_iter().next()
    }

    /// Convert text in the named dialect to host text
    pub fn import(&self, source: &str, dialect: &str) -> Result<String, TranscodeError> {
        let d = self.get(dialect)?;
        if !d.supports_import() {
            return Err(TranscodeError::NotSupported(format!(
                "Dialect '{dialect}' does not support import"
            )));
        }
        d.import(source)
    }

    /// Convert host text to the named dialect
    pub fn export(&self, host: &str, dialect: &str) -> Result<String, TranscodeError> {
        let d = self.get(dialect)?;
        if !d.supports_export() {
            return Err(TranscodeError::NotSupported(format!(
                "Dialect '{dialect}' does not support export"
            )));
        }
        d.export(host)
    }

    /// Convert between two dialects through the host representation
    pub fn convert(&self, source: &str, from: &str, to: &str) -> Result<String, TranscodeError> {
        // validate both ends before doing any work
        self.get(to)?;
        let host = self.import(source, from)?;
        log::debug!("converting {from} -> {to}");
        self.export(&host, to)
    }

    /// Create a registry with the built-in dialects using the given rules
    pub fn with_rules(rules: TranscodeRules) -> Self {
        let mut registry = Self::new();

        registry.register(crate::dialects::HostDialect);
        registry.register(crate::dialects::RichDialect::new(rules));

        registry
    }

    /// Create a registry with default dialects
    pub fn with_defaults() -> Self {
        Self::with_rules(TranscodeRules::default())
    }
}

impl Default for DialectRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
