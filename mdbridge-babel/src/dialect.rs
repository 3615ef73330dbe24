//! Dialect trait definition
//!
//! This module defines the trait every markdown dialect implements. The host dialect is the
//! hub: a dialect imports its own text into host text and exports host text into its own text,
//! so any two dialects convert through the host representation.

use crate::error::TranscodeError;

/// Trait for markdown dialects
///
/// # Examples
///
/// ```ignore
/// struct Shouting;
///
/// impl Dialect for Shouting {
///     fn name(&self) -> &str {
///         "shouting"
///     }
///
///     fn supports_export(&self) -> bool {
///         true
///     }
///
///     fn export(&self, host: &str) -> Result<String, TranscodeError> {
///         Ok(host.to_uppercase())
///     }
/// }
/// ```
pub trait Dialect: Send + Sync {
    /// The name of this dialect (e.g., "host", "rich")
    fn name(&self) -> &str;

    /// Optional description of this dialect
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this dialect, without the leading dot.
    /// Used for detection from filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this dialect can be turned into host text
    fn supports_import(&self) -> bool {
        false
    }

    /// Whether host text can be turned into this dialect
    fn supports_export(&self) -> bool {
        false
    }

    /// Convert text in this dialect to host text
    fn import(&self, _source: &str) -> Result<String, TranscodeError> {
        Err(TranscodeError::NotSupported(format!(
            "Dialect '{}' does not support import",
            self.name()
        )))
    }

    /// Convert host text to this dialect
    fn export(&self, _host: &str) -> Result<String, TranscodeError> {
        Err(TranscodeError::NotSupported(format!(
            "Dialect '{}' does not support export",
            self.name()
        )))
    }
}
