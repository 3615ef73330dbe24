//! Shared configuration loader for the mdbridge toolchain.
//!
//! `defaults/mdbridge.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`BridgeConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use mdbridge_babel::TranscodeRules;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/mdbridge.default.toml");

/// Top-level configuration consumed by mdbridge applications.
#[derive(Debug, Clone, Deserialize)]
pub struct BridgeConfig {
    pub transcode: TranscodeConfig,
    pub tags: TagsConfig,
}

/// Mirrors the knobs exposed by the transcoder.
#[derive(Debug, Clone, Deserialize)]
pub struct TranscodeConfig {
    pub indent_string: String,
    pub convert_embeds: bool,
    pub collapse_tag_links: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TagsConfig {
    pub scheme: String,
}

impl From<&BridgeConfig> for TranscodeRules {
    fn from(config: &BridgeConfig) -> Self {
        TranscodeRules {
            indent_string: config.transcode.indent_string.clone(),
            convert_embeds: config.transcode.convert_embeds,
            collapse_tag_links: config.transcode.collapse_tag_links,
            tag_scheme: config.tags.scheme.clone(),
        }
    }
}

impl From<BridgeConfig> for TranscodeRules {
    fn from(config: BridgeConfig) -> Self {
        TranscodeRules::from(&config)
    }
}

impl BridgeConfig {
    /// Check values the TOML types cannot express. [`Loader::build`] runs this; callers that
    /// mutate a built config should run it again.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let indent = &self.transcode.indent_string;
        if indent.is_empty() || !indent.chars().all(|c| c == ' ') {
            return Err(ConfigError::Message(format!(
                "transcode.indent_string must be one or more spaces, got {indent:?}"
            )));
        }
        let scheme = &self.tags.scheme;
        let valid_scheme = scheme
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic())
            && scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
        if !valid_scheme {
            return Err(ConfigError::Message(format!(
                "tags.scheme is not a valid URL scheme: {scheme:?}"
            )));
        }
        Ok(())
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder, deserialize and validate the resulting configuration.
    pub fn build(self) -> Result<BridgeConfig, ConfigError> {
        let config: BridgeConfig = self.builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<BridgeConfig, ConfigError> {
    Loader::new().build()
}
