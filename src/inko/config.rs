//! Configuration loader for inko-lex.
//!
//! `defaults/inko-lexer.default.toml` is embedded into the binary so documented
//! defaults and runtime behavior stay in sync. User files are layered on top via
//! [`Loader`] before deserializing into [`HighlightConfig`].

use super::error::Result;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/inko-lexer.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct HighlightConfig {
    pub output: OutputConfig,
    pub html: HtmlConfig,
    pub ansi: AnsiTheme,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Name of the formatter used when none is given on the command line
    pub format: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HtmlConfig {
    /// Class of the wrapping `<div>`
    pub css_class: String,
    /// Prepended to every token class
    pub class_prefix: String,
}

/// Terminal colour names per category. An unset category takes the colour of
/// its nearest themed parent (`escape` falls back to `string`, `namespace` to
/// `name`), or stays uncoloured.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnsiTheme {
    pub comment: Option<String>,
    pub string: Option<String>,
    pub escape: Option<String>,
    pub symbol: Option<String>,
    pub number: Option<String>,
    pub name: Option<String>,
    pub namespace: Option<String>,
    pub instance_variable: Option<String>,
    pub keyword: Option<String>,
    pub operator: Option<String>,
    pub punctuation: Option<String>,
    pub error: Option<String>,
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
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<HighlightConfig> {
        Ok(self.builder.build()?.try_deserialize()?)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<HighlightConfig> {
    Loader::new().build()
}
