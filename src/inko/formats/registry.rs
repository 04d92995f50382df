//! Format registry for token output
//!
//! This module provides a pluggable registry of token renderers.
//! Each format implements the `Formatter` trait and can be registered with `FormatRegistry`.

use crate::inko::config::{load_defaults, HighlightConfig};
use crate::inko::error::{Error, Result};
use crate::inko::token::Token;
use std::collections::HashMap;

/// Trait for token formatters
///
/// Implementors render a scanned token stream to a string.
pub trait Formatter: Send + Sync {
    /// The name of this format (e.g., "tokens", "html")
    fn name(&self) -> &str;

    /// Render the tokens in this format
    fn format(&self, tokens: &[Token<'_>]) -> Result<String>;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }
}

/// Registry of token formatters, looked up by name.
#[derive(Default)]
pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a formatter
    ///
    /// If a formatter with the same name already exists, it will be replaced.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    /// Get a formatter by name
    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Render tokens using the specified format
    pub fn format(&self, tokens: &[Token<'_>], format: &str) -> Result<String> {
        let formatter = self
            .get(format)
            .ok_or_else(|| Error::FormatNotFound(format.to_string()))?;
        formatter.format(tokens)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    /// Create a registry with the built-in formatters configured from `config`
    pub fn from_config(config: &HighlightConfig) -> Self {
        let mut registry = Self::new();

        registry.register(super::TokensFormatter);
        registry.register(super::JsonFormatter);
        registry.register(super::YamlFormatter);
        registry.register(super::HtmlFormatter::new(&config.html));
        registry.register(super::AnsiFormatter::new(&config.ansi));

        registry
    }

    /// Create a registry with the built-in formatters configured from the
    /// embedded `defaults/inko-lexer.default.toml`
    pub fn with_defaults() -> Result<Self> {
        Ok(Self::from_config(&load_defaults()?))
    }
}
