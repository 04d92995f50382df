//! Structured (serde) output: JSON and YAML.

use super::Formatter;
use crate::inko::error::Result;
use crate::inko::token::Token;

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn format(&self, tokens: &[Token<'_>]) -> Result<String> {
        Ok(serde_json::to_string_pretty(tokens)?)
    }

    fn description(&self) -> &str {
        "JSON array of {kind, text, span} objects"
    }
}

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn format(&self, tokens: &[Token<'_>]) -> Result<String> {
        Ok(serde_yaml::to_string(tokens)?)
    }

    fn description(&self) -> &str {
        "YAML list of {kind, text, span} mappings"
    }
}
