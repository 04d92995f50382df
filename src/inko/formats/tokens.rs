use super::Formatter;
use crate::inko::error::Result;
use crate::inko::token::Token;

/// One line per token: the category name, a tab, then the quoted text.
pub struct TokensFormatter;

impl Formatter for TokensFormatter {
    fn name(&self) -> &str {
        "tokens"
    }

    fn format(&self, tokens: &[Token<'_>]) -> Result<String> {
        let mut out = String::new();
        for token in tokens {
            out.push_str(&format!("{}\t{:?}\n", token.kind, token.text));
        }
        Ok(out)
    }

    fn description(&self) -> &str {
        "Category and quoted text, one token per line"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inko::lexing::tokenize;

    #[test]
    fn test_tokens_output() {
        let out = TokensFormatter.format(&tokenize("a\n")).unwrap();
        assert_eq!(out, "Text\t\"a\"\nText.Whitespace\t\"\\n\"\n");
    }

    #[test]
    fn test_empty_output() {
        assert_eq!(TokensFormatter.format(&[]).unwrap(), "");
    }
}
