use super::Formatter;
use crate::inko::config::AnsiTheme;
use crate::inko::error::Result;
use crate::inko::token::{Token, TokenKind};
use crossterm::style::{style, Color, Stylize};
use tracing::warn;

/// Colours tokens for a terminal using the configured theme.
pub struct AnsiFormatter {
    theme: AnsiTheme,
}

impl AnsiFormatter {
    pub fn new(theme: &AnsiTheme) -> Self {
        Self {
            theme: theme.clone(),
        }
    }

    /// Resolve the colour for a category by walking its lineage until a
    /// themed category is found (`String.Escape` uses `string` when `escape`
    /// is unset, `Number.Float` uses `number`).
    pub fn color_for(&self, kind: TokenKind) -> Option<Color> {
        let (category, name) = kind
            .lineage()
            .find_map(|category| self.slot(category).map(|name| (category, name)))?;
        parse_color(name).or_else(|| {
            warn!(color = name, category = category.as_str(), "unknown colour name");
            None
        })
    }

    fn slot(&self, kind: TokenKind) -> Option<&str> {
        let theme = &self.theme;
        let slot = match kind {
            TokenKind::Comment => &theme.comment,
            TokenKind::String => &theme.string,
            TokenKind::StringEscape => &theme.escape,
            TokenKind::StringSymbol => &theme.symbol,
            TokenKind::Number => &theme.number,
            TokenKind::Name => &theme.name,
            TokenKind::NameNamespace => &theme.namespace,
            TokenKind::NameVariableInstance => &theme.instance_variable,
            TokenKind::Keyword => &theme.keyword,
            TokenKind::Operator => &theme.operator,
            TokenKind::Punctuation => &theme.punctuation,
            TokenKind::Error => &theme.error,
            _ => return None,
        };
        slot.as_deref()
    }
}

impl Formatter for AnsiFormatter {
    fn name(&self) -> &str {
        "ansi"
    }

    fn format(&self, tokens: &[Token<'_>]) -> Result<String> {
        let mut out = String::new();
        for token in tokens {
            match self.color_for(token.kind) {
                Some(color) => out.push_str(&style(token.text).with(color).to_string()),
                None => out.push_str(token.text),
            }
        }
        Ok(out)
    }

    fn description(&self) -> &str {
        "Terminal colours from the [ansi] theme"
    }
}

fn parse_color(name: &str) -> Option<Color> {
    let color = match name.to_ascii_lowercase().as_str() {
        "black" => Color::Black,
        "dark_grey" | "dark_gray" => Color::DarkGrey,
        "red" => Color::Red,
        "dark_red" => Color::DarkRed,
        "green" => Color::Green,
        "dark_green" => Color::DarkGreen,
        "yellow" => Color::Yellow,
        "dark_yellow" => Color::DarkYellow,
        "blue" => Color::Blue,
        "dark_blue" => Color::DarkBlue,
        "magenta" => Color::Magenta,
        "dark_magenta" => Color::DarkMagenta,
        "cyan" => Color::Cyan,
        "dark_cyan" => Color::DarkCyan,
        "white" => Color::White,
        "grey" | "gray" => Color::Grey,
        _ => return None,
    };
    Some(color)
}
