//! Token categories and the token type emitted by the lexer.
//!
//!     Categories follow the dotted taxonomy highlighting hosts map to styles
//!     (`Keyword.Declaration`, `String.Escape`, ...). Each category knows its
//!     parent, up to the root `Token`, so a renderer that only styles `String`
//!     still colours `String.Escape`, and its short class name for HTML output.
//!
//!     The abstract categories (`Token`, `Literal`, `String`, `Number`, `Name`,
//!     `Name.Variable`, `Comment`) only appear as parents; the lexer never emits
//!     them.

use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::Range;

/// The category of a token, used only for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Root of the taxonomy
    Token,
    /// Plain identifiers and the `::` namespace separator
    Text,
    Whitespace,
    /// A character no rule matched
    Error,
    Comment,
    CommentSingle,
    Literal,
    String,
    StringDouble,
    StringSingle,
    StringEscape,
    /// Keyword-argument labels such as `name:`
    StringSymbol,
    Number,
    NumberInteger,
    NumberFloat,
    Name,
    NameNamespace,
    NameVariable,
    NameVariableInstance,
    Keyword,
    KeywordNamespace,
    KeywordDeclaration,
    Operator,
    Punctuation,
}

/// Every category, in taxonomy order.
pub const TOKEN_KINDS: &[TokenKind] = &[
    TokenKind::Token,
    TokenKind::Text,
    TokenKind::Whitespace,
    TokenKind::Error,
    TokenKind::Comment,
    TokenKind::CommentSingle,
    TokenKind::Literal,
    TokenKind::String,
    TokenKind::StringDouble,
    TokenKind::StringSingle,
    TokenKind::StringEscape,
    TokenKind::StringSymbol,
    TokenKind::Number,
    TokenKind::NumberInteger,
    TokenKind::NumberFloat,
    TokenKind::Name,
    TokenKind::NameNamespace,
    TokenKind::NameVariable,
    TokenKind::NameVariableInstance,
    TokenKind::Keyword,
    TokenKind::KeywordNamespace,
    TokenKind::KeywordDeclaration,
    TokenKind::Operator,
    TokenKind::Punctuation,
];

impl TokenKind {
    /// Returns the dotted category name.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Token => "Token",
            TokenKind::Text => "Text",
            TokenKind::Whitespace => "Text.Whitespace",
            TokenKind::Error => "Error",
            TokenKind::Comment => "Comment",
            TokenKind::CommentSingle => "Comment.Single",
            TokenKind::Literal => "Literal",
            TokenKind::String => "String",
            TokenKind::StringDouble => "String.Double",
            TokenKind::StringSingle => "String.Single",
            TokenKind::StringEscape => "String.Escape",
            TokenKind::StringSymbol => "String.Symbol",
            TokenKind::Number => "Number",
            TokenKind::NumberInteger => "Number.Integer",
            TokenKind::NumberFloat => "Number.Float",
            TokenKind::Name => "Name",
            TokenKind::NameNamespace => "Name.Namespace",
            TokenKind::NameVariable => "Name.Variable",
            TokenKind::NameVariableInstance => "Name.Variable.Instance",
            TokenKind::Keyword => "Keyword",
            TokenKind::KeywordNamespace => "Keyword.Namespace",
            TokenKind::KeywordDeclaration => "Keyword.Declaration",
            TokenKind::Operator => "Operator",
            TokenKind::Punctuation => "Punctuation",
        }
    }

    /// Returns the category this one refines. Only `Token` has no parent.
    ///
    /// `String` and `Number` sit under `Literal`, as in the host taxonomy.
    pub fn parent(self) -> Option<TokenKind> {
        let parent = match self {
            TokenKind::Token => return None,
            TokenKind::Whitespace => TokenKind::Text,
            TokenKind::CommentSingle => TokenKind::Comment,
            TokenKind::String | TokenKind::Number => TokenKind::Literal,
            TokenKind::StringDouble
            | TokenKind::StringSingle
            | TokenKind::StringEscape
            | TokenKind::StringSymbol => TokenKind::String,
            TokenKind::NumberInteger | TokenKind::NumberFloat => TokenKind::Number,
            TokenKind::NameNamespace | TokenKind::NameVariable => TokenKind::Name,
            TokenKind::NameVariableInstance => TokenKind::NameVariable,
            TokenKind::KeywordNamespace | TokenKind::KeywordDeclaration => TokenKind::Keyword,
            TokenKind::Text
            | TokenKind::Error
            | TokenKind::Comment
            | TokenKind::Literal
            | TokenKind::Name
            | TokenKind::Keyword
            | TokenKind::Operator
            | TokenKind::Punctuation => TokenKind::Token,
        };
        Some(parent)
    }

    /// Iterates over `self` and each of its parents, ending at `Token`.
    pub fn lineage(self) -> impl Iterator<Item = TokenKind> {
        std::iter::successors(Some(self), |kind| kind.parent())
    }

    /// Short class name used by HTML renderers. Plain text has no class.
    pub fn short_name(self) -> &'static str {
        match self {
            TokenKind::Token | TokenKind::Text => "",
            TokenKind::Whitespace => "w",
            TokenKind::Error => "err",
            TokenKind::Comment => "c",
            TokenKind::CommentSingle => "c1",
            TokenKind::Literal => "l",
            TokenKind::String => "s",
            TokenKind::StringDouble => "s2",
            TokenKind::StringSingle => "s1",
            TokenKind::StringEscape => "se",
            TokenKind::StringSymbol => "ss",
            TokenKind::Number => "m",
            TokenKind::NumberInteger => "mi",
            TokenKind::NumberFloat => "mf",
            TokenKind::Name => "n",
            TokenKind::NameNamespace => "nn",
            TokenKind::NameVariable => "nv",
            TokenKind::NameVariableInstance => "vi",
            TokenKind::Keyword => "k",
            TokenKind::KeywordNamespace => "kn",
            TokenKind::KeywordDeclaration => "kd",
            TokenKind::Operator => "o",
            TokenKind::Punctuation => "p",
        }
    }

    /// The top-level group of the category (`String`, `Number`, `Keyword`, ...).
    pub fn group(self) -> &'static str {
        let name = self.as_str();
        name.split('.').next().unwrap_or(name)
    }

    /// True if `self` is `other` or refines it through the parent chain.
    pub fn is_a(self, other: TokenKind) -> bool {
        self.lineage().any(|kind| kind == other)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TokenKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A classified span of the source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
    /// Byte range of `text` in the scanned source
    pub span: Range<usize>,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, text: &'src str, start: usize) -> Self {
        Self {
            kind,
            text,
            span: start..start + text.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = TOKEN_KINDS.iter().map(|k| k.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), TOKEN_KINDS.len());
    }

    #[test]
    fn test_keyword_subtypes() {
        assert!(TokenKind::KeywordDeclaration.is_a(TokenKind::Keyword));
        assert!(TokenKind::KeywordNamespace.is_a(TokenKind::Keyword));
        assert!(TokenKind::Keyword.is_a(TokenKind::Keyword));
        assert!(!TokenKind::Keyword.is_a(TokenKind::KeywordDeclaration));
        assert!(!TokenKind::Operator.is_a(TokenKind::Keyword));
    }

    #[test]
    fn test_whitespace_refines_text() {
        assert_eq!(TokenKind::Whitespace.parent(), Some(TokenKind::Text));
        assert!(TokenKind::Whitespace.is_a(TokenKind::Text));
    }

    #[test]
    fn test_literal_subtypes() {
        assert!(TokenKind::StringEscape.is_a(TokenKind::String));
        assert!(TokenKind::StringSymbol.is_a(TokenKind::Literal));
        assert!(TokenKind::NumberFloat.is_a(TokenKind::Number));
        assert!(TokenKind::NumberInteger.is_a(TokenKind::Literal));
        assert!(!TokenKind::NumberFloat.is_a(TokenKind::String));
    }

    #[test]
    fn test_name_subtypes() {
        assert!(TokenKind::NameVariableInstance.is_a(TokenKind::Name));
        assert!(TokenKind::NameNamespace.is_a(TokenKind::Name));
        assert!(!TokenKind::Text.is_a(TokenKind::Name));
    }

    #[test]
    fn test_lineage_ends_at_token() {
        let chain: Vec<_> = TokenKind::StringEscape.lineage().map(TokenKind::as_str).collect();
        assert_eq!(chain, ["String.Escape", "String", "Literal", "Token"]);

        for kind in TOKEN_KINDS {
            assert_eq!(kind.lineage().last(), Some(TokenKind::Token), "{kind}");
            assert!(kind.is_a(TokenKind::Token));
        }
    }

    #[test]
    fn test_group() {
        assert_eq!(TokenKind::NameVariableInstance.group(), "Name");
        assert_eq!(TokenKind::StringEscape.group(), "String");
        assert_eq!(TokenKind::Operator.group(), "Operator");
    }

    #[test]
    fn test_serializes_as_dotted_name() {
        let json = serde_json::to_string(&TokenKind::NumberFloat).unwrap();
        assert_eq!(json, "\"Number.Float\"");
    }

    #[test]
    fn test_token_span() {
        let token = Token::new(TokenKind::Keyword, "def", 4);
        assert_eq!(token.span, 4..7);
    }
}
