//! Rule Table
//!
//!     The lexer is a table of regex rules grouped into states. Each state is an
//!     ordered list; at every cursor position the lexer tries the rules of the
//!     active state in declaration order and the first one that matches wins.
//!     Order therefore encodes precedence: numbers before words, `name::` before
//!     `name:` before plain words, `let` before the catch-all identifier rule.
//!
//!     The grammar is data, not code. States are declared as const arrays of
//!     [RuleDef] and compiled once into [RuleTable] on first use.
//!
//! States
//!
//!     root:                  top-level Inko code
//!     double-quoted-string:  entered on `"`, left on the closing `"`
//!     single-quoted-string:  entered on `'`, left on the closing `'`

use super::error::{Error, Result};
use super::token::TokenKind;
use once_cell::sync::Lazy;
use regex::{Captures, Match, Regex, RegexBuilder};

/// Words highlighted as [TokenKind::Keyword] when they appear as whole words.
pub const KEYWORDS: &[&str] = &[
    "as", "def", "do", "else", "for", "impl", "lambda", "mut", "object", "return", "self",
    "static", "throw", "trait", "try", "when", "match",
];

/// Identifier of a lexer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateId {
    Root,
    DoubleQuotedString,
    SingleQuotedString,
}

impl StateId {
    pub const ALL: [StateId; 3] = [
        StateId::Root,
        StateId::DoubleQuotedString,
        StateId::SingleQuotedString,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StateId::Root => "root",
            StateId::DoubleQuotedString => "double-quoted-string",
            StateId::SingleQuotedString => "single-quoted-string",
        }
    }

    fn index(self) -> usize {
        match self {
            StateId::Root => 0,
            StateId::DoubleQuotedString => 1,
            StateId::SingleQuotedString => 2,
        }
    }

    /// The declared rules of this state.
    pub fn definitions(self) -> &'static [RuleDef] {
        match self {
            StateId::Root => ROOT,
            StateId::DoubleQuotedString => DOUBLE_QUOTED_STRING,
            StateId::SingleQuotedString => SINGLE_QUOTED_STRING,
        }
    }
}

/// Source of a rule's regex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// A literal regex
    Regex(&'static str),
    /// An alternation of literal words followed by a suffix pattern
    Words(&'static [&'static str], &'static str),
}

impl Pattern {
    /// The regex source this pattern compiles from.
    pub fn source(&self) -> String {
        match self {
            Pattern::Regex(source) => (*source).to_string(),
            Pattern::Words(words, suffix) => {
                let alternatives: Vec<String> = words.iter().map(|w| regex::escape(w)).collect();
                format!("(?:{}){}", alternatives.join("|"), suffix)
            }
        }
    }
}

/// What a matching rule emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// One token covering the whole match
    Emit(TokenKind),
    /// One token per capture group, in group order
    ByGroups(&'static [TokenKind]),
}

/// State change applied after a rule matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Stay,
    Push(StateId),
    Pop,
}

/// A declared rule, before compilation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleDef {
    pub pattern: Pattern,
    pub action: Action,
    pub transition: Transition,
}

const fn rule(pattern: &'static str, kind: TokenKind) -> RuleDef {
    RuleDef {
        pattern: Pattern::Regex(pattern),
        action: Action::Emit(kind),
        transition: Transition::Stay,
    }
}

const fn rule_then(pattern: &'static str, kind: TokenKind, transition: Transition) -> RuleDef {
    RuleDef {
        pattern: Pattern::Regex(pattern),
        action: Action::Emit(kind),
        transition,
    }
}

pub const ROOT: &[RuleDef] = &[
    rule(r"#.*$", TokenKind::CommentSingle),
    rule_then(
        r#"""#,
        TokenKind::StringDouble,
        Transition::Push(StateId::DoubleQuotedString),
    ),
    rule_then(
        r"'",
        TokenKind::StringSingle,
        Transition::Push(StateId::SingleQuotedString),
    ),
    rule(r"(?i)-?0x[0-9a-f_]+", TokenKind::NumberInteger),
    rule(r"(?i)-?[\d_]+\.\d+(e[+-]?\d+)?", TokenKind::NumberFloat),
    rule(r"(?i)-?[\d_]+(e[+-]?\d+)?", TokenKind::NumberInteger),
    RuleDef {
        pattern: Pattern::Regex(r"(\w+)(::)"),
        action: Action::ByGroups(&[TokenKind::NameNamespace, TokenKind::Text]),
        transition: Transition::Stay,
    },
    rule(r"\w+:", TokenKind::StringSymbol),
    rule(r"(->|!!)", TokenKind::Keyword),
    rule(r"((<|>|\+|-|/|\*)=?|==)", TokenKind::Operator),
    rule(r"try!", TokenKind::Keyword),
    rule(r"import", TokenKind::KeywordNamespace),
    rule(r"let", TokenKind::KeywordDeclaration),
    RuleDef {
        pattern: Pattern::Words(KEYWORDS, r"\b"),
        action: Action::Emit(TokenKind::Keyword),
        transition: Transition::Stay,
    },
    rule(r"!|\?|\}|\{|\[|\]|\.|,|:|\(|\)|=", TokenKind::Punctuation),
    rule(r"@\w\w+", TokenKind::NameVariableInstance),
    rule(r"\w+\b", TokenKind::Text),
    rule(r"\s+", TokenKind::Whitespace),
];

pub const DOUBLE_QUOTED_STRING: &[RuleDef] = &[
    rule(r#"[^"\\]+"#, TokenKind::StringDouble),
    rule(r"\\.", TokenKind::StringEscape),
    rule_then(r#"""#, TokenKind::StringDouble, Transition::Pop),
];

pub const SINGLE_QUOTED_STRING: &[RuleDef] = &[
    rule(r"[^'\\]+", TokenKind::StringSingle),
    rule(r"\\.", TokenKind::StringEscape),
    rule_then(r"'", TokenKind::StringSingle, Transition::Pop),
];

/// A compiled rule. The regex only matches at the start of the haystack.
#[derive(Debug, Clone)]
pub struct Rule {
    regex: Regex,
    pub action: Action,
    pub transition: Transition,
}

impl Rule {
    pub fn compile(def: &RuleDef) -> Result<Self> {
        let source = def.pattern.source();
        // `$` is end-of-line, as highlighting grammars expect
        let regex = RegexBuilder::new(&format!(r"\A(?:{source})"))
            .multi_line(true)
            .build()
            .map_err(|source_err| Error::InvalidPattern {
                pattern: source,
                source: source_err,
            })?;

        Ok(Self {
            regex,
            action: def.action,
            transition: def.transition,
        })
    }

    /// Match at the very start of `rest`.
    pub fn find<'s>(&self, rest: &'s str) -> Option<Match<'s>> {
        self.regex.find(rest)
    }

    /// Match at the very start of `rest`, with capture groups.
    pub fn captures<'s>(&self, rest: &'s str) -> Option<Captures<'s>> {
        self.regex.captures(rest)
    }
}

/// All states, compiled.
#[derive(Debug, Clone)]
pub struct RuleTable {
    states: Vec<Vec<Rule>>,
}

impl RuleTable {
    pub fn compile() -> Result<Self> {
        let states = StateId::ALL
            .iter()
            .map(|state| {
                state
                    .definitions()
                    .iter()
                    .map(Rule::compile)
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { states })
    }

    pub fn rules(&self, state: StateId) -> &[Rule] {
        &self.states[state.index()]
    }
}

/// The compiled Inko rule table, shared by every lexer.
pub static RULES: Lazy<RuleTable> =
    Lazy::new(|| RuleTable::compile().expect("built-in rule patterns are valid regexes"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_rules_compile() {
        let table = RuleTable::compile().unwrap();
        for state in StateId::ALL {
            assert_eq!(table.rules(state).len(), state.definitions().len());
        }
    }

    #[test]
    fn test_keyword_pattern_source() {
        let source = Pattern::Words(&["do", "try"], r"\b").source();
        assert_eq!(source, r"(?:do|try)\b");
    }

    #[test]
    fn test_rules_are_anchored() {
        let rule = Rule::compile(&rule(r"\d+", TokenKind::NumberInteger)).unwrap();
        assert!(rule.find("abc 123").is_none());
        assert_eq!(rule.find("123 abc").map(|m| m.as_str()), Some("123"));
    }

    #[test]
    fn test_comment_stops_at_end_of_line() {
        let comment = Rule::compile(&ROOT[0]).unwrap();
        let m = comment.find("# note\nlet a = 1").unwrap();
        assert_eq!(m.as_str(), "# note");
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        let def = rule(r"(unclosed", TokenKind::Text);
        let err = Rule::compile(&def).unwrap_err();
        assert!(matches!(err, Error::InvalidPattern { ref pattern, .. } if pattern == "(unclosed"));
    }

    #[test]
    fn test_string_states_pop_on_closing_quote() {
        let last = DOUBLE_QUOTED_STRING.last().unwrap();
        assert_eq!(last.transition, Transition::Pop);
        let last = SINGLE_QUOTED_STRING.last().unwrap();
        assert_eq!(last.transition, Transition::Pop);
    }

    #[test]
    fn test_state_names() {
        let names: Vec<_> = StateId::ALL.iter().map(|s| s.name()).collect();
        assert_eq!(
            names,
            vec!["root", "double-quoted-string", "single-quoted-string"]
        );
    }
}
