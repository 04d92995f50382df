//! Inko highlighting lexer
//!
//!     rules:    the state/rule table (what is matched, in which order)
//!     lexing:   the scanner that walks the table over a source buffer
//!     token:    token categories and the emitted token type
//!     info:     name, aliases and filename patterns for host registration
//!     formats:  renderers for scanned tokens (tokens, json, yaml, html, ansi)
//!     config:   layered TOML configuration for the formats and CLI

pub mod config;
pub mod error;
pub mod formats;
pub mod info;
pub mod lexing;
pub mod rules;
pub mod token;

pub use error::{Error, Result};
pub use info::{LexerInfo, INKO};
pub use lexing::{scan, tokenize, Lexer};
pub use rules::{StateId, KEYWORDS};
pub use token::{Token, TokenKind, TOKEN_KINDS};
