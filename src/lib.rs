//! # inko-lexer
//!
//! A syntax-highlighting lexer for the Inko programming language.
//!
//! The lexer classifies every run of source characters into a category
//! (keyword, string, number, comment, ...) for rendering. It does not parse,
//! validate or report errors: any input is accepted, and the emitted tokens
//! always concatenate back to the input.
//!
//! ```text
//! for token in inko_lexer::scan("let x = 'hi'") {
//!     println!("{} {:?}", token.kind, token.text);
//! }
//! ```

pub mod inko;

pub use inko::{scan, tokenize, Error, Lexer, LexerInfo, Result, Token, TokenKind, INKO};
