//! Lexer for a small arithmetic expression language.
//!
//! Turns source text into integer, float, operator, and parenthesis
//! tokens, or reports the first illegal character with its line,
//! column, and offset.
//!
//! # Quick start
//!
//! ```
//! use arith_lex::{run, TokenKind};
//!
//! let tokens = run("<stdin>", "3 + 4.5").unwrap();
//! let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(kinds, [TokenKind::Int, TokenKind::Plus, TokenKind::Float]);
//! ```
//!
//! ## Errors
//!
//! ```
//! let err = arith_lex::run("calc", "5 & 3").unwrap_err();
//! assert_eq!(err.as_string(), "Illegal character:'&'Filename calc, line1");
//! assert_eq!(err.span.start.column, 2);
//! ```

#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod lexer;
pub mod position;
pub mod token;

pub use lexer::{DEFAULT_SOURCE_NAME, LexError, LexErrorKind, Lexer, tokenize};
pub use position::{Position, Span};
pub use token::{Number, Token, TokenKind};

/// Tokenize `source_text`, reporting positions against `source_name`.
#[tracing::instrument(level = "debug", skip(source_text), fields(len = source_text.len()))]
pub fn run(source_name: &str, source_text: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source_name, source_text).tokenize()
}

/// Render a token list as `[INT:3, PLUS, INT:4]`.
#[must_use]
pub fn format_tokens(tokens: &[Token]) -> String {
    let items: Vec<String> = tokens.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}
