use std::fmt;
use std::sync::Arc;

use num_bigint::BigUint;
use tracing::{debug, trace};

use crate::position::{Position, Span};
use crate::token::{Token, TokenKind};

/// Source name used when the caller doesn't supply one.
pub const DEFAULT_SOURCE_NAME: &str = "<stdin>";

/// Classifies a lexer error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    /// Character that cannot start any token.
    IllegalCharacter(char),
}

impl LexErrorKind {
    /// Short human-readable category, e.g. `Illegal character`.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::IllegalCharacter(_) => "Illegal character",
        }
    }

    /// The offending text in single quotes.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::IllegalCharacter(ch) => format!("'{ch}'"),
        }
    }
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category(), self.detail())
    }
}

/// Error produced during lexing.
///
/// `span.start` is the offending character, `span.end` the position
/// just past it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "{kind} in {}, line {}, column {}",
    span.start.source_name,
    span.start.line + 1,
    span.start.column + 1
)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
}

impl LexError {
    #[must_use]
    pub const fn new(kind: LexErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    #[must_use]
    pub const fn category(&self) -> &'static str {
        self.kind.category()
    }

    #[must_use]
    pub fn detail(&self) -> String {
        self.kind.detail()
    }

    /// Legacy one-line rendering kept byte-compatible with existing
    /// consumers: `<category>:<detail>Filename <name>, line<n>`.
    #[must_use]
    pub fn as_string(&self) -> String {
        format!(
            "{}:{}Filename {}, line{}",
            self.category(),
            self.detail(),
            self.span.start.source_name,
            self.span.start.line + 1
        )
    }
}

/// Tokenize `input` under the default source name.
///
/// # Errors
///
/// Returns `LexError` at the first character that cannot start a token.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(DEFAULT_SOURCE_NAME, input).tokenize()
}

/// Single-pass scanner over one source text.
pub struct Lexer {
    chars: Vec<char>,
    position: Position,
    current: Option<char>,
}

impl Lexer {
    #[must_use]
    pub fn new(source_name: &str, source_text: &str) -> Self {
        let chars: Vec<char> = source_text.chars().collect();
        let current = chars.first().copied();
        Self {
            chars,
            position: Position::start(Arc::from(source_name), Arc::from(source_text)),
            current,
        }
    }

    /// Current cursor position.
    #[must_use]
    pub const fn position(&self) -> &Position {
        &self.position
    }

    /// Scan the rest of the input.
    ///
    /// Stops at the first illegal character and returns only the error;
    /// no partial token list is kept. Calling this again on an exhausted
    /// lexer yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns `LexError` at the first illegal character.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(source = %self.position.source_name, len = self.chars.len())
    )]
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        while let Some(ch) = self.current {
            let token = match ch {
                ' ' | '\t' => {
                    self.advance();
                    continue;
                }
                '0'..='9' => self.read_number(),
                _ => match TokenKind::from_symbol(ch) {
                    Some(kind) => self.read_symbol(kind),
                    None => return Err(self.illegal_character(ch)),
                },
            };
            trace!(%token, offset = token.span.start.offset, "token");
            tokens.push(token);
        }

        debug!(count = tokens.len(), "tokenized");
        Ok(tokens)
    }

    fn advance(&mut self) {
        self.position.advance(self.current);
        self.current = self.chars.get(self.position.offset).copied();
    }

    fn span_from(&self, start: Position) -> Span {
        Span::new(start, self.position.clone())
    }

    fn read_symbol(&mut self, kind: TokenKind) -> Token {
        let start = self.position.clone();
        self.advance();
        Token::symbol(kind, self.span_from(start))
    }

    fn read_number(&mut self) -> Token {
        let start = self.position.clone();
        let mut text = String::new();
        let mut seen_dot = false;

        while let Some(ch) = self.current {
            match ch {
                '0'..='9' => text.push(ch),
                // a second dot ends the literal and is left for the main loop
                '.' if !seen_dot => {
                    seen_dot = true;
                    text.push(ch);
                }
                _ => break,
            }
            self.advance();
        }

        let span = self.span_from(start);

        // text is a leading digit, more digits and at most one '.', which
        // both parsers always accept; huge floats saturate to infinity
        if seen_dot {
            Token::float(text.parse().unwrap_or_default(), span)
        } else {
            Token::int(
                BigUint::parse_bytes(text.as_bytes(), 10).unwrap_or_default(),
                span,
            )
        }
    }

    fn illegal_character(&mut self, ch: char) -> LexError {
        let start = self.position.clone();
        self.advance();
        debug!(?ch, offset = start.offset, line = start.line, "illegal character");
        LexError::new(LexErrorKind::IllegalCharacter(ch), self.span_from(start))
    }
}
