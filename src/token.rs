use std::fmt;

use num_bigint::BigUint;

use crate::position::Span;

/// Token kinds produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Integer literal.
    Int,
    /// Floating-point literal (digits with one `.`).
    Float,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Divide,
    /// `(`
    LParen,
    /// `)`
    RParen,
}

impl TokenKind {
    /// Kind of a single-character operator or parenthesis.
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Minus),
            '*' => Some(Self::Star),
            '/' => Some(Self::Divide),
            '(' => Some(Self::LParen),
            ')' => Some(Self::RParen),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Int => "INT",
            Self::Float => "FLOAT",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Star => "STAR",
            Self::Divide => "DIVIDE",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value carried by a numeric literal.
///
/// Integer literals are unbounded; a digit run never overflows.
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    Int(BigUint),
    Float(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write_float(f, *x),
        }
    }
}

/// Shortest round-trip digits, laid out like Python's `repr`: fixed
/// notation with at least one fractional digit when the decimal exponent
/// is in `-4..16`, otherwise `1e+16` / `1.5e-05` style.
fn write_float(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    if !x.is_finite() {
        return write!(f, "{x}");
    }

    let sci = format!("{x:e}");
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if (-4..16).contains(&exponent) {
        let fixed = x.to_string();
        if fixed.contains('.') {
            f.write_str(&fixed)
        } else {
            write!(f, "{fixed}.0")
        }
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        write!(f, "{mantissa}e{sign}{:02}", exponent.abs())
    }
}

/// A single token with its kind, literal value, and source span.
///
/// Only `Int` and `Float` tokens carry a value; the constructors
/// enforce this.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: Option<Number>,
    pub span: Span,
}

impl Token {
    /// Operator or parenthesis token.
    #[must_use]
    pub const fn symbol(kind: TokenKind, span: Span) -> Self {
        Self {
            kind,
            value: None,
            span,
        }
    }

    #[must_use]
    pub const fn int(value: BigUint, span: Span) -> Self {
        Self {
            kind: TokenKind::Int,
            value: Some(Number::Int(value)),
            span,
        }
    }

    #[must_use]
    pub const fn float(value: f64, span: Span) -> Self {
        Self {
            kind: TokenKind::Float,
            value: Some(Number::Float(value)),
            span,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}:{value}", self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}
