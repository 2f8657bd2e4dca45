#![allow(dead_code)]

use arith_lex::{Number, Token, TokenKind, format_tokens, run};
use num_bigint::BigUint;

pub fn kinds(input: &str) -> Vec<TokenKind> {
    lex(input).iter().map(|t| t.kind).collect()
}

pub fn int(n: u64) -> Number {
    Number::Int(BigUint::from(n))
}

pub fn lex(input: &str) -> Vec<Token> {
    run("test", input).unwrap_or_else(|e| panic!("failed to lex {input:?}: {e}"))
}

/// Helper: assert the rendered token list, e.g. `[INT:3, PLUS, INT:4]`.
pub fn assert_rendered(input: &str, expected: &str) {
    let output = format_tokens(&lex(input));
    pretty_assertions::assert_eq!(
        output, expected,
        "rendering mismatch for input {input:?}"
    );
}
