//! Property-based tests with proptest.
//!
//! Generate well-formed expressions from known pieces, lex them, and
//! check that the tokens and their spans line up with the pieces.

use arith_lex::{LexErrorKind, Number, TokenKind, tokenize};
use num_bigint::BigUint;
use proptest::prelude::*;

/// One lexeme with the kind it must produce.
fn piece() -> impl Strategy<Value = (String, TokenKind)> {
    prop_oneof![
        any::<u32>().prop_map(|n| (n.to_string(), TokenKind::Int)),
        ("[0-9]{1,6}", "[0-9]{0,6}").prop_map(|(a, b)| (format!("{a}.{b}"), TokenKind::Float)),
        prop::sample::select(vec!['+', '-', '*', '/', '(', ')'])
            .prop_map(|c| (c.to_string(), TokenKind::from_symbol(c).unwrap())),
    ]
}

fn gap() -> impl Strategy<Value = String> {
    "[ \t]{1,3}"
}

proptest! {
    #[test]
    fn whitespace_only_yields_nothing(input in "[ \t]{0,40}") {
        prop_assert_eq!(tokenize(&input), Ok(vec![]));
    }

    #[test]
    fn integers_round_trip(text in "(0|[1-9][0-9]{0,60})") {
        let tokens = tokenize(&text).unwrap();
        let expected: BigUint = text.parse().unwrap();
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, TokenKind::Int);
        prop_assert_eq!(&tokens[0].value, &Some(Number::Int(expected)));
        prop_assert_eq!(tokens[0].to_string(), format!("INT:{text}"));
    }

    #[test]
    fn floats_match_std_parse(text in "[0-9]{1,8}\\.[0-9]{0,8}") {
        let tokens = tokenize(&text).unwrap();
        let expected: f64 = text.parse().unwrap();
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(&tokens[0].value, &Some(Number::Float(expected)));
    }

    #[test]
    fn separated_pieces_lex_in_order(
        pieces in prop::collection::vec((piece(), gap()), 1..12)
    ) {
        let mut input = String::new();
        let mut starts = Vec::new();
        for ((text, _), sep) in &pieces {
            starts.push(input.len());
            input.push_str(text);
            input.push_str(sep);
        }

        let tokens = tokenize(&input).unwrap();
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        let expected: Vec<_> = pieces.iter().map(|((_, kind), _)| *kind).collect();
        prop_assert_eq!(kinds, expected);

        // input is ASCII, so byte and character offsets agree
        for (token, start) in tokens.iter().zip(starts) {
            prop_assert_eq!(token.span.start.offset, start);
            prop_assert_eq!(token.span.start.line, 0);
        }
    }

    #[test]
    fn illegal_character_reports_its_offset(
        prefix in "[0-9+*/() \t-]{0,40}",
        bad in "[a-zA-Z#$%&!?]",
    ) {
        let input = format!("{prefix}{bad}");
        let err = tokenize(&input).unwrap_err();
        let ch = bad.chars().next().unwrap();
        prop_assert_eq!(err.kind, LexErrorKind::IllegalCharacter(ch));
        prop_assert_eq!(err.span.start.offset, prefix.len());
        prop_assert_eq!(err.span.end.offset, prefix.len() + 1);
    }
}
