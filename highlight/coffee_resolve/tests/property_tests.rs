//! Property-based tests for position resolution.
//!
//! Two generator families:
//! 1. Constructed captures: a source is assembled from generated pieces
//!    and separators together with the raw stream a tokenizer would
//!    report for it, so the resolved index of every piece is known up
//!    front.
//! 2. Adversarial captures: arbitrary raw streams against arbitrary
//!    sources. These must never panic, must error at most once, and
//!    every token they do resolve must point at the exact source slice
//!    it claims.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use coffee_oracle::ReplayOracle;
use coffee_resolve::{RawToken, ResolvedToken, Resolver};
use proptest::prelude::*;

// -- Constructed captures --

/// One source token together with the capture entry reporting it.
#[derive(Debug, Clone)]
enum Piece {
    Ident(String),
    Number(String),
    Op(&'static str),
}

impl Piece {
    fn kind(&self) -> &'static str {
        match self {
            Piece::Ident(_) => "IDENTIFIER",
            Piece::Number(_) => "NUMBER",
            Piece::Op("=") => "=",
            Piece::Op("+") => "+",
            Piece::Op("==") => "COMPARE",
            Piece::Op(_) => "LOGIC",
        }
    }

    fn value(&self) -> &str {
        match self {
            Piece::Ident(text) | Piece::Number(text) => text,
            Piece::Op(op) => op,
        }
    }
}

fn piece_strategy() -> impl Strategy<Value = Piece> {
    prop_oneof![
        prop::string::string_regex("[a-zéü]{1,6}")
            .expect("valid regex")
            .prop_map(Piece::Ident),
        prop::string::string_regex("[0-9]{1,4}")
            .expect("valid regex")
            .prop_map(Piece::Number),
        prop_oneof![
            Just(Piece::Op("=")),
            Just(Piece::Op("+")),
            Just(Piece::Op("==")),
            Just(Piece::Op("&&")),
        ],
    ]
}

fn separator_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just(" "), Just("  "), Just("\n"), Just("\r\n")]
}

fn program_strategy() -> impl Strategy<Value = Vec<(Piece, &'static str)>> {
    prop::collection::vec((piece_strategy(), separator_strategy()), 0..24)
}

/// Build the source text, the capture a tokenizer would report for it,
/// and the expected character index of every piece.
///
/// Pieces are whitespace-separated, so the earliest occurrence of a
/// piece's value at or after the end of the previous piece is exactly
/// where it was written. Aliased operator values cannot match earlier
/// either: the stretch before the piece is all whitespace.
fn build_program(pieces: &[(Piece, &'static str)]) -> (String, Vec<RawToken>, Vec<usize>) {
    let mut source = String::new();
    let mut capture = Vec::new();
    let mut expected = Vec::new();
    for (i, (piece, separator)) in pieces.iter().enumerate() {
        if i > 0 {
            source.push_str(separator);
        }
        expected.push(source.chars().count());
        capture.push(RawToken::new(piece.kind(), piece.value()));
        source.push_str(piece.value());
    }
    (source, capture, expected)
}

// -- Adversarial captures --

fn arbitrary_text(max: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(any::<char>(), 0..max).prop_map(|chars| chars.into_iter().collect())
}

fn adversarial_kind_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("IDENTIFIER".to_string()),
        Just("STRING".to_string()),
        Just("HERECOMMENT".to_string()),
        Just("TERMINATOR".to_string()),
        Just("(".to_string()),
        Just(")".to_string()),
        Just("@".to_string()),
        prop::string::string_regex("[A-Z]{1,8}").expect("valid regex"),
    ]
}

fn adversarial_capture_strategy() -> impl Strategy<Value = Vec<RawToken>> {
    prop::collection::vec(
        (adversarial_kind_strategy(), arbitrary_text(6))
            .prop_map(|(kind, value)| RawToken::new(kind, value)),
        0..12,
    )
}

// -- Properties --

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// Every piece of a constructed program resolves at the position it
    /// was written to, with its reported kind and its source spelling.
    #[test]
    fn prop_constructed_capture_resolves_exactly(pieces in program_strategy()) {
        let (source, capture, expected) = build_program(&pieces);
        let mut resolver = Resolver::new(ReplayOracle::from_tokens(capture));
        let resolved: Result<Vec<ResolvedToken>, _> = resolver.resolve(&source).collect();
        let Ok(tokens) = resolved else {
            return Err(TestCaseError::fail(format!(
                "constructed capture failed to resolve: {source:?}"
            )));
        };

        prop_assert_eq!(tokens.len(), pieces.len());
        for (i, token) in tokens.iter().enumerate() {
            prop_assert_eq!(token.kind.as_str(), pieces[i].0.kind());
            prop_assert_eq!(token.value.as_str(), pieces[i].0.value());
            prop_assert_eq!(token.index, expected[i]);
        }
    }

    /// Indexes strictly increase along a well-formed stream.
    #[test]
    fn prop_indexes_strictly_increase(pieces in program_strategy()) {
        let (source, capture, _) = build_program(&pieces);
        let mut resolver = Resolver::new(ReplayOracle::from_tokens(capture));
        let resolved: Result<Vec<ResolvedToken>, _> = resolver.resolve(&source).collect();
        let Ok(tokens) = resolved else {
            return Err(TestCaseError::fail("constructed capture failed to resolve"));
        };

        for pair in tokens.windows(2) {
            prop_assert!(pair[0].index < pair[1].index);
        }
    }

    /// Replaying the same capture over the same source is deterministic.
    #[test]
    fn prop_resolution_is_repeatable(pieces in program_strategy()) {
        let (source, capture, _) = build_program(&pieces);
        let mut resolver = Resolver::new(ReplayOracle::from_tokens(capture));

        let first: Vec<_> = resolver.resolve(&source).collect();
        let second: Vec<_> = resolver.resolve(&source).collect();

        prop_assert_eq!(first, second);
    }

    /// A lying capture never panics the scan. It errors at most once,
    /// and every token it does resolve stays inside the source and
    /// reproduces the slice its index points at.
    #[test]
    fn prop_lying_capture_never_panics(
        source in arbitrary_text(40),
        capture in adversarial_capture_strategy(),
    ) {
        let chars: Vec<char> = source.chars().collect();
        let mut resolver = Resolver::new(ReplayOracle::from_tokens(capture));
        let mut errors = 0;
        for result in resolver.resolve(&source) {
            match result {
                Ok(token) => {
                    let len = token.value.chars().count();
                    prop_assert!(token.index + len <= chars.len());
                    let slice: String = chars[token.index..token.index + len].iter().collect();
                    prop_assert_eq!(&slice, &token.value);
                }
                Err(_) => errors += 1,
            }
        }
        prop_assert!(errors <= 1);
    }
}
