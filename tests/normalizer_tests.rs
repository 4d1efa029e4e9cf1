// tests/normalizer_tests.rs

use tally_calc::normalizer::normalize;
use tally_calc::{tokenize, ErrorKind, Token, TokenSequence};

fn normalized(input: &str) -> Vec<Token> {
    let seq = tokenize(input, '√').unwrap();
    normalize(seq).unwrap().into_vec()
}

fn normalize_err(input: &str) -> ErrorKind {
    let seq = tokenize(input, '√').unwrap();
    normalize(seq).unwrap_err().kind()
}

// ============================================================================
// Square Root Desugaring
// ============================================================================

#[test]
fn test_square_root_becomes_degree_two_root() {
    assert_eq!(
        normalized("√9"),
        vec![Token::Number(2.0), Token::Root, Token::Number(9.0)]
    );
}

#[test]
fn test_nested_square_roots() {
    assert_eq!(
        normalized("√√16"),
        vec![
            Token::Number(2.0),
            Token::Root,
            Token::Number(2.0),
            Token::Root,
            Token::Number(16.0),
        ]
    );
}

// ============================================================================
// Sign Collapsing
// ============================================================================

#[test]
fn test_sign_rules() {
    let test_cases = vec![
        ("1++2", Token::Add),
        ("1+-2", Token::Subtract),
        ("1-+2", Token::Subtract),
        ("1--2", Token::Add),
        ("1---2", Token::Subtract),
        ("1-+-+-2", Token::Subtract),
    ];

    for (input, sign) in test_cases {
        assert_eq!(
            normalized(input),
            vec![Token::Number(1.0), sign, Token::Number(2.0)],
            "Failed for input: {}",
            input
        );
    }
}

// ============================================================================
// Leading Operators
// ============================================================================

#[test]
fn test_leading_sign_gets_zero_operand() {
    assert_eq!(
        normalized("-5"),
        vec![Token::Number(0.0), Token::Subtract, Token::Number(5.0)]
    );
    assert_eq!(
        normalized("--5"),
        vec![Token::Number(0.0), Token::Add, Token::Number(5.0)]
    );
}

#[test]
fn test_leading_higher_operator_is_error() {
    for input in ["*2", "/2", "^2", "v8"] {
        assert_eq!(normalize_err(input), ErrorKind::Syntax, "Failed for input: {}", input);
    }
}

#[test]
fn test_leading_square_root_is_fine() {
    assert_eq!(normalized("-√4")[0], Token::Number(0.0));
}

// ============================================================================
// Signs After Operators
// ============================================================================

#[test]
fn test_minus_after_operator_negates_number() {
    assert_eq!(
        normalized("2*-3"),
        vec![Token::Number(2.0), Token::Multiply, Token::Number(-3.0)]
    );
    assert_eq!(
        normalized("2^-1"),
        vec![Token::Number(2.0), Token::Power, Token::Number(-1.0)]
    );
}

#[test]
fn test_plus_after_operator_is_dropped() {
    assert_eq!(
        normalized("2/+4"),
        vec![Token::Number(2.0), Token::Divide, Token::Number(4.0)]
    );
}

#[test]
fn test_double_minus_after_operator() {
    // `--` collapses to `+` first, which is then dropped
    assert_eq!(
        normalized("2*--3"),
        vec![Token::Number(2.0), Token::Multiply, Token::Number(3.0)]
    );
}

// ============================================================================
// Residual Validation
// ============================================================================

#[test]
fn test_adjacent_operators_are_errors() {
    for input in ["2**3", "2*/3", "2^*3", "2v^3", "2+*3"] {
        assert_eq!(normalize_err(input), ErrorKind::Syntax, "Failed for input: {}", input);
    }
}

#[test]
fn test_trailing_operator_is_error() {
    for input in ["2+", "2*", "2*-", "3v"] {
        assert_eq!(normalize_err(input), ErrorKind::Syntax, "Failed for input: {}", input);
    }
}

#[test]
fn test_lone_sign_is_error() {
    assert_eq!(normalize_err("-"), ErrorKind::Syntax);
}

#[test]
fn test_empty_sequence_is_error() {
    let err = normalize(TokenSequence::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Syntax);
}

// ============================================================================
// Idempotence
// ============================================================================

#[test]
fn test_normalizing_twice_changes_nothing() {
    for input in ["-5", "2*-3", "1--2", "√9+-√4", "a*-2", "0--5"] {
        let once = normalize(tokenize(input, '√').unwrap()).unwrap();
        let twice = normalize(once.clone()).unwrap();
        assert_eq!(once, twice, "Failed for input: {}", input);
    }
}
