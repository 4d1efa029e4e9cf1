//! Rewrites a flat token sequence into canonical form.
//!
//! Normalization runs five passes in a fixed order:
//!
//! 1. `√x` becomes `2 v x`, so every root has a left-hand degree
//! 2. runs of `+`/`-` collapse into one sign (`--` is `+`, `+-` is `-`)
//! 3. a leading sign gets a `0` operand in front, any other leading
//!    operator is a syntax error
//! 4. a sign right after an operator is folded into the following number
//!    (`2*-3` becomes `2 * -3`)
//! 5. any operator still adjacent to another operator, or left dangling at
//!    the end, is a syntax error
//!
//! The input must not contain brackets; see [`crate::brackets`].

use crate::evaluator::EvalError;
use crate::syntax::{Precedence, Token, TokenSequence};

/// Runs all normalization passes over `seq`.
pub fn normalize(seq: TokenSequence) -> Result<TokenSequence, EvalError> {
    if seq.is_empty() {
        return Err(EvalError::Syntax("empty expression".to_string()));
    }

    let tokens = desugar_square_roots(seq.into_vec());
    let tokens = collapse_signs(tokens);
    let tokens = handle_leading_operator(tokens)?;
    let tokens = fold_signs_after_operators(tokens);
    validate(&tokens)?;

    let seq = TokenSequence::new(tokens);
    tracing::debug!(tokens = %seq, "normalized");
    Ok(seq)
}

fn desugar_square_roots(tokens: Vec<Token>) -> Vec<Token> {
    let mut out = Vec::with_capacity(tokens.len());
    for token in tokens {
        if token == Token::SquareRoot {
            out.push(Token::Number(2.0));
            out.push(Token::Root);
        } else {
            out.push(token);
        }
    }
    out
}

fn combine_signs(left: Token, right: Token) -> Token {
    if left == right { Token::Add } else { Token::Subtract }
}

fn collapse_signs(tokens: Vec<Token>) -> Vec<Token> {
    let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
    for token in tokens {
        match out.last_mut() {
            Some(last) if last.is_sign() && token.is_sign() => {
                *last = combine_signs(*last, token);
            }
            _ => out.push(token),
        }
    }
    out
}

fn handle_leading_operator(mut tokens: Vec<Token>) -> Result<Vec<Token>, EvalError> {
    match tokens.first() {
        Some(first) if first.is_sign() => {
            tokens.insert(0, Token::Number(0.0));
            Ok(tokens)
        }
        Some(first) if first.precedence() >= Some(Precedence::Multiplicative) => Err(
            EvalError::Syntax(format!("expression cannot start with '{}'", first)),
        ),
        _ => Ok(tokens),
    }
}

fn fold_signs_after_operators(tokens: Vec<Token>) -> Vec<Token> {
    let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut iter = tokens.into_iter().peekable();

    while let Some(token) = iter.next() {
        let after_operator = out.last().is_some_and(|t| t.is_operator());
        match token {
            Token::Add if after_operator => {}
            Token::Subtract if after_operator => {
                if let Some(Token::Number(n)) = iter.peek().copied() {
                    iter.next();
                    out.push(Token::Number(-n));
                }
            }
            other => out.push(other),
        }
    }
    out
}

fn validate(tokens: &[Token]) -> Result<(), EvalError> {
    for pair in tokens.windows(2) {
        if pair[0].is_operator() && pair[1].is_operator() {
            return Err(EvalError::Syntax(format!(
                "operator '{}' cannot follow '{}'",
                pair[1], pair[0]
            )));
        }
    }

    match tokens.last() {
        Some(last) if last.is_operator() => Err(EvalError::Syntax(format!(
            "expression cannot end with '{}'",
            last
        ))),
        None => Err(EvalError::Syntax("empty expression".to_string())),
        _ => Ok(()),
    }
}
