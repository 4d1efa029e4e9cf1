//! Bracket resolution.
//!
//! Brackets are resolved innermost first: the first `)` in the sequence and
//! the last `(` before it always enclose a bracket-free range. That range is
//! copied into its own sequence, normalized and reduced, and the whole
//! `( ... )` span is replaced by the resulting number. Once no bracket is
//! left the remaining flat sequence is normalized and reduced itself.

use crate::evaluator::EvalError;
use crate::normalizer::normalize;
use crate::reducer::reduce;
use crate::syntax::{Token, TokenSequence};

/// Resolves every bracket pair in `seq` and reduces what is left.
pub fn resolve(seq: TokenSequence, domain_checks: bool) -> Result<f64, EvalError> {
    let mut seq = seq;

    while let Some((open, close)) = innermost_pair(&seq)? {
        let inner = seq.slice_between(open, close);
        let value = evaluate_flat(inner, domain_checks)?;
        tracing::debug!(open, close, value, "resolved bracket pair");
        seq = seq.splice_number(open..=close, value);
    }

    evaluate_flat(seq, domain_checks)
}

/// Normalizes and reduces a sequence that holds no brackets.
pub fn evaluate_flat(seq: TokenSequence, domain_checks: bool) -> Result<f64, EvalError> {
    let seq = normalize(seq)?;
    reduce(seq, domain_checks)
}

/// Finds the first closing bracket and the last opening bracket before it.
///
/// `Ok(None)` means the sequence is bracket-free. A closing bracket with no
/// opening bracket before it, or an opening bracket that is never closed, is
/// a syntax error.
fn innermost_pair(seq: &TokenSequence) -> Result<Option<(usize, usize)>, EvalError> {
    let mut last_open = None;

    for (i, token) in seq.as_slice().iter().enumerate() {
        match token {
            Token::OpeningBracket => last_open = Some(i),
            Token::ClosingBracket => {
                return match last_open {
                    Some(open) => Ok(Some((open, i))),
                    None => Err(EvalError::Syntax(
                        "closing bracket without an opening bracket".to_string(),
                    )),
                };
            }
            _ => {}
        }
    }

    match last_open {
        Some(_) => Err(EvalError::Syntax("unclosed bracket".to_string())),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(v: f64) -> Token {
        Token::Number(v)
    }

    #[test]
    fn test_innermost_pair_is_leftmost() {
        // (1)+((2))
        let seq = TokenSequence::new(vec![
            Token::OpeningBracket,
            n(1.0),
            Token::ClosingBracket,
            Token::Add,
            Token::OpeningBracket,
            Token::OpeningBracket,
            n(2.0),
            Token::ClosingBracket,
            Token::ClosingBracket,
        ]);
        assert_eq!(innermost_pair(&seq).unwrap(), Some((0, 2)));
    }

    #[test]
    fn test_nested_pair() {
        let seq = TokenSequence::new(vec![
            Token::OpeningBracket,
            Token::OpeningBracket,
            n(2.0),
            Token::ClosingBracket,
            Token::ClosingBracket,
        ]);
        assert_eq!(innermost_pair(&seq).unwrap(), Some((1, 3)));
    }

    #[test]
    fn test_mismatched_brackets() {
        let seq = TokenSequence::new(vec![Token::ClosingBracket, n(2.0), Token::OpeningBracket]);
        assert!(innermost_pair(&seq).is_err());

        let seq = TokenSequence::new(vec![Token::OpeningBracket, n(2.0)]);
        assert!(innermost_pair(&seq).is_err());
    }

    #[test]
    fn test_resolve_sequential_pairs() {
        // (1+2)*(3+4)
        let seq = TokenSequence::new(vec![
            Token::OpeningBracket,
            n(1.0),
            Token::Add,
            n(2.0),
            Token::ClosingBracket,
            Token::Multiply,
            Token::OpeningBracket,
            n(3.0),
            Token::Add,
            n(4.0),
            Token::ClosingBracket,
        ]);
        assert_eq!(resolve(seq, true).unwrap(), 21.0);
    }
}
