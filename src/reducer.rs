//! Precedence-driven reduction of a flat, normalized token sequence.

use crate::evaluator::EvalError;
use crate::syntax::{BinOp, Precedence, Token, TokenSequence};

/// Collapses `seq` to a single number.
///
/// Each step folds the leftmost operator of the highest precedence class
/// present together with its two neighbours, so `2+3*4` folds `3*4` first
/// and `10-2-3` folds `10-2` first.
///
/// With `domain_checks` set, a NaN or infinite step result is an error:
/// NaN from `^` or `v` is [`EvalError::RootOfNegative`], anything else is
/// [`EvalError::Unknown`]. The final value is checked as well, so an
/// overflowing literal that needs no step is rejected too.
pub fn reduce(seq: TokenSequence, domain_checks: bool) -> Result<f64, EvalError> {
    let mut seq = seq;

    while seq.len() > 1 {
        let index = find_next_operator(seq.as_slice()).ok_or_else(|| {
            EvalError::Syntax(format!("missing operator in '{}'", seq))
        })?;
        let op = seq
            .get(index)
            .and_then(|t| t.binop())
            .ok_or_else(|| EvalError::Unknown(format!("no operator at position {}", index)))?;

        let x = operand(&seq, index.checked_sub(1), op)?;
        let y = operand(&seq, Some(index + 1), op)?;
        let value = op.apply(x, y);
        tracing::trace!(x, op = %op.symbol(), y, value, "reduce step");

        if domain_checks {
            check_domain(op, x, y, value)?;
        }

        seq = seq.splice_number(index - 1..=index + 1, value);
    }

    match seq.get(0) {
        Some(Token::Number(value)) if domain_checks && !value.is_finite() => {
            Err(EvalError::Unknown(format!("{} is not a finite number", value)))
        }
        Some(Token::Number(value)) => Ok(value),
        Some(Token::Answer) => Err(EvalError::Unknown("answer reference was never bound".to_string())),
        Some(other) => Err(EvalError::Syntax(format!("'{}' is not a value", other))),
        None => Err(EvalError::Syntax("empty expression".to_string())),
    }
}

/// Index of the leftmost operator in the highest precedence class.
///
/// Leftmost keeps same-class operators left to right: `10-2-3` folds `10-2`
/// first and gives `5`, where taking the last one would give `10-(2-3) = 11`.
fn find_next_operator(tokens: &[Token]) -> Option<usize> {
    let mut best: Option<(Precedence, usize)> = None;

    for (i, token) in tokens.iter().enumerate() {
        let Some(class) = token.precedence() else {
            continue;
        };
        if class == Precedence::Operand {
            continue;
        }
        if best.is_none_or(|(top, _)| class > top) {
            best = Some((class, i));
            if class == Precedence::Exponent {
                break;
            }
        }
    }

    best.map(|(_, i)| i)
}

fn operand(seq: &TokenSequence, index: Option<usize>, op: BinOp) -> Result<f64, EvalError> {
    match index.and_then(|i| seq.get(i)) {
        Some(Token::Number(n)) => Ok(n),
        Some(Token::Answer) => Err(EvalError::Unknown("answer reference was never bound".to_string())),
        _ => Err(EvalError::Syntax(format!(
            "operator '{}' is missing an operand",
            op.symbol()
        ))),
    }
}

fn check_domain(op: BinOp, x: f64, y: f64, value: f64) -> Result<(), EvalError> {
    if value.is_finite() {
        return Ok(());
    }
    if value.is_nan() && op.is_exponential() && x.is_finite() && y.is_finite() {
        return Err(EvalError::RootOfNegative(format!(
            "{} {} {} has no real result",
            x,
            op.symbol(),
            y
        )));
    }
    if op == BinOp::Divide && y == 0.0 {
        return Err(EvalError::Unknown(format!("division of {} by zero", x)));
    }
    Err(EvalError::Unknown(format!(
        "{} {} {} is not a finite number",
        x,
        op.symbol(),
        y
    )))
}
