use std::fmt;

use super::operators::{BinOp, Precedence};
use crate::config::DEFAULT_SQRT_SYMBOL;

/// A single classified unit of input.
///
/// Only [`Token::Number`] carries a value; every other kind is a bare marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// Numeric literal, or the folded result of a reduction step
    ///
    /// # Examples
    /// ```text
    /// 42
    /// 3.14
    /// 3,14
    /// ```
    Number(f64),

    /// Addition (`+`), also a unary sign before normalization
    Add,

    /// Subtraction (`-`), also a unary sign before normalization
    Subtract,

    /// Multiplication (`*`)
    Multiply,

    /// Division (`/`)
    Divide,

    /// Exponentiation (`^`)
    ///
    /// # Examples
    /// ```text
    /// 2^10
    /// ```
    Power,

    /// Root (`v`), degree on the left and radicand on the right
    ///
    /// # Examples
    /// ```text
    /// 3v27
    /// ```
    Root,

    /// Unary square root prefix, desugared to `2 v` by the normalizer
    ///
    /// # Examples
    /// ```text
    /// √16
    /// ```
    SquareRoot,

    /// Opening bracket `(`
    OpeningBracket,

    /// Closing bracket `)`
    ClosingBracket,

    /// Reference to the previous answer (`a`)
    Answer,
}

impl Token {
    /// Precedence class used by the reducer. Brackets and the square root
    /// prefix never take part in reduction and report `None`.
    pub fn precedence(&self) -> Option<Precedence> {
        match self {
            Token::Number(_) | Token::Answer => Some(Precedence::Operand),
            Token::Add | Token::Subtract => Some(Precedence::Additive),
            Token::Multiply | Token::Divide => Some(Precedence::Multiplicative),
            Token::Power | Token::Root => Some(Precedence::Exponent),
            Token::SquareRoot | Token::OpeningBracket | Token::ClosingBracket => None,
        }
    }

    /// True for `+` and `-`.
    pub fn is_sign(&self) -> bool {
        matches!(self, Token::Add | Token::Subtract)
    }

    /// True for every token whose precedence class is above operands.
    pub fn is_operator(&self) -> bool {
        self.precedence().is_some_and(|p| p > Precedence::Operand)
    }

    /// The binary operation this token stands for, if any.
    pub fn binop(&self) -> Option<BinOp> {
        match self {
            Token::Add => Some(BinOp::Add),
            Token::Subtract => Some(BinOp::Subtract),
            Token::Multiply => Some(BinOp::Multiply),
            Token::Divide => Some(BinOp::Divide),
            Token::Power => Some(BinOp::Power),
            Token::Root => Some(BinOp::Root),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Add => write!(f, "+"),
            Token::Subtract => write!(f, "-"),
            Token::Multiply => write!(f, "*"),
            Token::Divide => write!(f, "/"),
            Token::Power => write!(f, "^"),
            Token::Root => write!(f, "v"),
            Token::SquareRoot => write!(f, "{}", DEFAULT_SQRT_SYMBOL),
            Token::OpeningBracket => write!(f, "("),
            Token::ClosingBracket => write!(f, ")"),
            Token::Answer => write!(f, "a"),
        }
    }
}

/// An ordered list of tokens.
///
/// Each pipeline stage takes a sequence by value and hands back a new one,
/// so an outer sequence and a bracketed sub-sequence never share storage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenSequence {
    tokens: Vec<Token>,
}

impl TokenSequence {
    pub fn new(tokens: Vec<Token>) -> Self {
        TokenSequence { tokens }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    pub fn get(&self, index: usize) -> Option<Token> {
        self.tokens.get(index).copied()
    }

    pub fn into_vec(self) -> Vec<Token> {
        self.tokens
    }

    /// Replaces every [`Token::Answer`] with a number holding `answer`.
    pub fn bind_answer(self, answer: f64) -> Self {
        self.tokens
            .into_iter()
            .map(|t| match t {
                Token::Answer => Token::Number(answer),
                other => other,
            })
            .collect()
    }

    /// Copies out the tokens strictly between `open` and `close`.
    pub fn slice_between(&self, open: usize, close: usize) -> TokenSequence {
        TokenSequence::new(self.tokens[open + 1..close].to_vec())
    }

    /// Builds a new sequence with `range` replaced by `value`.
    pub fn splice_number(
        &self,
        range: std::ops::RangeInclusive<usize>,
        value: f64,
    ) -> TokenSequence {
        let (start, end) = (*range.start(), *range.end());
        let mut tokens = Vec::with_capacity(self.tokens.len() + start - end);
        tokens.extend_from_slice(&self.tokens[..start]);
        tokens.push(Token::Number(value));
        tokens.extend_from_slice(&self.tokens[end + 1..]);
        TokenSequence::new(tokens)
    }
}

impl FromIterator<Token> for TokenSequence {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        TokenSequence::new(iter.into_iter().collect())
    }
}

impl From<Vec<Token>> for TokenSequence {
    fn from(tokens: Vec<Token>) -> Self {
        TokenSequence::new(tokens)
    }
}

impl fmt::Display for TokenSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.display_with(DEFAULT_SQRT_SYMBOL).fmt(f)
    }
}

impl TokenSequence {
    /// Renders the sequence with `sqrt_symbol` for [`Token::SquareRoot`],
    /// so a dump reads back with the same configuration.
    pub fn display_with(&self, sqrt_symbol: char) -> DisplayTokens<'_> {
        DisplayTokens {
            tokens: &self.tokens,
            sqrt_symbol,
        }
    }
}

/// Space separated rendering of a [`TokenSequence`].
pub struct DisplayTokens<'a> {
    tokens: &'a [Token],
    sqrt_symbol: char,
}

impl fmt::Display for DisplayTokens<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            match token {
                Token::SquareRoot => write!(f, "{}", self.sqrt_symbol)?,
                other => write!(f, "{}", other)?,
            }
        }
        Ok(())
    }
}
