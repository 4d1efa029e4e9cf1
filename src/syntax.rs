//! # Tally - Token Model
//!
//! This module defines the token model shared by every stage of the
//! evaluation pipeline.
//!
//! ## Architecture Overview
//!
//! - **[tokens]** - Typed tokens produced by the lexer and the ordered
//!   [`TokenSequence`] threaded through the pipeline
//! - **[operators]** - Binary operators, their precedence classes and how
//!   each one combines two operands
//!
//! ## Pipeline
//!
//! ```text
//! "2*(3+4)" --> lexer --> [2 * ( 3 + 4 )]
//!           --> brackets: ( 3 + 4 ) --> normalizer --> reducer --> 7
//!           --> [2 * 7] --> normalizer --> reducer --> 14
//! ```
//!
//! ## Grammar
//!
//! ```text
//! 12.5  3,25        numbers (`,` is a decimal separator)
//! + - * / ^         binary operators
//! 3v8               root: degree on the left, radicand on the right
//! √9                square root prefix (symbol is configurable)
//! ( )               grouping
//! a                 the previous answer
//! ```
//!
//! Every other character, whitespace included, is ignored.
pub mod operators;
pub mod tokens;

pub use operators::{BinOp, Precedence};
pub use tokens::{DisplayTokens, Token, TokenSequence};
