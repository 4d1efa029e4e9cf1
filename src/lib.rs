pub mod brackets;
pub mod cli;
pub mod config;
pub mod evaluator;
pub mod lexer;
pub mod normalizer;
pub mod output;
pub mod reducer;
pub mod shared;
pub mod syntax;

pub use config::{ConfigError, EvalConfig};
pub use evaluator::{ErrorKind, EvalError, Evaluator};
pub use lexer::{tokenize, Lexer};
pub use output::{format_number, format_number_with_precision};
pub use shared::SharedEvaluator;
pub use syntax::{BinOp, Precedence, Token, TokenSequence};
