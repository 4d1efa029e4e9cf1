//! Evaluator configuration.

use std::fmt;

/// Default prefix character for the unary square root.
pub const DEFAULT_SQRT_SYMBOL: char = '√';

/// Characters the lexer already gives a meaning to.
const RESERVED: &[char] = &['.', ',', '+', '-', '*', '/', '^', 'v', '(', ')', 'a'];

/// Settings that change how an expression is read and evaluated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvalConfig {
    /// Character recognised as the unary square root prefix
    pub sqrt_symbol: char,
    /// Turn NaN and infinite results into errors instead of returning them
    pub domain_checks: bool,
}

impl Default for EvalConfig {
    fn default() -> Self {
        EvalConfig {
            sqrt_symbol: DEFAULT_SQRT_SYMBOL,
            domain_checks: true,
        }
    }
}

impl EvalConfig {
    pub fn with_sqrt_symbol(mut self, symbol: char) -> Self {
        self.sqrt_symbol = symbol;
        self
    }

    pub fn with_domain_checks(mut self, enabled: bool) -> Self {
        self.domain_checks = enabled;
        self
    }

    /// Rejects a square root symbol that the lexer would read as something else.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let c = self.sqrt_symbol;
        if c.is_ascii_digit() || c.is_whitespace() || RESERVED.contains(&c) {
            return Err(ConfigError::ReservedSqrtSymbol(c));
        }
        Ok(())
    }
}

/// Invalid configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The square root symbol collides with a digit, separator or operator
    ReservedSqrtSymbol(char),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ReservedSqrtSymbol(c) => {
                write!(f, "'{}' cannot be the square root symbol, it already has a meaning", c)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
