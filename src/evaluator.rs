use std::fmt;

use crate::{brackets, config::EvalConfig, lexer, output};

/// The three outcomes a user can see instead of a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Syntax,
    RootOfNegative,
    Unknown,
}

impl ErrorKind {
    /// The line printed in place of a result.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Syntax => "SYNTAX ERROR",
            ErrorKind::RootOfNegative => "ROOT OF NEGATIVE ERROR",
            ErrorKind::Unknown => "UNKNOWN ERROR",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while evaluating an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// Malformed input: no tokens, misplaced operators, unmatched brackets
    Syntax(String),

    /// A root or power with no real result
    RootOfNegative(String),

    /// Any other failure, including non-finite results
    Unknown(String),
}

impl EvalError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EvalError::Syntax(_) => ErrorKind::Syntax,
            EvalError::RootOfNegative(_) => ErrorKind::RootOfNegative,
            EvalError::Unknown(_) => ErrorKind::Unknown,
        }
    }

    /// The detail message without the kind prefix.
    pub fn detail(&self) -> &str {
        match self {
            EvalError::Syntax(msg) | EvalError::RootOfNegative(msg) | EvalError::Unknown(msg) => msg,
        }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::Syntax(msg) => write!(f, "Syntax error: {}", msg),
            EvalError::RootOfNegative(msg) => write!(f, "Root of negative: {}", msg),
            EvalError::Unknown(msg) => write!(f, "Unknown error: {}", msg),
        }
    }
}

impl std::error::Error for EvalError {}

/// Evaluates single-line expressions and remembers the last answer.
///
/// The last answer starts at `0` and is only overwritten when a whole
/// expression succeeds.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    last_answer: f64,
    config: EvalConfig,
}

impl Evaluator {
    /// Creates an evaluator with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an evaluator with a custom configuration.
    ///
    /// The configuration is assumed valid; see [`EvalConfig::validate`].
    pub fn with_config(config: EvalConfig) -> Self {
        Evaluator {
            last_answer: 0.0,
            config,
        }
    }

    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// The value `a` currently stands for.
    pub fn last_answer(&self) -> f64 {
        self.last_answer
    }

    /// Forgets the last answer.
    pub fn reset(&mut self) {
        self.last_answer = 0.0;
    }

    /// Evaluates one expression.
    ///
    /// # Examples
    ///
    /// ```
    /// use tally_calc::Evaluator;
    ///
    /// let mut evaluator = Evaluator::new();
    /// assert_eq!(evaluator.evaluate("(2+3)*4").unwrap(), 20.0);
    /// assert_eq!(evaluator.evaluate("a/2").unwrap(), 10.0);
    /// assert!(evaluator.evaluate("2**3").is_err());
    /// // failed evaluations leave the answer alone
    /// assert_eq!(evaluator.last_answer(), 10.0);
    /// ```
    pub fn evaluate(&mut self, input: &str) -> Result<f64, EvalError> {
        let tokens = lexer::tokenize(input, self.config.sqrt_symbol)?;
        let tokens = tokens.bind_answer(self.last_answer);
        let value = brackets::resolve(tokens, self.config.domain_checks)?;

        tracing::debug!(input, value, "evaluated");
        self.last_answer = value;
        Ok(value)
    }

    /// Evaluates one expression and renders the outcome for display: the
    /// number, or the error line.
    ///
    /// # Examples
    ///
    /// ```
    /// use tally_calc::Evaluator;
    ///
    /// let mut evaluator = Evaluator::new();
    /// assert_eq!(evaluator.evaluate_to_string("2+3*4"), "14");
    /// assert_eq!(evaluator.evaluate_to_string("(2+3"), "SYNTAX ERROR");
    /// ```
    pub fn evaluate_to_string(&mut self, input: &str) -> String {
        match self.evaluate(input) {
            Ok(value) => output::format_number(value),
            Err(e) => e.kind().as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_starts_at_zero() {
        let mut evaluator = Evaluator::new();
        assert_eq!(evaluator.evaluate("a").unwrap(), 0.0);
    }

    #[test]
    fn test_answer_tracks_last_success() {
        let mut evaluator = Evaluator::new();
        evaluator.evaluate("6*7").unwrap();
        assert!(evaluator.evaluate("a+").is_err());
        assert_eq!(evaluator.evaluate("a").unwrap(), 42.0);
        evaluator.reset();
        assert_eq!(evaluator.last_answer(), 0.0);
    }

    #[test]
    fn test_error_strings() {
        let mut evaluator = Evaluator::new();
        assert_eq!(evaluator.evaluate_to_string(""), "SYNTAX ERROR");
        assert_eq!(evaluator.evaluate_to_string("2v-4"), "ROOT OF NEGATIVE ERROR");
        assert_eq!(evaluator.evaluate_to_string("1/0"), "UNKNOWN ERROR");
    }

    #[test]
    fn test_ieee_passthrough() {
        let config = EvalConfig::default().with_domain_checks(false);
        let mut evaluator = Evaluator::with_config(config);
        assert_eq!(evaluator.evaluate_to_string("1/0"), "inf");
        assert_eq!(evaluator.evaluate_to_string("2v-4"), "NaN");
    }
}
