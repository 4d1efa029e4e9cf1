use crate::config::DEFAULT_SQRT_SYMBOL;
use crate::evaluator::EvalError;
use crate::syntax::{Token, TokenSequence};

/// Character-level scanner turning free-form text into tokens.
///
/// Lexing is permissive: any character that is neither part of a number nor
/// a recognised operator is skipped.
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    sqrt_symbol: char,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer::with_sqrt_symbol(input, DEFAULT_SQRT_SYMBOL)
    }

    pub fn with_sqrt_symbol(input: &str, sqrt_symbol: char) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
            sqrt_symbol,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn is_number_char(ch: char) -> bool {
        ch.is_ascii_digit() || ch == '.' || ch == ','
    }

    fn read_number(&mut self) -> Result<Token, EvalError> {
        let start = self.position;
        let mut literal = String::new();

        while let Some(ch) = self.current_char() {
            if !Self::is_number_char(ch) {
                break;
            }
            // `,` and `.` are the same decimal separator
            literal.push(if ch == ',' { '.' } else { ch });
            self.advance();
        }

        literal.parse::<f64>().map(Token::Number).map_err(|_| {
            EvalError::Syntax(format!(
                "malformed number '{}' at position {}",
                literal, start
            ))
        })
    }

    /// Returns the next token, `None` once the input is exhausted.
    pub fn next_token(&mut self) -> Result<Option<Token>, EvalError> {
        while let Some(ch) = self.current_char() {
            if Self::is_number_char(ch) {
                return self.read_number().map(Some);
            }

            let token = match ch {
                '(' => Some(Token::OpeningBracket),
                ')' => Some(Token::ClosingBracket),
                '^' => Some(Token::Power),
                'v' => Some(Token::Root),
                '*' => Some(Token::Multiply),
                '/' => Some(Token::Divide),
                '+' => Some(Token::Add),
                '-' => Some(Token::Subtract),
                'a' => Some(Token::Answer),
                c if c == self.sqrt_symbol => Some(Token::SquareRoot),
                _ => None,
            };
            self.advance();

            if token.is_some() {
                return Ok(token);
            }
        }

        Ok(None)
    }
}

/// Tokenizes a whole line.
///
/// Input that yields no token at all is a syntax error.
pub fn tokenize(input: &str, sqrt_symbol: char) -> Result<TokenSequence, EvalError> {
    let mut lexer = Lexer::with_sqrt_symbol(input, sqrt_symbol);
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next_token()? {
        tokens.push(token);
    }

    if tokens.is_empty() {
        return Err(EvalError::Syntax("no tokens in input".to_string()));
    }

    tracing::debug!(count = tokens.len(), "tokenized");
    Ok(TokenSequence::new(tokens))
}

#[test]
fn test_operators() {
    let mut lexer = Lexer::new("(^v*/+-a)");
    assert_eq!(lexer.next_token().unwrap(), Some(Token::OpeningBracket));
    assert_eq!(lexer.next_token().unwrap(), Some(Token::Power));
    assert_eq!(lexer.next_token().unwrap(), Some(Token::Root));
    assert_eq!(lexer.next_token().unwrap(), Some(Token::Multiply));
    assert_eq!(lexer.next_token().unwrap(), Some(Token::Divide));
    assert_eq!(lexer.next_token().unwrap(), Some(Token::Add));
    assert_eq!(lexer.next_token().unwrap(), Some(Token::Subtract));
    assert_eq!(lexer.next_token().unwrap(), Some(Token::Answer));
    assert_eq!(lexer.next_token().unwrap(), Some(Token::ClosingBracket));
    assert_eq!(lexer.next_token().unwrap(), None);
}

#[test]
fn test_number_flushes_at_end() {
    let mut lexer = Lexer::new("1+23");
    assert_eq!(lexer.next_token().unwrap(), Some(Token::Number(1.0)));
    assert_eq!(lexer.next_token().unwrap(), Some(Token::Add));
    assert_eq!(lexer.next_token().unwrap(), Some(Token::Number(23.0)));
    assert_eq!(lexer.next_token().unwrap(), None);
}
