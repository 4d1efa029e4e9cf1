//! Documentation content for the tally CLI

use super::CliError;

/// Available documentation categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocCategory {
    Numbers,
    Operators,
    Roots,
    Brackets,
    Answer,
    Errors,
}

impl DocCategory {
    /// Parse category name from string
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "numbers" | "number" | "literals" => Some(Self::Numbers),
            "operators" | "ops" | "precedence" => Some(Self::Operators),
            "roots" | "root" | "sqrt" => Some(Self::Roots),
            "brackets" | "parentheses" | "parens" => Some(Self::Brackets),
            "answer" | "ans" | "a" => Some(Self::Answer),
            "errors" | "error" => Some(Self::Errors),
            _ => None,
        }
    }
}

/// Get the docs overview (category listing)
pub fn get_docs_overview() -> &'static str {
    r#"TALLY DOCUMENTATION

Tally evaluates one arithmetic expression per line and prints the result.
Characters it does not recognise, spaces included, are ignored.

DOCUMENTATION CATEGORIES

  numbers           Number literals and decimal separators
  operators         Binary operators and precedence
  roots             Roots, square roots and the square root symbol
  brackets          Grouping with parentheses
  answer            Reusing the previous result with `a`
  errors            What each error line means

QUICK REFERENCE

  2+3*4             14
  (2+3)*4           20
  2^10              1024
  3v8               2
  √16               4
  a*2               previous answer doubled

Run 'tally doc <category>' for detailed documentation.
"#
}

/// Get documentation for a specific category
pub fn get_doc_category(name: &str) -> Result<&'static str, CliError> {
    match DocCategory::from_name(name) {
        Some(DocCategory::Numbers) => Ok(NUMBERS_DOC),
        Some(DocCategory::Operators) => Ok(OPERATORS_DOC),
        Some(DocCategory::Roots) => Ok(ROOTS_DOC),
        Some(DocCategory::Brackets) => Ok(BRACKETS_DOC),
        Some(DocCategory::Answer) => Ok(ANSWER_DOC),
        Some(DocCategory::Errors) => Ok(ERRORS_DOC),
        None => Err(CliError::UnknownCategory(name.to_string())),
    }
}

const NUMBERS_DOC: &str = r#"NUMBERS

  Digits with an optional decimal separator. `.` and `,` are the same
  separator, so 3.5 and 3,5 are equal.

    12        12
    .5        0.5
    3,25      3.25

  A literal with two separators (1.2.3) is a syntax error. Two numbers next
  to each other with no operator between them (2 3) are a syntax error.
"#;

const OPERATORS_DOC: &str = r#"OPERATORS

  ^ v       power, root               highest
  * /       multiply, divide
  + -       add, subtract             lowest

  Higher operators are applied first. Operators of the same level are
  applied left to right:

    2+3*4     14
    10-2-3    5
    2^3^2     64

  Signs:
    --5       5       (runs of signs collapse)
    -5        -5      (a leading sign subtracts from 0)
    2*-3      -6      (a sign after an operator belongs to the number)
    2**3      SYNTAX ERROR
"#;

const ROOTS_DOC: &str = r#"ROOTS

  x v y is the x-th root of y. The degree comes first:

    3v8       2
    2v9       3

  The square root prefix is shorthand for 2v:

    √16       4
    2*√9      6

  The prefix symbol defaults to √ and can be changed with --sqrt-symbol.
  It cannot be a digit, a separator, whitespace, or another operator.

  An even root of a negative number has no real result:

    2v-4      ROOT OF NEGATIVE ERROR
"#;

const BRACKETS_DOC: &str = r#"BRACKETS

  Parentheses group a sub-expression, which is evaluated on its own first:

    (2+3)*4       20
    -(2+3)        -5
    ((1+1)^2)v16  2

  Every ( needs a matching ). Unmatched or empty brackets are a syntax error.
  There is no implicit multiplication: 2(3) is a syntax error.
"#;

const ANSWER_DOC: &str = r#"ANSWER

  `a` stands for the result of the previous successful evaluation. It is 0
  before anything has been evaluated, and errors leave it unchanged.

    tally repl
    > 6*7
    42
    > a/2
    21

  `a` is most useful in `tally repl`, where every line shares one answer.
"#;

const ERRORS_DOC: &str = r#"ERRORS

  SYNTAX ERROR
    The line is empty, has misplaced operators, unmatched brackets or a
    malformed number.

  ROOT OF NEGATIVE ERROR
    A root or power has no real result, such as 2v-4 or (-8)^0.5.

  UNKNOWN ERROR
    Any other failure, such as 1/0. With --ieee these results print as
    inf or NaN instead.

  Errors are printed in place of the result; the exit status stays 0.
"#;
