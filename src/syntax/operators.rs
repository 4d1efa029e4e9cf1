/// Precedence classes, lowest first.
///
/// The reducer always folds the leftmost operator of the highest class
/// present in a flat sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Numbers and the answer reference
    Operand,
    /// `+` `-`
    Additive,
    /// `*` `/`
    Multiplicative,
    /// `^` `v`
    Exponent,
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Subtract,
    /// Multiplication (`*`)
    Multiply,
    /// Division (`/`)
    Divide,
    /// Exponentiation (`^`)
    Power,
    /// Root (`v`), `x v y` is the `x`-th root of `y`
    Root,
}

impl BinOp {
    /// Combines the left and right operand.
    ///
    /// Plain IEEE-754 arithmetic: division by zero gives an infinity and an
    /// even root of a negative number gives NaN. Callers decide whether such
    /// values are errors.
    pub fn apply(self, x: f64, y: f64) -> f64 {
        match self {
            BinOp::Add => x + y,
            BinOp::Subtract => x - y,
            BinOp::Multiply => x * y,
            BinOp::Divide => x / y,
            BinOp::Power => x.powf(y),
            BinOp::Root => y.powf(1.0 / x),
        }
    }

    /// True for `^` and `v`, whose NaN results mean a root of a negative.
    pub fn is_exponential(self) -> bool {
        matches!(self, BinOp::Power | BinOp::Root)
    }

    pub fn symbol(self) -> char {
        match self {
            BinOp::Add => '+',
            BinOp::Subtract => '-',
            BinOp::Multiply => '*',
            BinOp::Divide => '/',
            BinOp::Power => '^',
            BinOp::Root => 'v',
        }
    }
}
