#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// The expression tree carries no source locations, so each variant is a
/// bare marker; the fixed diagnostic text comes from the [`Display`]
/// implementation.
///
/// [`Display`]: std::fmt::Display
pub enum EvalError {
    /// Attempted division by zero.
    ///
    /// Raised when the right operand of a division evaluates to exactly
    /// `0.0`. This includes `-0.0`, which compares equal to `0.0`.
    DivisionByZero,
    /// Attempted to take the square root of a negative number.
    ///
    /// Raised when the operand of a square root evaluates to a strictly
    /// negative value. Zero is permitted and yields `0.0`.
    NegativeSquareRoot,
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Division by zero"),
            Self::NegativeSquareRoot => write!(f, "Square root of negative number"),
        }
    }
}

impl std::error::Error for EvalError {}
