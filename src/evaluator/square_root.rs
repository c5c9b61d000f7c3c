use crate::{error::EvalError, evaluator::core::EvalResult, outcome::Outcome};

/// Computes the square root of an evaluated operand.
///
/// Strictly negative values are rejected; zero is permitted and yields
/// `0.0`. NaN is not strictly negative, so it passes the check and the
/// IEEE-754 square root (NaN) is returned as a success.
///
/// # Parameters
/// - `value`: The evaluated operand.
///
/// # Returns
/// `Success(value.sqrt())`, or `Failure(EvalError::NegativeSquareRoot)` if
/// the operand is negative.
///
/// # Example
/// ```
/// use exprcalc::{EvalError, Outcome, evaluator::square_root::square_root};
///
/// assert_eq!(square_root(4.0), Outcome::Success(2.0));
/// assert_eq!(square_root(0.0), Outcome::Success(0.0));
/// assert_eq!(square_root(-1.0), Outcome::Failure(EvalError::NegativeSquareRoot));
/// ```
pub fn square_root(value: f64) -> EvalResult<f64> {
    if value < 0.0 {
        return Outcome::Failure(EvalError::NegativeSquareRoot);
    }

    Outcome::Success(value.sqrt())
}
