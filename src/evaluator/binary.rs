use crate::{
    ast::Expr,
    error::EvalError,
    evaluator::core::{EvalResult, evaluate},
    outcome::Outcome,
};

/// Evaluates a binary operation, short-circuiting on the first failure.
///
/// The left operand is evaluated first; if it fails, the right operand is
/// never evaluated and the failure propagates unchanged. Otherwise the right
/// operand is evaluated, and only when both succeed is `combine` applied to
/// the two values. `combine` itself returns an [`EvalResult`], so checked
/// operations like division can reject their operands uniformly with the
/// always-succeeding combiners.
///
/// # Parameters
/// - `left`: Left operand expression.
/// - `right`: Right operand expression.
/// - `combine`: Function combining both evaluated values into a result.
///
/// # Returns
/// The combined result, or the first operand failure.
pub fn eval_binary<F>(left: &Expr, right: &Expr, combine: F) -> EvalResult<f64>
    where F: FnOnce(f64, f64) -> EvalResult<f64>
{
    evaluate(left).flat_map(|left| evaluate(right).flat_map(|right| combine(left, right)))
}

/// Adds two evaluated operands. Never fails.
pub fn add(left: f64, right: f64) -> EvalResult<f64> {
    Outcome::Success(left + right)
}

/// Subtracts the right evaluated operand from the left. Never fails.
pub fn subtract(left: f64, right: f64) -> EvalResult<f64> {
    Outcome::Success(left - right)
}

/// Divides the left evaluated operand by the right.
///
/// The divisor is checked against exactly `0.0`, with no epsilon tolerance;
/// a divisor that is merely close to zero divides normally.
///
/// # Parameters
/// - `left`: The dividend.
/// - `right`: The divisor.
///
/// # Returns
/// `Success(left / right)`, or `Failure(EvalError::DivisionByZero)` if the
/// divisor is zero.
///
/// # Example
/// ```
/// use exprcalc::{EvalError, Outcome, evaluator::binary::divide};
///
/// assert_eq!(divide(4.0, 0.0001), Outcome::Success(40000.0));
/// assert_eq!(divide(4.0, 0.0), Outcome::Failure(EvalError::DivisionByZero));
/// ```
pub fn divide(left: f64, right: f64) -> EvalResult<f64> {
    if right == 0.0 {
        return Outcome::Failure(EvalError::DivisionByZero);
    }

    Outcome::Success(left / right)
}
