use crate::{
    ast::Expr,
    error::EvalError,
    evaluator::{
        binary::{add, divide, eval_binary, subtract},
        square_root::square_root,
    },
    outcome::Outcome,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// [`EvalError`] describing the failure.
pub type EvalResult<T> = Outcome<EvalError, T>;

/// Evaluates an expression tree and returns the resulting value.
///
/// This is the main entry point for expression evaluation. The evaluator
/// recurses structurally over the tree, one case per variant: numeric leaves
/// succeed with their value, binary operations evaluate their operands left
/// to right, and square roots evaluate their operand before the domain
/// check. The first failure anywhere in the tree short-circuits the rest of
/// the traversal and propagates untouched to the caller.
///
/// Evaluation is a pure function of the tree: it holds no state between
/// calls, performs no I/O, and never panics for the conditions it checks.
/// Arithmetic follows IEEE-754 defaults wherever no explicit check exists;
/// overflow produces an infinity, and NaN operands propagate through every
/// operator (NaN is not strictly negative, so even its square root succeeds,
/// with a NaN result).
///
/// # Parameters
/// - `expr`: Expression tree to evaluate.
///
/// # Returns
/// `Success(f64)` with the computed value, or `Failure(EvalError)` for
/// division by zero or the square root of a negative number.
///
/// # Example
/// ```
/// use exprcalc::{EvalError, Expr, Outcome, evaluate};
///
/// // ((8 - 6) + 2) / 2 = 2
/// let expr = Expr::division(Expr::addition(Expr::subtraction(Expr::number(8.0),
///                                                            Expr::number(6.0)),
///                                          Expr::number(2.0)),
///                           Expr::number(2.0));
///
/// assert_eq!(evaluate(&expr), Outcome::Success(2.0));
///
/// // 1 / (2 - 2) fails.
/// let expr = Expr::division(Expr::number(1.0),
///                           Expr::subtraction(Expr::number(2.0), Expr::number(2.0)));
///
/// assert_eq!(evaluate(&expr), Outcome::Failure(EvalError::DivisionByZero));
/// ```
pub fn evaluate(expr: &Expr) -> EvalResult<f64> {
    match expr {
        Expr::Number { value } => Outcome::Success(*value),
        Expr::Addition { left, right } => eval_binary(left, right, add),
        Expr::Subtraction { left, right } => eval_binary(left, right, subtract),
        Expr::Division { left, right } => eval_binary(left, right, divide),
        Expr::SquareRoot { operand } => evaluate(operand).flat_map(square_root),
    }
}
