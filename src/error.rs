/// Evaluation errors.
///
/// Contains all error types that can be raised during evaluation. Evaluation
/// errors cover the checked arithmetic conditions: division by zero and
/// taking the square root of a negative number.
pub mod eval_error;

pub use eval_error::EvalError;
