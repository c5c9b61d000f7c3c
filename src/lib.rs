//! # exprcalc
//!
//! exprcalc is a fail-fast evaluator for immutable arithmetic expression
//! trees. It evaluates addition, subtraction, checked division, and checked
//! square roots over `f64` values, propagating the first failure through the
//! rest of the computation as a plain data value instead of panicking.
//!
//! There is no parser and no front end: callers construct [`Expr`] trees
//! directly and hand them to [`evaluate`], then consume the returned
//! [`Outcome`] by folding, mapping, or pattern matching.
//!
//! ```
//! use exprcalc::{Expr, evaluate};
//!
//! // ((8 - 6) + 2) / 2
//! let expr = Expr::division(Expr::addition(Expr::subtraction(Expr::number(8.0),
//!                                                            Expr::number(6.0)),
//!                                          Expr::number(2.0)),
//!                           Expr::number(2.0));
//!
//! let rendered = evaluate(&expr).fold(|error| format!("error: {error}"),
//!                                     |value| format!("result: {value}"));
//!
//! assert_eq!(rendered, "result: 2");
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of arithmetic expressions.
///
/// This module declares the `Expr` enum that represents an arithmetic
/// expression as an immutable tree. Trees are built by the caller (there is
/// no parser in this crate) and traversed read-only by the evaluator.
///
/// # Responsibilities
/// - Defines the five expression variants: addition, subtraction, division,
///   square root, and numeric literals.
/// - Provides constructor helpers and conversions for building trees.
/// - Renders expressions in infix notation for display.
pub mod ast;
/// Provides the error type for evaluation failures.
///
/// This module defines the errors that can be raised while evaluating an
/// expression tree. Each error carries a short, fixed, human-readable
/// diagnostic rendered through `Display`.
///
/// # Responsibilities
/// - Defines the error enum covering all checked failure modes.
/// - Renders the fixed diagnostic text for each failure.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Evaluates expression trees into numeric results.
///
/// The evaluator traverses an expression tree recursively, computing `f64`
/// results and short-circuiting on the first failure. It is the core
/// execution engine of the crate.
///
/// # Responsibilities
/// - Evaluates every expression variant, one structural case each.
/// - Checks division by zero and negative square root operands.
/// - Propagates failures unchanged through enclosing operations.
pub mod evaluator;
/// Defines the generic two-armed outcome type.
///
/// An `Outcome` is either a failure carrying a diagnostic or a success
/// carrying a value. Chaining operations short-circuit on the first failure,
/// which gives the evaluator its fail-fast behavior.
///
/// # Responsibilities
/// - Defines the `Failure`/`Success` disjoint union.
/// - Provides transformation, chaining, and elimination operations.
/// - Converts losslessly to and from `std::result::Result`.
pub mod outcome;

pub use ast::Expr;
pub use error::EvalError;
pub use evaluator::core::{EvalResult, evaluate};
pub use outcome::Outcome;
