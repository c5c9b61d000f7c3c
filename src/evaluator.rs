/// Binary operator evaluation logic.
///
/// Handles the execution of the binary operations in expressions: addition,
/// subtraction, and checked division, including the short-circuit plumbing
/// shared by all three.
pub mod binary;

/// Core evaluation logic.
///
/// Contains the main evaluation entry point, which dispatches on the
/// expression variant, and the result alias used throughout the evaluator.
pub mod core;

/// Square root evaluation.
///
/// Implements the checked square root applied to an evaluated operand.
pub mod square_root;
