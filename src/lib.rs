//! # safecalc
//!
//! safecalc evaluates small arithmetic expressions: decimal literals combined
//! with `+`, `-`, `*` and `/`, grouped with parentheses.
//!
//! Operators are grouped by position rather than by precedence: an
//! expression is split at its rightmost operator outside parentheses, so
//! `2 + 3 * 4` evaluates to `20` and `8 / 2 - 1` to `3`. Use parentheses to
//! get any other grouping.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use log::debug;

use crate::{
    error::{EvaluationError, ExpressionError},
    interpreter::{evaluator::Evaluator, lexer::tokenize, limits::Limits},
};

/// Defines the arithmetic operators.
///
/// Declares the `Operator` enum and how each operator combines two operands.
pub mod ast;
/// Records a successful evaluation for display.
pub mod calculation;
/// Provides the error types for tokenizing and evaluation.
///
/// Internal failures are described by `ExpressionError`; the public entry
/// points wrap them in `EvaluationError`, the only error they return.
///
/// # Responsibilities
/// - Defines an enum variant for every failure mode.
/// - Keeps the original cause reachable from the boundary error.
pub mod error;
/// Orchestrates tokenizing and evaluation.
///
/// Ties together the lexer, the evaluator and the resource limits that bound
/// them.
pub mod interpreter;

pub use calculation::Calculation;

/// Evaluates an arithmetic expression with the default [`Limits`].
///
/// This is the entry point for callers. Any failure of the tokenizer or the
/// evaluator comes back as a single [`EvaluationError`] whose message
/// describes the cause.
///
/// # Errors
/// Returns an error if a literal is not a number, if the expression is
/// malformed, on division by zero, or if the input exceeds the limits.
///
/// # Examples
/// ```
/// use safecalc::safe_eval;
///
/// assert_eq!(safe_eval("(2 + 3) * 4").unwrap(), 20.0);
///
/// let err = safe_eval("5 / 0").unwrap_err();
/// assert_eq!(err.to_string(), "Error evaluating expression: float division by zero");
/// ```
pub fn safe_eval(expression: &str) -> Result<f64, EvaluationError> {
    safe_eval_with_limits(expression, Limits::default())
}

/// Evaluates an arithmetic expression under explicit [`Limits`].
///
/// # Errors
/// Same as [`safe_eval`].
pub fn safe_eval_with_limits(expression: &str, limits: Limits) -> Result<f64, EvaluationError> {
    let result = run(expression, limits);
    if let Err(e) = &result {
        debug!("evaluation of {expression:?} failed: {e}");
    }
    Ok(result?)
}

fn run(expression: &str, limits: Limits) -> Result<f64, ExpressionError> {
    limits.check_input(expression)?;
    let tokens = tokenize(expression)?;
    Evaluator::new(limits).evaluate(&tokens)
}
