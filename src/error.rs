/// Internal evaluation errors.
///
/// Defines every failure the tokenizer and evaluator can raise on their own:
/// malformed numeric literals, token sequences with no recognized shape,
/// division by zero and exceeded resource limits. These never leave the crate
/// through [`crate::safe_eval`]; they are wrapped first.
pub mod expression_error;
/// The boundary error.
///
/// Contains the single error kind surfaced to callers of
/// [`crate::safe_eval`]. It carries the underlying [`ExpressionError`] so the
/// description of the original cause is never lost.
pub mod evaluation_error;

pub use evaluation_error::EvaluationError;
pub use expression_error::ExpressionError;
