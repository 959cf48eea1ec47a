use crate::error::ExpressionError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// The one error kind returned by [`crate::safe_eval`].
///
/// Whatever went wrong inside the tokenizer or the evaluator, callers see an
/// `EvaluationError` whose message names the underlying cause. The cause stays
/// reachable through [`EvaluationError::cause`] and
/// [`std::error::Error::source`].
pub struct EvaluationError {
    cause: ExpressionError,
}

impl EvaluationError {
    /// Returns the internal error this one wraps.
    #[must_use]
    pub const fn cause(&self) -> &ExpressionError {
        &self.cause
    }

    /// Consumes the wrapper, returning the internal error.
    #[must_use]
    pub fn into_cause(self) -> ExpressionError {
        self.cause
    }
}

impl From<ExpressionError> for EvaluationError {
    fn from(cause: ExpressionError) -> Self {
        Self { cause }
    }
}

impl std::fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error evaluating expression: {}", self.cause)
    }
}

impl std::error::Error for EvaluationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.cause)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn message_names_the_cause() {
        let err = EvaluationError::from(ExpressionError::DivisionByZero);
        assert_eq!(err.to_string(),
                   "Error evaluating expression: float division by zero");
    }

    #[test]
    fn source_is_the_wrapped_error() {
        let err = EvaluationError::from(ExpressionError::Format { literal: "abc".to_string() });
        let source = err.source().expect("wrapped error has a source");
        assert_eq!(source.to_string(), "could not convert string to float: 'abc'");
        assert_eq!(err.into_cause(),
                   ExpressionError::Format { literal: "abc".to_string() });
    }
}
