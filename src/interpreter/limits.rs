use crate::error::ExpressionError;

/// Default maximum input length, in characters.
pub const MAX_INPUT_LEN: usize = 1024;
/// Default maximum recursion depth of the evaluator.
pub const MAX_DEPTH: usize = 512;

/// Bounds on the work a single evaluation may do.
///
/// Recursion depth grows with the number of tokens, so untrusted input needs
/// both a length cap and a depth cap to bound stack usage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Longest accepted expression, counted in non-whitespace characters.
    pub max_input_len: usize,
    /// Deepest accepted recursion of the evaluator.
    pub max_depth:     usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self { max_input_len: MAX_INPUT_LEN,
               max_depth:     MAX_DEPTH, }
    }
}

impl Limits {
    /// Limits that never trigger.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self { max_input_len: usize::MAX,
               max_depth:     usize::MAX, }
    }

    /// Checks the length of an expression against `max_input_len`.
    ///
    /// Whitespace is not counted, since the tokenizer discards it.
    ///
    /// # Errors
    /// Returns [`ExpressionError::InputTooLong`] if the expression has more
    /// non-whitespace characters than allowed.
    pub fn check_input(&self, expression: &str) -> Result<(), ExpressionError> {
        if self.max_input_len == usize::MAX {
            return Ok(());
        }
        let len = expression.chars().filter(|c| !c.is_whitespace()).count();
        if len > self.max_input_len {
            return Err(ExpressionError::InputTooLong { len,
                                                       max: self.max_input_len });
        }
        Ok(())
    }

    /// Checks a recursion depth against `max_depth`.
    ///
    /// # Errors
    /// Returns [`ExpressionError::TooDeep`] once `depth` exceeds the maximum.
    pub const fn check_depth(&self, depth: usize) -> Result<(), ExpressionError> {
        if depth > self.max_depth {
            return Err(ExpressionError::TooDeep { max: self.max_depth });
        }
        Ok(())
    }
}
