use crate::error::ExpressionError;

/// Represents a binary arithmetic operator.
///
/// These are the only operators an expression may contain. All four are
/// binary; there is no unary sign.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl Operator {
    /// Applies the operator to two operands.
    ///
    /// # Errors
    /// Returns [`ExpressionError::DivisionByZero`] when dividing by a right
    /// operand equal to zero (either sign).
    ///
    /// # Example
    /// ```
    /// use safecalc::{ast::Operator, error::ExpressionError};
    ///
    /// assert_eq!(Operator::Sub.apply(10.0, 4.0), Ok(6.0));
    /// assert_eq!(Operator::Div.apply(1.0, 0.0), Err(ExpressionError::DivisionByZero));
    /// ```
    #[allow(clippy::float_cmp)]
    pub fn apply(self, left: f64, right: f64) -> Result<f64, ExpressionError> {
        match self {
            Self::Add => Ok(left + right),
            Self::Sub => Ok(left - right),
            Self::Mul => Ok(left * right),
            Self::Div => {
                if right == 0.0 {
                    return Err(ExpressionError::DivisionByZero);
                }
                Ok(left / right)
            },
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}
