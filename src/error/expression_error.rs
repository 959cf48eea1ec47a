#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing or evaluating an
/// expression.
pub enum ExpressionError {
    /// A literal segment could not be parsed as a number.
    Format {
        /// The offending literal text, whitespace already removed.
        literal: String,
    },
    /// The token sequence matches none of the recognized shapes: it is empty,
    /// its parentheses are malformed, or an operator lacks an operand.
    InvalidExpression,
    /// The right operand of a division was zero.
    DivisionByZero,
    /// The input is longer than the configured maximum.
    InputTooLong {
        /// Length of the input in characters.
        len: usize,
        /// The configured maximum.
        max: usize,
    },
    /// Evaluation recursed deeper than the configured maximum.
    TooDeep {
        /// The configured maximum.
        max: usize,
    },
}

impl std::fmt::Display for ExpressionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Format { literal } => {
                write!(f, "could not convert string to float: '{literal}'")
            },
            Self::InvalidExpression => write!(f, "Invalid expression"),
            Self::DivisionByZero => write!(f, "float division by zero"),
            Self::InputTooLong { len, max } => write!(f,
                                                      "Expression is too long: {len} characters, the maximum is {max}"),
            Self::TooDeep { max } => {
                write!(f, "Expression nests deeper than the maximum of {max} levels")
            },
        }
    }
}

impl std::error::Error for ExpressionError {}
