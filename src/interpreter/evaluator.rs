use log::{debug, trace};

use crate::{
    ast::Operator,
    error::ExpressionError,
    interpreter::{lexer::Token, limits::Limits},
};

/// Result type used by the evaluator.
pub type EvalResult<T> = Result<T, ExpressionError>;

/// Evaluates token sequences under a set of [`Limits`].
///
/// The evaluator holds no state between calls; one instance can be shared
/// freely across threads.
///
/// ## Splitting rule
///
/// A sequence is split at its rightmost operator outside any parentheses,
/// regardless of which operator it is. Operators are therefore grouped by
/// position, not by precedence: `2 + 3 * 4` is `(2 + 3) * 4`. Everything
/// left of the split becomes the left operand, so chains of one operator
/// group to the left: `10 - 2 - 3` is `(10 - 2) - 3`. Callers depend on
/// these results, so the rule is kept as is. Parentheses are the only way to
/// change the grouping.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator {
    limits: Limits,
}

impl Evaluator {
    /// Creates an evaluator that enforces `limits`.
    #[must_use]
    pub const fn new(limits: Limits) -> Self {
        Self { limits }
    }

    /// Evaluates a full token sequence to a number.
    ///
    /// # Errors
    /// - [`ExpressionError::InvalidExpression`] if the sequence (or any part
    ///   of it) is empty, has malformed parentheses, or has an operator
    ///   without an operand.
    /// - [`ExpressionError::DivisionByZero`] on a zero divisor.
    /// - [`ExpressionError::TooDeep`] if recursion exceeds the depth limit.
    ///
    /// # Example
    /// ```
    /// use safecalc::interpreter::{evaluator::Evaluator, lexer::tokenize, limits::Limits};
    ///
    /// let evaluator = Evaluator::new(Limits::default());
    /// let tokens = tokenize("(2 + 3) * 4").unwrap();
    /// assert_eq!(evaluator.evaluate(&tokens), Ok(20.0));
    /// ```
    pub fn evaluate(&self, tokens: &[Token]) -> EvalResult<f64> {
        debug!("evaluating [{}]", format_tokens(tokens));
        self.eval_range(tokens, 1)
    }

    fn eval_range(&self, tokens: &[Token], depth: usize) -> EvalResult<f64> {
        self.limits.check_depth(depth)?;
        trace!("depth {depth}: [{}]", format_tokens(tokens));

        if let [Token::Number(value)] = tokens {
            return Ok(*value);
        }

        if let Some((index, op)) = split_point(tokens)? {
            trace!("depth {depth}: splitting at {op} (token {index})");
            let left = self.eval_range(&tokens[..index], depth + 1)?;
            let right = self.eval_range(&tokens[index + 1..], depth + 1)?;
            return op.apply(left, right);
        }

        match tokens {
            [Token::LParen, inner @ .., Token::RParen] => self.eval_range(inner, depth + 1),
            _ => Err(ExpressionError::InvalidExpression),
        }
    }
}

/// Evaluates a token sequence with the default [`Limits`].
///
/// # Errors
/// See [`Evaluator::evaluate`].
pub fn evaluate(tokens: &[Token]) -> EvalResult<f64> {
    Evaluator::default().evaluate(tokens)
}

/// Finds the rightmost operator that is not enclosed in parentheses.
///
/// Scanning from the end, a `)` opens a group and a `(` closes one. A `(`
/// with no group open means the parentheses cannot balance.
fn split_point(tokens: &[Token]) -> EvalResult<Option<(usize, Operator)>> {
    let mut open_groups = 0usize;

    for (index, token) in tokens.iter().enumerate().rev() {
        match token {
            Token::RParen => open_groups += 1,
            Token::LParen => {
                open_groups = open_groups.checked_sub(1)
                                         .ok_or(ExpressionError::InvalidExpression)?;
            },
            _ if open_groups == 0 => {
                if let Some(op) = token.operator() {
                    return Ok(Some((index, op)));
                }
            },
            _ => {},
        }
    }

    Ok(None)
}

fn format_tokens(tokens: &[Token]) -> String {
    tokens.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::tokenize;

    fn eval(src: &str) -> EvalResult<f64> {
        evaluate(&tokenize(src).expect("tokenizes"))
    }

    #[test]
    fn single_literal() {
        assert_eq!(eval("42"), Ok(42.0));
    }

    #[test]
    fn rightmost_operator_wins() {
        assert_eq!(eval("2 + 3 * 4"), Ok(20.0));
        assert_eq!(eval("8 - 2 / 1"), Ok(6.0));
        assert_eq!(eval("2 * 3 + 4"), Ok(10.0));
    }

    #[test]
    fn same_operator_chains_group_to_the_left() {
        assert_eq!(eval("10 - 2 - 3"), Ok(5.0));
        assert_eq!(eval("100 / 10 / 5"), Ok(2.0));
        assert_eq!(eval("1 - 1 - 1 - 1"), Ok(-2.0));
    }

    #[test]
    fn parentheses_hide_their_operators() {
        assert_eq!(eval("(2 + 3) * 4"), Ok(20.0));
        assert_eq!(eval("10 - (2 - 3)"), Ok(11.0));
        assert_eq!(eval("(10 - 2) - 3"), Ok(5.0));
        assert_eq!(eval("((7))"), Ok(7.0));
    }

    #[test]
    fn split_point_skips_groups() {
        let tokens = tokenize("(1 + 2) * (3 - 4)").unwrap();
        assert_eq!(split_point(&tokens), Ok(Some((5, Operator::Mul))));

        let tokens = tokenize("(1 + 2)").unwrap();
        assert_eq!(split_point(&tokens), Ok(None));
    }

    #[test]
    fn malformed_shapes_are_invalid() {
        for src in ["", "2 +", "+", "2 + + 3", "-3", "()", "(1", "1)", "(1))", "((1)", "(1)(2)"] {
            assert_eq!(eval(src), Err(ExpressionError::InvalidExpression), "{src:?}");
        }
    }

    #[test]
    fn division_by_zero() {
        assert_eq!(eval("5 / 0"), Err(ExpressionError::DivisionByZero));
        assert_eq!(eval("5 / (1 - 1)"), Err(ExpressionError::DivisionByZero));
    }

    #[test]
    fn depth_limit_is_enforced() {
        let evaluator = Evaluator::new(Limits { max_input_len: usize::MAX,
                                                max_depth:     3, });
        assert_eq!(evaluator.evaluate(&tokenize("1 + 2").unwrap()), Ok(3.0));
        assert_eq!(evaluator.evaluate(&tokenize("((((1))))").unwrap()),
                   Err(ExpressionError::TooDeep { max: 3 }));
    }

    #[test]
    fn long_chains_stay_within_default_depth() {
        let src = vec!["1"; 300].join(" + ");
        assert_eq!(eval(&src), Ok(300.0));
    }
}
