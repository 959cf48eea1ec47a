use crate::{error::EvaluationError, safe_eval};

/// A successfully evaluated expression together with its result.
///
/// Renders as `<expression> = <result>`, with the result in Rust's debug float
/// form so whole numbers keep their fractional part (`3 + 4 = 7.0`). Large and
/// small magnitudes use an exponent without a `+` sign (`1e16`, `1e-7`), and
/// infinities render as `inf`.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    /// The expression as the caller entered it.
    pub expression: String,
    /// The evaluated value.
    pub result:     f64,
}

impl Calculation {
    /// Evaluates `expression` and records the outcome.
    ///
    /// # Errors
    /// Returns the [`EvaluationError`] produced by [`safe_eval`].
    ///
    /// # Example
    /// ```
    /// use safecalc::Calculation;
    ///
    /// let calc = Calculation::evaluate("3 + 4").unwrap();
    /// assert_eq!(calc.to_string(), "3 + 4 = 7.0");
    /// ```
    pub fn evaluate(expression: &str) -> Result<Self, EvaluationError> {
        let result = safe_eval(expression)?;
        Ok(Self { expression: expression.to_string(),
                  result })
    }
}

impl std::fmt::Display for Calculation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {:?}", self.expression, self.result)
    }
}
