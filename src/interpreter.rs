/// The evaluator module reduces a token sequence to a number.
///
/// It splits the sequence at operators and strips enclosing parentheses,
/// recursing over borrowed sub-slices of a single token buffer.
///
/// # Responsibilities
/// - Applies the four arithmetic operators.
/// - Rejects sequences with no recognized shape.
/// - Reports division by zero and runaway recursion.
pub mod evaluator;
/// The lexer module tokenizes expression text.
///
/// The lexer removes whitespace, then produces numeric literals, operator
/// symbols and parentheses. This is the first stage of evaluation.
///
/// # Responsibilities
/// - Converts literal runs to `f64`, reporting the ones that do not parse.
/// - Leaves all grammar checks to the evaluator.
pub mod lexer;
/// Resource limits for a single evaluation.
pub mod limits;
