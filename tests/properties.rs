use proptest::prelude::*;
use safecalc::{
    error::{EvaluationError, ExpressionError},
    safe_eval,
};

fn operator() -> impl Strategy<Value = char> {
    prop_oneof![Just('+'), Just('-'), Just('*'), Just('/')]
}

/// Small non-negative integers with an optional fractional part, rendered the
/// way a user would type them.
fn literal() -> impl Strategy<Value = String> {
    (0u32..10_000, proptest::option::of(0u32..100)).prop_map(|(whole, frac)| match frac {
                                                        Some(frac) => format!("{whole}.{frac}"),
                                                        None => whole.to_string(),
                                                    })
}

/// Expressions made of literals, operators and balanced parentheses.
fn expression() -> impl Strategy<Value = String> {
    literal().prop_recursive(4, 32, 2, |inner| {
                 prop_oneof![(inner.clone(), operator(), inner.clone())
                                 .prop_map(|(l, op, r)| format!("{l} {op} {r}")),
                             inner.prop_map(|e| format!("({e})")),]
             })
}

fn same_outcome(a: &Result<f64, EvaluationError>, b: &Result<f64, EvaluationError>) -> bool {
    match (a, b) {
        (Ok(x), Ok(y)) => x.to_bits() == y.to_bits() || (x.is_nan() && y.is_nan()),
        (Err(x), Err(y)) => x == y,
        _ => false,
    }
}

proptest! {
    #[test]
    fn single_operator_matches_direct_arithmetic(a in 0u32..100_000, b in 0u32..100_000, op in operator()) {
        let (x, y) = (f64::from(a), f64::from(b));
        let result = safe_eval(&format!("{a} {op} {b}"));
        match op {
            '+' => prop_assert_eq!(result, Ok(x + y)),
            '-' => prop_assert_eq!(result, Ok(x - y)),
            '*' => prop_assert_eq!(result, Ok(x * y)),
            _ if b == 0 => {
                let err = result.unwrap_err();
                prop_assert_eq!(err.cause(), &ExpressionError::DivisionByZero);
            },
            _ => prop_assert_eq!(result, Ok(x / y)),
        }
    }

    #[test]
    fn extra_parentheses_change_nothing(expr in expression()) {
        let plain = safe_eval(&expr);
        let wrapped = safe_eval(&format!("({expr})"));
        prop_assert!(same_outcome(&plain, &wrapped), "{expr}: {plain:?} vs {wrapped:?}");
    }

    #[test]
    fn whitespace_between_tokens_changes_nothing(expr in expression(), pad in "[ \t\n]{0,3}") {
        let spaced: String = expr.chars()
                                 .filter(|c| !c.is_whitespace())
                                 .flat_map(|c| {
                                     let mut s = pad.clone();
                                     s.push(c);
                                     s.chars().collect::<Vec<_>>()
                                 })
                                 .collect();
        let plain = safe_eval(&expr);
        let padded = safe_eval(&spaced);
        prop_assert!(same_outcome(&plain, &padded), "{expr:?} vs {spaced:?}");
    }

    #[test]
    fn arbitrary_input_never_panics(input in "[0-9+*/() .a-z-]{0,64}") {
        let _ = safe_eval(&input);
    }
}
