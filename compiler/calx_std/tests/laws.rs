//! Property tests over generated inputs.

#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use calx_dispatch::Bindings;
use calx_eval::ExpressionFactory;
use calx_std::standard_configuration;
use calx_value::Value;
use proptest::prelude::*;

/// A well-formed expression over numbers, `x`, operators, calls, groups
/// and array indexing.
fn expression() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        (0u32..1000).prop_map(|n| n.to_string()),
        Just("x".to_string()),
        Just("xs[0]".to_string()),
    ];
    leaf.prop_recursive(4, 24, 3, |inner| {
        prop_oneof![
            (
                inner.clone(),
                prop_oneof![Just("+"), Just("-"), Just("*"), Just("/"), Just("^")],
                inner.clone()
            )
                .prop_map(|(a, op, b)| format!("{a} {op} {b}")),
            inner.clone().prop_map(|e| format!("({e})")),
            inner.clone().prop_map(|e| format!("-{e}")),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| format!("max({a}, {b})")),
            inner.prop_map(|e| format!("xs[abs({e}) * 0]")),
        ]
    })
}

fn bindings() -> Bindings {
    Bindings::new()
        .with("x", 3)
        .with("xs", vec![Value::from(1), Value::from(2)])
}

proptest! {
    #[test]
    fn balanced_input_compiles(source in expression()) {
        let config = standard_configuration();
        let factory = ExpressionFactory::new(&config);
        prop_assert!(factory.parse(&source).is_ok(), "failed to compile {}", source);
    }

    #[test]
    fn evaluation_is_repeatable(source in expression()) {
        let config = standard_configuration();
        let expr = ExpressionFactory::new(&config).parse(&source).unwrap();
        // Compared through Debug so NaN results count as equal.
        let first = format!("{:?}", expr.evaluate(&bindings()));
        let second = format!("{:?}", expr.evaluate(&bindings()));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn extra_closing_brace_is_rejected(source in expression(), cut in 0usize..64) {
        let config = standard_configuration();
        let factory = ExpressionFactory::new(&config);
        let at = cut.min(source.len());
        prop_assume!(source.is_char_boundary(at));
        let broken = format!("{}){}", &source[..at], &source[at..]);
        prop_assert!(factory.parse(&broken).is_err(), "accepted {}", broken);
    }

    #[test]
    fn missing_closing_bracket_is_rejected(source in expression()) {
        let config = standard_configuration();
        let factory = ExpressionFactory::new(&config);
        let broken = format!("xs[{source}");
        prop_assert!(factory.parse(&broken).is_err(), "accepted {}", broken);

        let broken = format!("({source}");
        prop_assert!(factory.parse(&broken).is_err(), "accepted {}", broken);
    }
}
