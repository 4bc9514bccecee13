//! Built-in functions: `if`, `sum`, `min`, `max`, `abs`, `sqrt`,
//! `coalesce`. `not` is shared with the `!` operator.

use calx_dispatch::{Parameter, Signature, TypedEvaluable, TypedEvaluableByName, Validator};
use calx_value::{ParamType, Value};

use crate::number;

fn fold(init: f64, step: fn(f64, f64) -> f64) -> TypedEvaluable {
    TypedEvaluable::new(
        Signature::vararg(vec![Parameter::number()]).returning(ParamType::Number),
        move |_, _, args| Ok(Value::Number(args.iter().map(number).fold(init, step))),
    )
}

pub(crate) fn register(registry: &mut TypedEvaluableByName) {
    // Both branches are lazy: the one not taken may have failed.
    registry.insert(
        "if",
        TypedEvaluable::new(
            Signature::new(vec![
                Parameter::boolean(),
                Parameter::any().nullable().lazy(),
                Parameter::any().nullable().lazy(),
            ]),
            |_, _, args| {
                let taken = if args[0].as_bool() == Some(true) { 1 } else { 2 };
                Ok(args[taken].clone())
            },
        ),
    );

    registry.insert("sum", fold(0.0, |a, b| a + b));
    registry.insert("min", fold(f64::INFINITY, f64::min));
    registry.insert("max", fold(f64::NEG_INFINITY, f64::max));

    registry.insert(
        "abs",
        TypedEvaluable::new(
            Signature::new(vec![Parameter::number()]).returning(ParamType::Number),
            |_, _, args| Ok(Value::Number(number(&args[0]).abs())),
        ),
    );
    registry.insert(
        "sqrt",
        TypedEvaluable::new(
            Signature::new(vec![Parameter::number().validated(Validator::non_negative())])
                .returning(ParamType::Number),
            |_, _, args| Ok(Value::Number(number(&args[0]).sqrt())),
        ),
    );

    // First non-null argument. A failure met before it is handed back and
    // raised; failures after it are ignored.
    registry.insert(
        "coalesce",
        TypedEvaluable::new(
            Signature::vararg(vec![Parameter::any().nullable().lazy()]),
            |_, _, args| {
                Ok(args
                    .iter()
                    .find(|value| !value.is_null())
                    .cloned()
                    .unwrap_or(Value::Null))
            },
        ),
    );
}
