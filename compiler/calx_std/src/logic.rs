//! `&&`, `||` and `!`.
//!
//! The right operand of `&&` and `||` is lazy: when the left operand
//! decides the result, a failed right operand is never looked at.

use calx_dispatch::{Parameter, Signature, TypedEvaluable, TypedEvaluableByName};
use calx_value::{ParamType, Value};

fn short_circuit(decides: bool) -> TypedEvaluable {
    TypedEvaluable::new(
        Signature::new(vec![Parameter::boolean(), Parameter::boolean().lazy()])
            .returning(ParamType::Boolean),
        move |_, _, args| {
            if args[0].as_bool() == Some(decides) {
                return Ok(Value::Boolean(decides));
            }
            // A failed right operand is handed back and raised by the engine.
            Ok(args[1].clone())
        },
    )
}

pub(crate) fn register(registry: &mut TypedEvaluableByName) {
    registry.insert("and", short_circuit(false));
    registry.insert("or", short_circuit(true));
    registry.insert(
        "not",
        TypedEvaluable::new(
            Signature::new(vec![Parameter::boolean()]).returning(ParamType::Boolean),
            |_, _, args| Ok(Value::Boolean(args[0].as_bool() != Some(true))),
        ),
    );
}
