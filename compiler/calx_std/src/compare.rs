//! Equality and ordering.

use std::cmp::Ordering;

use calx_dispatch::{Parameter, Signature, TypedEvaluable, TypedEvaluableByName};
use calx_value::{ParamType, Value};

use crate::number;

/// Structural equality; `null` equals only `null`.
fn equality(expect: bool) -> TypedEvaluable {
    TypedEvaluable::new(
        Signature::new(vec![Parameter::any().nullable(), Parameter::any().nullable()])
            .returning(ParamType::Boolean),
        move |_, _, args| Ok(Value::Boolean((args[0] == args[1]) == expect)),
    )
}

fn ordering(ty: ParamType, test: fn(Ordering) -> bool) -> TypedEvaluable {
    TypedEvaluable::new(
        Signature::new(vec![Parameter::new(ty), Parameter::new(ty)]).returning(ParamType::Boolean),
        move |_, _, args| {
            let order = match (args[0].as_str(), args[1].as_str()) {
                (Some(a), Some(b)) => Some(a.cmp(b)),
                _ => number(&args[0]).partial_cmp(&number(&args[1])),
            };
            // NaN compares false under every ordering.
            Ok(Value::Boolean(order.is_some_and(test)))
        },
    )
}

pub(crate) fn register(registry: &mut TypedEvaluableByName) {
    registry.insert("eq", equality(true));
    registry.insert("ne", equality(false));

    let tests: [(&str, fn(Ordering) -> bool); 4] = [
        ("lt", Ordering::is_lt),
        ("le", Ordering::is_le),
        ("gt", Ordering::is_gt),
        ("ge", Ordering::is_ge),
    ];
    for (name, test) in tests {
        registry.insert(name, ordering(ParamType::Number, test));
        registry.insert(name, ordering(ParamType::String, test));
    }
}
