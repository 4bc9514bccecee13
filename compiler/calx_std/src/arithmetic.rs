//! `+ - * / % ^` and the unary signs.

use calx_dispatch::{Parameter, Signature, TypedEvaluable, TypedEvaluableByName};
use calx_value::errors::division_by_zero;
use calx_value::{EvalResult, ParamType, Value};

use crate::number;

fn numeric(f: fn(f64, f64) -> EvalResult) -> TypedEvaluable {
    TypedEvaluable::new(
        Signature::new(vec![Parameter::number(), Parameter::number()])
            .returning(ParamType::Number),
        move |_, _, args| f(number(&args[0]), number(&args[1])),
    )
}

fn unary(f: fn(f64) -> f64) -> TypedEvaluable {
    TypedEvaluable::new(
        Signature::new(vec![Parameter::number()]).returning(ParamType::Number),
        move |_, _, args| Ok(Value::Number(f(number(&args[0])))),
    )
}

/// String concatenation; the non-string side is rendered with `Display`.
fn concat(first: ParamType, second: ParamType) -> TypedEvaluable {
    TypedEvaluable::new(
        Signature::new(vec![Parameter::new(first), Parameter::new(second)])
            .returning(ParamType::String),
        |_, _, args| Ok(Value::string(format!("{}{}", text(&args[0]), text(&args[1])))),
    )
}

fn text(value: &Value) -> String {
    match value.as_str() {
        Some(s) => s.to_string(),
        None => value.to_string(),
    }
}

pub(crate) fn register(registry: &mut TypedEvaluableByName) {
    registry.insert("add", numeric(|a, b| Ok(Value::Number(a + b))));
    registry.insert("add", concat(ParamType::String, ParamType::Any));
    registry.insert("add", concat(ParamType::Any, ParamType::String));
    registry.insert("sub", numeric(|a, b| Ok(Value::Number(a - b))));
    registry.insert("mul", numeric(|a, b| Ok(Value::Number(a * b))));
    registry.insert(
        "div",
        numeric(|a, b| {
            if b == 0.0 {
                return Err(division_by_zero());
            }
            Ok(Value::Number(a / b))
        }),
    );
    registry.insert(
        "mod",
        numeric(|a, b| {
            if b == 0.0 {
                return Err(division_by_zero());
            }
            Ok(Value::Number(a % b))
        }),
    );
    registry.insert("pow", numeric(|a, b| Ok(Value::Number(a.powf(b)))));
    registry.insert("neg", unary(|a| -a));
    registry.insert("plus", unary(|a| a));
}
