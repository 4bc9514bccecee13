use calx_ir::{Span, TokenKind};
use calx_value::{ParamType, ValueType};
use pretty_assertions::assert_eq;

use super::*;
use crate::{Bindings, Parameter};

fn token() -> Token {
    Token::new(Span::new(0, 1), "f", TokenKind::Function)
}

fn constant(signature: Signature, result: f64) -> TypedEvaluable {
    TypedEvaluable::new(signature, move |_, _, _| Ok(Value::Number(result)))
}

fn call(overload: &TypedEvaluable, args: &[Value]) -> Value {
    let bindings = Bindings::new();
    let ctx = EvalContext::new(&bindings, "f");
    overload.evaluate(&ctx, &token(), args).unwrap()
}

#[test]
fn first_valid_overload_wins() {
    let set = TypedEvaluables::new()
        .with(constant(Signature::new(vec![Parameter::string()]), 1.0))
        .with(constant(Signature::new(vec![Parameter::any()]), 2.0))
        .with(constant(Signature::new(vec![Parameter::number()]), 3.0));

    let found = set.find(&[Value::from(5)]).unwrap();
    assert_eq!(call(found, &[Value::from(5)]), Value::Number(2.0));

    let found = set.find(&[Value::from("s")]).unwrap();
    assert_eq!(call(found, &[Value::from("s")]), Value::Number(1.0));
}

#[test]
fn arity_filter_selects_shape() {
    let set = TypedEvaluables::new()
        .with(constant(
            Signature::new(vec![Parameter::number(), Parameter::number()]),
            2.0,
        ))
        .with(constant(Signature::new(vec![Parameter::number()]), 1.0));

    let unary = set.filter_by_arity(1).unwrap();
    assert_eq!(unary.len(), 1);
    let found = unary.find(&[Value::from(9)]).unwrap();
    assert_eq!(call(found, &[]), Value::Number(1.0));

    assert_eq!(set.filter_by_arity(2).map(|s| s.len()), Some(1));
    assert!(set.filter_by_arity(3).is_none());
}

#[test]
fn vararg_overload_rejects_zero() {
    let set = TypedEvaluables::new().with(constant(
        Signature::vararg(vec![Parameter::number()]),
        0.0,
    ));
    assert!(set.filter_by_arity(0).is_none());
    assert_eq!(set.filter_by_arity(5).map(|s| s.len()), Some(1));
}

#[test]
fn all_rejections_collected_in_order() {
    let set = TypedEvaluables::new()
        .with(constant(Signature::new(vec![Parameter::number()]), 0.0))
        .with(constant(Signature::new(vec![Parameter::string()]), 0.0));

    let errors = set.find(&[Value::from(true)]).unwrap_err();
    assert_eq!(
        errors,
        vec![
            ValidationError::TypeMismatch {
                position: 0,
                expected: ParamType::Number,
                found: ValueType::Boolean,
            },
            ValidationError::TypeMismatch {
                position: 0,
                expected: ParamType::String,
                found: ValueType::Boolean,
            },
        ]
    );
}

#[test]
fn registry_appends_overloads() {
    let registry = TypedEvaluableByName::new()
        .with("abs", constant(Signature::new(vec![Parameter::number()]), 0.0))
        .with("abs", constant(Signature::new(vec![Parameter::string()]), 0.0));
    assert_eq!(registry.get("abs").map(TypedEvaluables::len), Some(2));
    assert!(registry.has_function("abs"));
    assert!(!registry.has_function("sqrt"));
}

#[test]
fn override_layer_shadows_base() {
    let base = TypedEvaluableByName::new()
        .with("f", constant(Signature::new(Vec::new()), 1.0))
        .with("g", constant(Signature::new(Vec::new()), 2.0));
    let custom = TypedEvaluableByName::new()
        .with("f", constant(Signature::new(Vec::new()), 10.0))
        .and_then(base);

    let f = custom.get("f").unwrap();
    assert_eq!(f.len(), 1);
    assert_eq!(call(f.find(&[]).unwrap(), &[]), Value::Number(10.0));
    let g = custom.get("g").unwrap();
    assert_eq!(call(g.find(&[]).unwrap(), &[]), Value::Number(2.0));
    assert_eq!(custom.names(), vec!["f", "g"]);
}

#[test]
fn layers_chain_in_order() {
    let a = TypedEvaluableByName::new().with("x", constant(Signature::new(Vec::new()), 1.0));
    let b = TypedEvaluableByName::new()
        .with("x", constant(Signature::new(Vec::new()), 2.0))
        .with("y", constant(Signature::new(Vec::new()), 2.0));
    let c = TypedEvaluableByName::new().with("z", constant(Signature::new(Vec::new()), 3.0));

    let chained = a.and_then(b).and_then(c);
    let x = chained.get("x").unwrap().find(&[]).unwrap();
    assert_eq!(call(x, &[]), Value::Number(1.0));
    assert!(chained.contains("y"));
    assert!(chained.contains("z"));
}
