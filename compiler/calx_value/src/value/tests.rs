use pretty_assertions::assert_eq;

use super::*;
use crate::errors::division_by_zero;

#[test]
fn test_display_numbers_drop_trailing_zero() {
    assert_eq!(Value::Number(2.0).to_string(), "2");
    assert_eq!(Value::Number(2.5).to_string(), "2.5");
}

#[test]
fn test_display_compound() {
    let value = Value::structure([
        ("name", Value::from("calx")),
        ("tags", Value::from(vec![Value::from(1), Value::Null])),
    ]);
    assert_eq!(value.to_string(), "{name: calx, tags: [1, null]}");
}

#[test]
fn test_value_type_tags() {
    assert_eq!(Value::from(true).value_type(), ValueType::Boolean);
    assert_eq!(Value::Null.value_type(), ValueType::Null);
    assert_eq!(
        Value::failure(division_by_zero()).value_type(),
        ValueType::Failure
    );
}

#[test]
fn test_param_type_accepts() {
    assert!(ParamType::Any.accepts(ValueType::Array));
    assert!(ParamType::Number.accepts(ValueType::Number));
    assert!(!ParamType::Number.accepts(ValueType::String));
    assert!(!ParamType::Any.accepts(ValueType::Null));
    assert!(!ParamType::Any.accepts(ValueType::Failure));
}

#[test]
fn test_accessors() {
    let arr = Value::from(vec![Value::from(1), Value::from(2)]);
    assert_eq!(arr.as_array().map(<[Value]>::len), Some(2));
    assert_eq!(Value::from("x").as_str(), Some("x"));
    assert_eq!(Value::from(3).as_number(), Some(3.0));
    assert!(Value::from(3).as_bool().is_none());
    assert!(Value::failure(division_by_zero()).is_failure());
}
