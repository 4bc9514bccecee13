use calx_dispatch::Bindings;
use calx_eval::ExpressionFactory;
use calx_value::{EvalErrorKind, EvalResult, Value};
use pretty_assertions::assert_eq;

use crate::standard_configuration;

fn eval(source: &str, bindings: &Bindings) -> EvalResult {
    let config = standard_configuration();
    ExpressionFactory::new(&config)
        .parse(source)
        .unwrap()
        .evaluate(bindings)
}

fn bindings() -> Bindings {
    let inner = Value::structure([("name", Value::from("calx"))]);
    Bindings::new()
        .with("xs", vec![Value::from(10), Value::from(20), Value::Null])
        .with("obj", Value::structure([("inner", inner), ("n", Value::from(2))]))
}

#[test]
fn array_index() {
    let b = bindings();
    assert_eq!(eval("xs[1]", &b).unwrap(), Value::Number(20.0));
    assert_eq!(eval("xs[obj.n]", &b).unwrap(), Value::Null);
    assert_eq!(eval("xs[0] + xs[1]", &b).unwrap(), Value::Number(30.0));
}

#[test]
fn array_index_errors() {
    let b = bindings();
    assert_eq!(
        eval("xs[3]", &b).unwrap_err().kind,
        EvalErrorKind::IndexOutOfBounds {
            index: 3.0,
            len: 3
        }
    );
    let err = eval("xs[0.5]", &b).unwrap_err();
    assert_eq!(
        err.message,
        "no overload of `[` matches: argument 2: must be an integer"
    );
    assert!(eval("xs[-1]", &b).is_err());
}

#[test]
fn nested_fields() {
    let b = bindings();
    assert_eq!(eval("obj.inner.name", &b).unwrap(), Value::from("calx"));
    assert_eq!(
        eval("obj.missing", &b).unwrap_err().kind,
        EvalErrorKind::FieldNotFound {
            field: "missing".to_string()
        }
    );
}
