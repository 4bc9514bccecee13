use pretty_assertions::assert_eq;

use super::*;
use crate::{ParamType, ValueType};

#[test]
fn test_factory_sets_kind_and_message() {
    let err = variable_not_found("a");
    assert_eq!(
        err.kind,
        EvalErrorKind::VariableNotFound {
            name: "a".to_string()
        }
    );
    assert_eq!(err.message, "variable not found: a");
    assert_eq!(err.to_string(), "variable not found: a");
    assert_eq!(err.code(), ErrorCode::E3001);
}

#[test]
fn test_custom_error() {
    let err = EvalError::new("negative input");
    assert_eq!(
        err.kind,
        EvalErrorKind::Custom {
            message: "negative input".to_string()
        }
    );
    assert!(err.code().is_eval_error());
}

#[test]
fn test_with_span_keeps_innermost() {
    let err = division_by_zero()
        .with_span(Span::new(2, 5))
        .with_span(Span::new(0, 9));
    assert_eq!(err.span, Some(Span::new(2, 5)));
}

#[test]
fn test_no_matching_overload_reports_first_error() {
    let err = no_matching_overload(
        "abs",
        vec![
            ValidationError::TypeMismatch {
                position: 0,
                expected: ParamType::Number,
                found: ValueType::String,
            },
            ValidationError::Arity {
                min: 2,
                max: Some(2),
                got: 1,
            },
        ],
    );
    assert_eq!(
        err.message,
        "no overload of `abs` matches: argument 1: expected number, got string"
    );
}

#[test]
fn test_resolution_errors_are_compile_phase() {
    assert!(unknown_operator("+", "add").code().is_compile_error());
    assert!(undefined_function("f").code().is_compile_error());
    assert!(arity_mismatch("f", 3).code().is_compile_error());
    assert!(no_accessor("array").code().is_compile_error());
    assert!(invalid_literal("0x", "empty").code().is_compile_error());
}

#[test]
fn test_render_with_span() {
    let err = variable_not_found("b").with_span(Span::new(2, 3));
    assert_eq!(
        err.render("a+b"),
        "error[E3001]: variable not found: b\n  |\n1 | a+b\n  |   ^"
    );
}
