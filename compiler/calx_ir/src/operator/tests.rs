use pretty_assertions::assert_eq;

use super::*;

fn base() -> OperatorMap {
    OperatorMap::new()
        .with_infix("+", OperatorMapping::left(precedence::ADDITIVE, "add"))
        .with_infix("^", OperatorMapping::right(precedence::POWER, "pow"))
        .with_prefix("-", OperatorMapping::right(precedence::UNARY, "neg"))
}

#[test]
fn test_lookup_by_fixity() {
    let map = base();
    assert_eq!(map.get(Fixity::Infix, "+").map(|m| m.target.as_str()), Some("add"));
    assert!(map.get(Fixity::Prefix, "+").is_none());
    assert_eq!(
        map.for_kind(TokenKind::PrefixOperator, "-").map(|m| m.precedence),
        Some(precedence::UNARY)
    );
    assert!(map.for_kind(TokenKind::Function, "-").is_none());
}

#[test]
fn test_and_then_override_wins() {
    let custom = OperatorMap::new()
        .with_infix("+", OperatorMapping::left(precedence::ADDITIVE, "concat"))
        .with_postfix("!", OperatorMapping::left(precedence::UNARY, "factorial"));
    let layered = custom.and_then(base());

    assert_eq!(layered.infix.get("+").map(|m| m.target.as_str()), Some("concat"));
    assert_eq!(layered.infix.get("^").map(|m| m.target.as_str()), Some("pow"));
    assert!(layered.postfix.contains("!"));
    assert!(layered.prefix.contains("-"));
}

#[test]
fn test_and_then_leaves_inputs_untouched() {
    let original = base();
    let layered = OperatorMap::new()
        .with_infix("+", OperatorMapping::left(1, "other"))
        .and_then(original.clone());

    assert_eq!(original.infix.get("+").map(|m| m.target.as_str()), Some("add"));
    assert_eq!(layered.infix.get("+").map(|m| m.target.as_str()), Some("other"));
}

#[test]
fn test_and_then_chains_in_order() {
    let a = OperatorTable::new().with("x", OperatorMapping::left(1, "a"));
    let b = OperatorTable::new()
        .with("x", OperatorMapping::left(1, "b"))
        .with("y", OperatorMapping::left(1, "b"));
    let c = OperatorTable::new()
        .with("y", OperatorMapping::left(1, "c"))
        .with("z", OperatorMapping::left(1, "c"));

    let chained = a.and_then(b).and_then(c);
    assert_eq!(chained.get("x").map(|m| m.target.as_str()), Some("a"));
    assert_eq!(chained.get("y").map(|m| m.target.as_str()), Some("b"));
    assert_eq!(chained.get("z").map(|m| m.target.as_str()), Some("c"));
    assert_eq!(chained.texts(), vec!["x", "y", "z"]);
}

#[test]
fn test_fixity_arity() {
    assert_eq!(Fixity::Prefix.arity(), 1);
    assert_eq!(Fixity::Postfix.arity(), 1);
    assert_eq!(Fixity::Infix.arity(), 2);
}
