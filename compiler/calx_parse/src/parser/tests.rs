use calx_ir::operator::precedence;
use calx_ir::{OperatorMapping, SyntaxOptions};
use pretty_assertions::assert_eq;

use super::*;
use crate::parse;

fn operators() -> OperatorMap {
    OperatorMap::new()
        .with_prefix("-", OperatorMapping::right(precedence::UNARY, "neg"))
        .with_prefix("!", OperatorMapping::right(precedence::UNARY, "not"))
        .with_postfix("?", OperatorMapping::left(precedence::UNARY, "defined"))
        .with_infix("||", OperatorMapping::left(precedence::OR, "or"))
        .with_infix("&&", OperatorMapping::left(precedence::AND, "and"))
        .with_infix("==", OperatorMapping::left(precedence::EQUALITY, "eq"))
        .with_infix("<", OperatorMapping::left(precedence::COMPARISON, "lt"))
        .with_infix("+", OperatorMapping::left(precedence::ADDITIVE, "add"))
        .with_infix("-", OperatorMapping::left(precedence::ADDITIVE, "sub"))
        .with_infix("*", OperatorMapping::left(precedence::MULTIPLICATIVE, "mul"))
        .with_infix("/", OperatorMapping::left(precedence::MULTIPLICATIVE, "div"))
        .with_infix("^", OperatorMapping::right(precedence::POWER, "pow"))
}

const FUNCTIONS: [&str; 3] = ["max", "now", "if"];

fn try_parse(source: &str) -> Result<AstNode, ParseError> {
    let ops = operators();
    let tokens = calx_lexer::tokenize(source, &ops, &FUNCTIONS, SyntaxOptions::default())?;
    parse(tokens, &ops)
}

fn sexpr(source: &str) -> String {
    try_parse(source).unwrap().to_string()
}

fn error(source: &str) -> ParseErrorKind {
    try_parse(source).unwrap_err().kind
}

// === Precedence and associativity ===

#[test]
fn multiplication_binds_tighter() {
    assert_eq!(sexpr("2+3*4"), "(+ 2 (* 3 4))");
    assert_eq!(sexpr("2*3+4"), "(+ (* 2 3) 4)");
    assert_eq!(sexpr("(2+3)*4"), "(* (+ 2 3) 4)");
}

#[test]
fn left_associative_chain() {
    assert_eq!(sexpr("8-4-2"), "(- (- 8 4) 2)");
    assert_eq!(sexpr("8/4/2"), "(/ (/ 8 4) 2)");
}

#[test]
fn power_is_right_associative() {
    assert_eq!(sexpr("2^3^2"), "(^ 2 (^ 3 2))");
}

#[test]
fn long_right_associative_chain() {
    let length = 50_000;
    let ast = try_parse(&format!("{}1", "2^".repeat(length))).unwrap();

    let mut spine = 0;
    let mut node = &ast;
    while node.kind() == TokenKind::InfixOperator {
        assert_eq!(node.children[0].token.text, "2");
        spine += 1;
        node = &node.children[1];
    }
    assert_eq!(spine, length);
    assert_eq!(node.token.text, "1");
}

#[test]
fn long_prefix_chain() {
    let length = 50_000;
    let ast = try_parse(&format!("{}1", "-".repeat(length))).unwrap();

    let mut spine = 0;
    let mut node = &ast;
    while let [operand] = node.children.as_slice() {
        spine += 1;
        node = operand;
    }
    assert_eq!(spine, length);
}

#[test]
fn closed_delimiters_restore_operand_floor() {
    assert_eq!(sexpr("max((1), -(2))^3"), "(^ (max 1 (- 2)) 3)");
    assert_eq!(error("(1)-"), ParseErrorKind::MissingOperand);
}

#[test]
fn unary_minus_binds_tighter_than_power() {
    assert_eq!(sexpr("-2^2"), "(^ (- 2) 2)");
    assert_eq!(sexpr("2^-2"), "(^ 2 (- 2))");
    assert_eq!(sexpr("- -a"), "(- (- a))");
}

#[test]
fn logical_levels() {
    assert_eq!(sexpr("a && b || c"), "(|| (&& a b) c)");
    assert_eq!(sexpr("a || b && c"), "(|| a (&& b c))");
    assert_eq!(sexpr("!a == b < c + 1"), "(== (! a) (< b (+ c 1)))");
}

#[test]
fn postfix_applies_to_operand() {
    assert_eq!(sexpr("x?"), "(? x)");
    assert_eq!(sexpr("x? && y"), "(&& (? x) y)");
    assert_eq!(sexpr("1 + x?"), "(+ 1 (? x))");
}

// === Calls ===

#[test]
fn function_calls() {
    assert_eq!(sexpr("max(1, 2+3, now())"), "(max 1 (+ 2 3) (now))");
    assert_eq!(sexpr("now()"), "(now)");
    assert_eq!(sexpr("max(-1)"), "(max (- 1))");
    assert_eq!(sexpr("if(a, max(b, c), 0) * 2"), "(* (if a (max b c) 0) 2)");
}

#[test]
fn call_argument_errors() {
    assert_eq!(error("max(1,)"), ParseErrorKind::MissingArgument);
    assert_eq!(error("max(,1)"), ParseErrorKind::MissingArgument);
    assert_eq!(error("max(1 2)"), ParseErrorKind::TooManyOperands);
}

// === Indexing and structures ===

#[test]
fn index_and_field_access() {
    assert_eq!(sexpr("x[0][1]"), "([] ([] x 0) 1)");
    assert_eq!(sexpr("a[1+1].b"), "(. ([] a (+ 1 1)) b)");
    assert_eq!(sexpr("a.b.c"), "(. (. a b) c)");
    assert_eq!(sexpr("a.b[0]"), "([] (. a b) 0)");
    assert_eq!(sexpr("-a.b"), "(- (. a b))");
    assert_eq!(sexpr("a.b * 2"), "(* (. a b) 2)");
    assert_eq!(sexpr("max(1, 2).x"), "(. (max 1 2) x)");
}

#[test]
fn structure_separator_needs_field_name() {
    assert_eq!(
        error("a.(b)"),
        ParseErrorKind::UnexpectedAfterStructureSeparator
    );
}

#[test]
fn mismatched_delimiters() {
    assert_eq!(error("(a[1)]"), ParseErrorKind::UnexpectedClosingBrace);
    assert_eq!(error("a[(1])"), ParseErrorKind::UnexpectedClosingArray);
}

// === Implicit multiplication ===

#[test]
fn implicit_multiplication_precedence() {
    assert_eq!(sexpr("2x^2"), "(* 2 (^ x 2))");
    assert_eq!(sexpr("(a+1)(a-1)"), "(* (+ a 1) (- a 1))");
}

// === Structural errors ===

#[test]
fn structural_errors() {
    assert_eq!(error(""), ParseErrorKind::EmptyExpression);
    assert_eq!(error("()"), ParseErrorKind::EmptyGroup);
    assert_eq!(error("1 2"), ParseErrorKind::TooManyOperands);
    assert_eq!(error("1,2"), ParseErrorKind::UnexpectedComma);
    assert_eq!(error("(1,2)"), ParseErrorKind::UnexpectedComma);
    assert_eq!(error("1+"), ParseErrorKind::MissingOperand);
    assert_eq!(error("(-)"), ParseErrorKind::MissingOperand);
}

#[test]
fn too_many_operands_points_at_extra() {
    let err = try_parse("1 22").unwrap_err();
    assert_eq!(err.text, "22");
    assert_eq!(err.span, Span::new(2, 4));
}

#[test]
fn raw_tokens_without_call_brace() {
    let ops = operators();
    let tokens = vec![Token::new(Span::new(0, 3), "now", TokenKind::Function)];
    assert_eq!(
        parse(tokens, &ops).unwrap_err().kind,
        ParseErrorKind::MissingArgument
    );
}

#[test]
fn raw_tokens_with_unclosed_group() {
    let ops = operators();
    let tokens = vec![
        Token::new(Span::new(0, 1), "(", TokenKind::BraceOpen),
        Token::new(Span::new(1, 2), "1", TokenKind::NumberLiteral),
    ];
    assert_eq!(
        parse(tokens, &ops).unwrap_err().kind,
        ParseErrorKind::UnclosedBrace
    );
}

#[test]
fn unregistered_infix_token() {
    let ops = OperatorMap::new();
    let tokens = vec![
        Token::new(Span::new(0, 1), "1", TokenKind::NumberLiteral),
        Token::new(Span::new(1, 2), "%", TokenKind::InfixOperator),
        Token::new(Span::new(2, 3), "2", TokenKind::NumberLiteral),
    ];
    assert_eq!(
        parse(tokens, &ops).unwrap_err().kind,
        ParseErrorKind::UndefinedOperator
    );
}

mod proptest_parser {
    use super::{sexpr, try_parse};
    use proptest::prelude::*;

    /// A fully parenthesized expression paired with its expected s-expression.
    fn expression() -> impl Strategy<Value = (String, String)> {
        let leaf = prop_oneof![
            (1u32..100).prop_map(|n| (n.to_string(), n.to_string())),
            "[a-e]".prop_map(|v| (v.clone(), v)),
        ];
        leaf.prop_recursive(5, 32, 3, |inner| {
            prop_oneof![
                (
                    inner.clone(),
                    prop_oneof![Just("+"), Just("-"), Just("*"), Just("/"), Just("^")],
                    inner.clone()
                )
                    .prop_map(|((ls, le), op, (rs, re))| {
                        (format!("({ls}{op}{rs})"), format!("({op} {le} {re})"))
                    }),
                inner
                    .clone()
                    .prop_map(|(s, e)| (format!("-({s})"), format!("(- {e})"))),
                (inner.clone(), inner).prop_map(|((a, ae), (b, be))| {
                    (format!("max({a}, {b})"), format!("(max {ae} {be})"))
                }),
            ]
        })
    }

    proptest! {
        #[test]
        fn parenthesized_source_matches_tree((source, expected) in expression()) {
            prop_assert_eq!(sexpr(&source), expected);
        }

        #[test]
        fn arbitrary_input_never_panics(source in "[-+*/^()\\[\\],. a1x]{0,24}") {
            let _ = try_parse(&source);
        }
    }
}
