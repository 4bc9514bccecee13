use calx_ir::TokenKind;
use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_display_includes_position_and_text() {
    let err = ParseError::new(ParseErrorKind::UndefinedOperator, Span::new(2, 3), "$");
    assert_eq!(err.to_string(), "undefined operator at 2..3: `$`");
}

#[test]
fn test_at_token_copies_span_and_text() {
    let token = Token::new(Span::new(4, 7), "foo", TokenKind::Function);
    let err = ParseError::at_token(ParseErrorKind::UndefinedFunction, &token);
    assert_eq!(err.span, Span::new(4, 7));
    assert_eq!(err.text, "foo");
    assert_eq!(err.code(), ErrorCode::E0005);
}

#[test]
fn test_codes_by_phase() {
    assert!(ParseErrorKind::UnknownEscape('q').code().is_lexer_error());
    assert!(ParseErrorKind::UnclosedArray.code().is_lexer_error());
    assert!(ParseErrorKind::MissingOperand.code().is_parser_error());
    assert!(ParseErrorKind::EmptyExpression.code().is_parser_error());
}

#[test]
fn test_render_uses_kind_message() {
    let err = ParseError::new(ParseErrorKind::UnexpectedComma, Span::new(1, 2), ",");
    assert_eq!(
        err.render("1,2"),
        "error[E1002]: unexpected comma\n  |\n1 | 1,2\n  |  ^"
    );
}
