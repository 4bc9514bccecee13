use super::*;

#[test]
fn test_flag_round_trip() {
    let kinds = [
        TokenKind::NumberLiteral,
        TokenKind::StringLiteral,
        TokenKind::VariableOrConstant,
        TokenKind::PrefixOperator,
        TokenKind::InfixOperator,
        TokenKind::PostfixOperator,
        TokenKind::Function,
        TokenKind::BraceOpen,
        TokenKind::BraceClose,
        TokenKind::ArrayOpen,
        TokenKind::ArrayClose,
        TokenKind::Comma,
        TokenKind::StructureSeparator,
    ];
    let mut all = KindSet::empty();
    for kind in kinds {
        assert_eq!(kind.flag().bits().count_ones(), 1, "{kind:?}");
        assert!(!all.intersects(kind.flag()), "duplicate flag for {kind:?}");
        all |= kind.flag();
    }
    assert_eq!(all.bits().count_ones(), 13);
}

#[test]
fn test_is_operator() {
    assert!(TokenKind::PrefixOperator.is_operator());
    assert!(TokenKind::InfixOperator.is_operator());
    assert!(TokenKind::PostfixOperator.is_operator());
    assert!(!TokenKind::Function.is_operator());
    assert!(!TokenKind::StructureSeparator.is_operator());
}

#[test]
fn test_synthetic_token_is_zero_width() {
    let token = Token::synthetic(4, "*", TokenKind::InfixOperator);
    assert_eq!(token.span, Span::point(4));
    assert_eq!(token.start(), 4);
    assert!(token.is(TokenKind::InfixOperator));
}

#[test]
fn test_display_quotes_strings() {
    let s = Token::new(Span::new(0, 6), "a\"b", TokenKind::StringLiteral);
    assert_eq!(s.to_string(), "\"a\\\"b\"");

    let v = Token::new(Span::new(0, 1), "x", TokenKind::VariableOrConstant);
    assert_eq!(v.to_string(), "x");
}
