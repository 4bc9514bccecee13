//! Token model.
//!
//! Tokens are immutable `(span, text, kind)` triples. For string literals
//! `text` holds the unescaped content; for everything else it is the source
//! slice (or `*` for a synthesized implicit multiplication).

use std::fmt;

use crate::{KindSet, Span};

/// Classification of a token.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    /// Decimal (`1.5e3`, `.5`) or hexadecimal (`0xFF`) literal.
    NumberLiteral,
    /// Double-quoted string literal.
    StringLiteral,
    /// Identifier not followed by `(` and not an operator word.
    VariableOrConstant,
    PrefixOperator,
    InfixOperator,
    PostfixOperator,
    /// Identifier immediately followed by `(`.
    Function,
    BraceOpen,
    BraceClose,
    ArrayOpen,
    ArrayClose,
    Comma,
    /// `.` between a structure-valued operand and a field name.
    StructureSeparator,
}

impl TokenKind {
    /// The single-bit set for this kind.
    pub const fn flag(self) -> KindSet {
        match self {
            TokenKind::NumberLiteral => KindSet::NUMBER_LITERAL,
            TokenKind::StringLiteral => KindSet::STRING_LITERAL,
            TokenKind::VariableOrConstant => KindSet::VARIABLE_OR_CONSTANT,
            TokenKind::PrefixOperator => KindSet::PREFIX_OPERATOR,
            TokenKind::InfixOperator => KindSet::INFIX_OPERATOR,
            TokenKind::PostfixOperator => KindSet::POSTFIX_OPERATOR,
            TokenKind::Function => KindSet::FUNCTION,
            TokenKind::BraceOpen => KindSet::BRACE_OPEN,
            TokenKind::BraceClose => KindSet::BRACE_CLOSE,
            TokenKind::ArrayOpen => KindSet::ARRAY_OPEN,
            TokenKind::ArrayClose => KindSet::ARRAY_CLOSE,
            TokenKind::Comma => KindSet::COMMA,
            TokenKind::StructureSeparator => KindSet::STRUCTURE_SEPARATOR,
        }
    }

    #[inline]
    pub fn is_in(self, set: KindSet) -> bool {
        set.contains(self.flag())
    }

    #[inline]
    pub fn is_operator(self) -> bool {
        self.is_in(KindSet::OPERATORS)
    }

    /// Human-readable name used in diagnostics.
    pub const fn describe(self) -> &'static str {
        match self {
            TokenKind::NumberLiteral => "number literal",
            TokenKind::StringLiteral => "string literal",
            TokenKind::VariableOrConstant => "variable or constant",
            TokenKind::PrefixOperator => "prefix operator",
            TokenKind::InfixOperator => "infix operator",
            TokenKind::PostfixOperator => "postfix operator",
            TokenKind::Function => "function",
            TokenKind::BraceOpen => "`(`",
            TokenKind::BraceClose => "`)`",
            TokenKind::ArrayOpen => "`[`",
            TokenKind::ArrayClose => "`]`",
            TokenKind::Comma => "`,`",
            TokenKind::StructureSeparator => "`.`",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// A lexical token.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub span: Span,
    pub text: String,
    pub kind: TokenKind,
}

impl Token {
    pub fn new(span: Span, text: impl Into<String>, kind: TokenKind) -> Self {
        Token {
            span,
            text: text.into(),
            kind,
        }
    }

    /// A token that has no source text of its own, such as the `*`
    /// inserted for implicit multiplication.
    pub fn synthetic(at: u32, text: impl Into<String>, kind: TokenKind) -> Self {
        Token::new(Span::point(at), text, kind)
    }

    #[inline]
    pub fn start(&self) -> u32 {
        self.span.start
    }

    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::StringLiteral => write!(f, "{:?}", self.text),
            _ => f.write_str(&self.text),
        }
    }
}

#[cfg(test)]
mod tests;
