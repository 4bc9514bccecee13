//! Lexical and grammatical errors.

use calx_ir::{Span, Token};

use crate::{snippet, ErrorCode};

/// What went wrong while turning source text into a syntax tree.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    // Tokenizer
    #[error("closing quote not found")]
    UnterminatedString,
    #[error("unknown escape character `{0}`")]
    UnknownEscape(char),
    #[error("unexpected closing brace")]
    UnexpectedClosingBrace,
    #[error("closing brace not found")]
    UnclosedBrace,
    #[error("unexpected closing array")]
    UnexpectedClosingArray,
    #[error("closing array not found")]
    UnclosedArray,
    #[error("array open not allowed here")]
    MisplacedArrayOpen,
    #[error("array close not allowed here")]
    MisplacedArrayClose,
    #[error("structure separator not allowed here")]
    MisplacedStructureSeparator,
    #[error("illegal scientific format")]
    IllegalScientificFormat,
    #[error("repeated decimal point")]
    RepeatedDecimalPoint,
    #[error("illegal hexadecimal format")]
    IllegalHexFormat,
    #[error("undefined operator")]
    UndefinedOperator,
    #[error("undefined function")]
    UndefinedFunction,
    #[error("missing operator")]
    MissingOperator,
    #[error("unexpected token after infix operator")]
    UnexpectedAfterInfix,
    #[error("expression is too large")]
    SourceTooLarge,

    // Parser
    #[error("expected a field name after structure separator")]
    UnexpectedAfterStructureSeparator,
    #[error("unexpected comma")]
    UnexpectedComma,
    #[error("missing operand")]
    MissingOperand,
    #[error("missing function argument")]
    MissingArgument,
    #[error("empty group")]
    EmptyGroup,
    #[error("empty expression")]
    EmptyExpression,
    #[error("too many operands")]
    TooManyOperands,
}

impl ParseErrorKind {
    pub fn code(&self) -> ErrorCode {
        use ParseErrorKind as K;
        match self {
            K::UnterminatedString => ErrorCode::E0001,
            K::UnknownEscape(_) => ErrorCode::E0002,
            K::IllegalScientificFormat | K::RepeatedDecimalPoint | K::IllegalHexFormat => {
                ErrorCode::E0003
            }
            K::UndefinedOperator => ErrorCode::E0004,
            K::UndefinedFunction => ErrorCode::E0005,
            K::MissingOperator => ErrorCode::E0006,
            K::UnexpectedAfterInfix => ErrorCode::E0007,
            K::UnexpectedClosingBrace | K::UnclosedBrace => ErrorCode::E0008,
            K::UnexpectedClosingArray
            | K::UnclosedArray
            | K::MisplacedArrayOpen
            | K::MisplacedArrayClose => ErrorCode::E0009,
            K::MisplacedStructureSeparator => ErrorCode::E0010,
            K::SourceTooLarge => ErrorCode::E0011,
            K::UnexpectedAfterStructureSeparator => ErrorCode::E1001,
            K::UnexpectedComma => ErrorCode::E1002,
            K::MissingOperand => ErrorCode::E1003,
            K::MissingArgument => ErrorCode::E1004,
            K::EmptyGroup => ErrorCode::E1005,
            K::EmptyExpression => ErrorCode::E1006,
            K::TooManyOperands => ErrorCode::E1007,
        }
    }
}

/// A position-annotated parse failure.
///
/// `text` is the offending token text (or the whole source for errors
/// detected only at end of input, such as an unclosed brace).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at {span}: `{text}`")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
    pub text: String,
}

impl ParseError {
    #[cold]
    pub fn new(kind: ParseErrorKind, span: Span, text: impl Into<String>) -> Self {
        ParseError {
            kind,
            span,
            text: text.into(),
        }
    }

    #[cold]
    pub fn at_token(kind: ParseErrorKind, token: &Token) -> Self {
        ParseError::new(kind, token.span, token.text.clone())
    }

    #[inline]
    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    /// Caret-annotated rendering against the source the error came from.
    pub fn render(&self, source: &str) -> String {
        snippet::render(self.code(), &self.kind.to_string(), source, self.span)
    }
}

#[cfg(test)]
mod tests;
