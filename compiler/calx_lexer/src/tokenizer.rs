//! The context-sensitive tokenizer.
//!
//! What a character means depends on the kind of the previously emitted
//! token: `-` after an operand is infix, `-` at the start or after `(` is
//! prefix. The tokenizer therefore tracks the previous token kind and
//! consults the operator tables while scanning.

use calx_diagnostic::{ParseError, ParseErrorKind};
use calx_ir::{FunctionLookup, KindSet, OperatorMap, Span, SyntaxOptions, Token, TokenKind};
use tracing::trace;

use crate::cursor::Cursor;
use crate::{escape, number};

/// Converts source text into a token sequence.
///
/// Iterating yields tokens in source order. The sequence ends after the
/// first error or after end of input; it cannot be restarted.
pub struct Tokenizer<'a> {
    source: &'a str,
    cursor: Cursor<'a>,
    operators: &'a OperatorMap,
    functions: &'a dyn FunctionLookup,
    options: SyntaxOptions,
    previous: Option<TokenKind>,
    /// Token held back while a synthesized `*` is emitted in front of it.
    pending: Option<Token>,
    brace_balance: i32,
    array_balance: i32,
    finished: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(
        source: &'a str,
        operators: &'a OperatorMap,
        functions: &'a dyn FunctionLookup,
        options: SyntaxOptions,
    ) -> Result<Self, ParseError> {
        if u32::try_from(source.len()).is_err() {
            return Err(ParseError::new(
                ParseErrorKind::SourceTooLarge,
                Span::DUMMY,
                String::new(),
            ));
        }
        Ok(Tokenizer {
            source,
            cursor: Cursor::new(source),
            operators,
            functions,
            options,
            previous: None,
            pending: None,
            brace_balance: 0,
            array_balance: 0,
            finished: false,
        })
    }

    /// Produce the next token, `Ok(None)` at end of input.
    pub fn next_token(&mut self) -> Result<Option<Token>, ParseError> {
        if let Some(token) = self.pending.take() {
            return Ok(Some(self.emit(token)));
        }

        let Some(token) = self.scan()? else {
            self.check_balanced()?;
            return Ok(None);
        };

        if self.needs_implicit_operator(token.kind) {
            if !self.options.implicit_multiplication_allowed {
                return Err(ParseError::at_token(ParseErrorKind::MissingOperator, &token));
            }
            let multiply = Token::synthetic(token.start(), "*", TokenKind::InfixOperator);
            self.pending = Some(token);
            return Ok(Some(self.emit(multiply)));
        }

        if self.previous == Some(TokenKind::InfixOperator)
            && token.kind.is_in(KindSet::AFTER_INFIX_FORBIDDEN)
        {
            return Err(ParseError::at_token(
                ParseErrorKind::UnexpectedAfterInfix,
                &token,
            ));
        }

        Ok(Some(self.emit(token)))
    }

    fn emit(&mut self, token: Token) -> Token {
        trace!(kind = ?token.kind, text = %token.text, span = %token.span, "token");
        self.previous = Some(token.kind);
        token
    }

    /// `2(`, `2x`, `)(` and `)x` need an operator between the two tokens.
    fn needs_implicit_operator(&self, current: TokenKind) -> bool {
        matches!(
            self.previous,
            Some(TokenKind::BraceClose | TokenKind::NumberLiteral)
        ) && matches!(
            current,
            TokenKind::BraceOpen | TokenKind::VariableOrConstant
        )
    }

    fn check_balanced(&self) -> Result<(), ParseError> {
        let whole = || Span::new(0, self.cursor.pos());
        if self.brace_balance > 0 {
            return Err(ParseError::new(
                ParseErrorKind::UnclosedBrace,
                whole(),
                self.source,
            ));
        }
        if self.array_balance > 0 {
            return Err(ParseError::new(
                ParseErrorKind::UnclosedArray,
                whole(),
                self.source,
            ));
        }
        Ok(())
    }

    fn prefix_allowed(&self) -> bool {
        self.previous
            .map_or(true, |kind| kind.is_in(KindSet::BEFORE_PREFIX))
    }

    fn postfix_allowed(&self) -> bool {
        self.previous
            .is_some_and(|kind| kind.is_in(KindSet::BEFORE_POSTFIX))
    }

    fn infix_allowed(&self) -> bool {
        self.previous
            .is_some_and(|kind| kind.is_in(KindSet::BEFORE_INFIX))
    }

    fn previous_owns_index(&self) -> bool {
        self.previous
            .is_some_and(|kind| kind.is_in(KindSet::INDEX_OWNERS))
    }

    fn token(&self, start: u32, kind: TokenKind) -> Token {
        let text = self.cursor.slice_from(start);
        Token::new(Span::new(start, self.cursor.pos()), text, kind)
    }

    fn error(&self, kind: ParseErrorKind, start: u32) -> ParseError {
        let end = self.cursor.pos().max(start);
        ParseError::new(kind, Span::new(start, end), self.cursor.slice(start, end))
    }

    fn scan(&mut self) -> Result<Option<Token>, ParseError> {
        self.cursor.eat_while(char::is_whitespace);
        let start = self.cursor.pos();
        let Some(c) = self.cursor.current() else {
            return Ok(None);
        };

        let token = match c {
            '"' => self.string(start)?,
            '(' => {
                self.cursor.advance();
                self.brace_balance += 1;
                self.token(start, TokenKind::BraceOpen)
            }
            ')' => {
                self.cursor.advance();
                self.brace_balance -= 1;
                if self.brace_balance < 0 {
                    return Err(self.error(ParseErrorKind::UnexpectedClosingBrace, start));
                }
                self.token(start, TokenKind::BraceClose)
            }
            '[' if self.options.arrays_allowed => {
                self.cursor.advance();
                if !self.previous_owns_index() {
                    return Err(self.error(ParseErrorKind::MisplacedArrayOpen, start));
                }
                self.array_balance += 1;
                self.token(start, TokenKind::ArrayOpen)
            }
            ']' if self.options.arrays_allowed => {
                self.cursor.advance();
                if self
                    .previous
                    .map_or(true, |kind| kind.is_in(KindSet::OPEN_ENDED))
                {
                    return Err(self.error(ParseErrorKind::MisplacedArrayClose, start));
                }
                self.array_balance -= 1;
                if self.array_balance < 0 {
                    return Err(self.error(ParseErrorKind::UnexpectedClosingArray, start));
                }
                self.token(start, TokenKind::ArrayClose)
            }
            '.' if self.options.structures_allowed
                && !self.cursor.peek().is_some_and(|n| n.is_ascii_digit()) =>
            {
                self.cursor.advance();
                self.structure_separator(start)?
            }
            ',' => {
                self.cursor.advance();
                self.token(start, TokenKind::Comma)
            }
            c if is_identifier_start(c) => self.identifier(start)?,
            c if c.is_ascii_digit()
                || (c == '.' && self.cursor.peek().is_some_and(|n| n.is_ascii_digit())) =>
            {
                number::scan_number(&mut self.cursor).map_err(|kind| self.error(kind, start))?;
                self.token(start, TokenKind::NumberLiteral)
            }
            _ => self.operator(start)?,
        };
        Ok(Some(token))
    }

    fn string(&mut self, start: u32) -> Result<Token, ParseError> {
        let content =
            escape::scan_string(&mut self.cursor).map_err(|kind| self.error(kind, start))?;
        Ok(Token::new(
            Span::new(start, self.cursor.pos()),
            content,
            TokenKind::StringLiteral,
        ))
    }

    fn structure_separator(&self, start: u32) -> Result<Token, ParseError> {
        if !self.previous_owns_index() {
            return Err(self.error(ParseErrorKind::MisplacedStructureSeparator, start));
        }
        Ok(self.token(start, TokenKind::StructureSeparator))
    }

    fn identifier(&mut self, start: u32) -> Result<Token, ParseError> {
        self.cursor.eat_while(is_identifier_continue);
        let text = self.cursor.slice_from(start);

        let kind = if let Some(role) = self.operator_role(text) {
            role
        } else if self.cursor.next_non_blank() == Some('(') {
            if !self.functions.has_function(text) {
                return Err(self.error(ParseErrorKind::UndefinedFunction, start));
            }
            TokenKind::Function
        } else {
            TokenKind::VariableOrConstant
        };
        Ok(self.token(start, kind))
    }

    /// The role `text` takes here, if it is a registered operator whose
    /// role the previous token permits.
    fn operator_role(&self, text: &str) -> Option<TokenKind> {
        if self.prefix_allowed() && self.operators.prefix.contains(text) {
            Some(TokenKind::PrefixOperator)
        } else if self.postfix_allowed() && self.operators.postfix.contains(text) {
            Some(TokenKind::PostfixOperator)
        } else if self.infix_allowed() && self.operators.infix.contains(text) {
            Some(TokenKind::InfixOperator)
        } else {
            None
        }
    }

    fn operator(&mut self, start: u32) -> Result<Token, ParseError> {
        self.cursor.advance();
        // Extend one character at a time while the longer text is still a
        // legal operator.
        while let Some(next) = self.cursor.current() {
            let mut candidate = self.cursor.slice_from(start).to_string();
            candidate.push(next);
            if self.operator_role(&candidate).is_none() {
                break;
            }
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(start);
        match self.operator_role(text) {
            Some(kind) => Ok(self.token(start, kind)),
            None if text == "." && self.options.structures_allowed => {
                self.structure_separator(start)
            }
            None if self.previous == Some(TokenKind::InfixOperator)
                && self.operators.infix.contains(text) =>
            {
                Err(self.error(ParseErrorKind::UnexpectedAfterInfix, start))
            }
            None => Err(self.error(ParseErrorKind::UndefinedOperator, start)),
        }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<Token, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_token() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}

fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_identifier_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
