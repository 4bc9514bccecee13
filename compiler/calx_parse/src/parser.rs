use calx_diagnostic::{ParseError, ParseErrorKind};
use calx_ir::{AstNode, Fixity, OperatorMap, Span, Token, TokenKind};
use tracing::trace;

use crate::pending::Pending;

/// Shunting-yard converter from tokens to a syntax tree.
///
/// A parser is consumed by [`Parser::parse`]; build a new one per
/// expression.
pub struct Parser<'a> {
    operators: &'a OperatorMap,
    output: Vec<AstNode>,
    pending: Vec<Pending>,
    /// Output heights of the open delimiters on `pending`, innermost last.
    floors: Vec<usize>,
    /// Function name waiting for its `(`.
    call: Option<Token>,
}

impl<'a> Parser<'a> {
    pub fn new(operators: &'a OperatorMap) -> Self {
        Parser {
            operators,
            output: Vec::new(),
            pending: Vec::new(),
            floors: Vec::new(),
            call: None,
        }
    }

    pub fn parse(mut self, tokens: impl IntoIterator<Item = Token>) -> Result<AstNode, ParseError> {
        let mut tokens = tokens.into_iter().peekable();

        while let Some(token) = tokens.next() {
            if let Some(function) = self.call.take() {
                if !token.is(TokenKind::BraceOpen) {
                    return Err(ParseError::at_token(
                        ParseErrorKind::MissingArgument,
                        &function,
                    ));
                }
                self.open(Pending::Call {
                    function,
                    depth: self.output.len(),
                    commas: 0,
                });
                continue;
            }

            match token.kind {
                TokenKind::NumberLiteral
                | TokenKind::StringLiteral
                | TokenKind::VariableOrConstant => self.output.push(AstNode::leaf(token)),
                TokenKind::Function => self.call = Some(token),
                TokenKind::PrefixOperator => self.push_operator(token, Fixity::Prefix)?,
                TokenKind::InfixOperator => self.push_operator(token, Fixity::Infix)?,
                TokenKind::PostfixOperator => self.push_operator(token, Fixity::Postfix)?,
                TokenKind::BraceOpen => self.open(Pending::Group {
                    open: token,
                    depth: self.output.len(),
                }),
                TokenKind::BraceClose => self.close_brace(token)?,
                TokenKind::Comma => self.comma(token)?,
                TokenKind::ArrayOpen => self.open_index(token)?,
                TokenKind::ArrayClose => self.close_index(token)?,
                TokenKind::StructureSeparator => {
                    if !tokens
                        .peek()
                        .is_some_and(|next| next.is(TokenKind::VariableOrConstant))
                    {
                        return Err(ParseError::at_token(
                            ParseErrorKind::UnexpectedAfterStructureSeparator,
                            &token,
                        ));
                    }
                    self.reduce_structures()?;
                    self.pending.push(Pending::Structure(token));
                }
            }
        }

        if let Some(function) = self.call.take() {
            return Err(ParseError::at_token(
                ParseErrorKind::MissingArgument,
                &function,
            ));
        }
        self.finish()
    }

    fn push_operator(&mut self, token: Token, fixity: Fixity) -> Result<(), ParseError> {
        let Some(mapping) = self.operators.get(fixity, &token.text) else {
            return Err(ParseError::at_token(
                ParseErrorKind::UndefinedOperator,
                &token,
            ));
        };
        let (precedence, left_associative) = (mapping.precedence, mapping.left_associative);

        // Prefix operators bind to what follows; nothing to reduce yet.
        if fixity != Fixity::Prefix {
            self.reduce_while_binding(precedence, left_associative)?;
        }

        if fixity == Fixity::Postfix {
            let operand = self.pop_operands(1, &token)?;
            self.output.push(AstNode::new(token, operand));
        } else {
            self.pending.push(Pending::Operator {
                token,
                fixity,
                precedence,
            });
        }
        Ok(())
    }

    /// Reduce pending operators that bind at least as tightly as an
    /// incoming operator with the given precedence and associativity.
    fn reduce_while_binding(
        &mut self,
        precedence: u8,
        left_associative: bool,
    ) -> Result<(), ParseError> {
        while let Some(top) = self.pending.last() {
            let reduce = match top {
                Pending::Structure(_) => true,
                Pending::Operator {
                    precedence: top_precedence,
                    ..
                } => {
                    (left_associative && precedence <= *top_precedence)
                        || precedence < *top_precedence
                }
                _ => false,
            };
            if !reduce {
                break;
            }
            self.reduce_top()?;
        }
        Ok(())
    }

    fn reduce_structures(&mut self) -> Result<(), ParseError> {
        while matches!(self.pending.last(), Some(Pending::Structure(_))) {
            self.reduce_top()?;
        }
        Ok(())
    }

    /// Reduce every operator above the innermost open delimiter.
    fn reduce_to_delimiter(&mut self) -> Result<(), ParseError> {
        while self.pending.last().is_some_and(Pending::is_reducible) {
            self.reduce_top()?;
        }
        Ok(())
    }

    fn reduce_top(&mut self) -> Result<(), ParseError> {
        match self.pending.pop() {
            Some(Pending::Operator { token, fixity, .. }) => {
                let operands = self.pop_operands(fixity.arity(), &token)?;
                self.output.push(AstNode::new(token, operands));
            }
            Some(Pending::Structure(token)) => {
                let operands = self.pop_operands(2, &token)?;
                self.output.push(AstNode::new(token, operands));
            }
            Some(delimiter) => self.pending.push(delimiter),
            None => {}
        }
        Ok(())
    }

    fn open(&mut self, delimiter: Pending) {
        if let Some(depth) = delimiter.depth() {
            self.floors.push(depth);
        }
        self.pending.push(delimiter);
    }

    /// Pop the top pending entry, closing its delimiter if it is one.
    fn close(&mut self) -> Option<Pending> {
        let entry = self.pending.pop()?;
        if entry.depth().is_some() {
            self.floors.pop();
        }
        Some(entry)
    }

    /// Output stack height below which the current sub-expression may not
    /// take operands.
    fn floor(&self) -> usize {
        self.floors.last().copied().unwrap_or(0)
    }

    fn pop_operands(&mut self, count: usize, at: &Token) -> Result<Vec<AstNode>, ParseError> {
        let available = self.output.len().saturating_sub(self.floor());
        if available < count {
            return Err(ParseError::at_token(ParseErrorKind::MissingOperand, at));
        }
        Ok(self.output.split_off(self.output.len() - count))
    }

    fn close_brace(&mut self, close: Token) -> Result<(), ParseError> {
        self.reduce_to_delimiter()?;
        match self.close() {
            Some(Pending::Group { open, depth }) => {
                self.expect_single(depth, &open, &close)?;
            }
            Some(Pending::Call {
                function,
                depth,
                commas,
            }) => {
                let args = self.output.len() - depth;
                if args > 0 || commas > 0 {
                    check_arguments(args, commas + 1, &close)?;
                }
                let children = self.output.split_off(depth);
                self.output.push(AstNode::new(function, children));
            }
            Some(_) | None => {
                return Err(ParseError::at_token(
                    ParseErrorKind::UnexpectedClosingBrace,
                    &close,
                ));
            }
        }
        Ok(())
    }

    fn comma(&mut self, comma: Token) -> Result<(), ParseError> {
        self.reduce_to_delimiter()?;
        let Some(Pending::Call { depth, commas, .. }) = self.pending.last_mut() else {
            return Err(ParseError::at_token(ParseErrorKind::UnexpectedComma, &comma));
        };
        check_arguments(self.output.len() - *depth, *commas + 1, &comma)?;
        *commas += 1;
        Ok(())
    }

    fn open_index(&mut self, open: Token) -> Result<(), ParseError> {
        // `a.b[0]` indexes `a.b`.
        self.reduce_structures()?;
        if self.output.len() <= self.floor() {
            return Err(ParseError::at_token(ParseErrorKind::MissingOperand, &open));
        }
        self.open(Pending::Index {
            open,
            depth: self.output.len(),
        });
        Ok(())
    }

    fn close_index(&mut self, close: Token) -> Result<(), ParseError> {
        self.reduce_to_delimiter()?;
        let Some(Pending::Index { open, depth }) = self.close() else {
            return Err(ParseError::at_token(
                ParseErrorKind::UnexpectedClosingArray,
                &close,
            ));
        };
        self.expect_single(depth, &open, &close)?;
        // The target sits directly below the index; `open_index` checked
        // that it exists.
        let children = self.output.split_off(depth - 1);
        self.output.push(AstNode::new(open, children));
        Ok(())
    }

    /// A parenthesized or bracketed sub-expression must leave exactly one
    /// operand above `depth`.
    fn expect_single(&self, depth: usize, open: &Token, close: &Token) -> Result<(), ParseError> {
        match self.output.len() - depth {
            0 => Err(ParseError::new(
                ParseErrorKind::EmptyGroup,
                open.span.merge(close.span),
                format!("{}{}", open.text, close.text),
            )),
            1 => Ok(()),
            _ => Err(ParseError::at_token(
                ParseErrorKind::TooManyOperands,
                &self.output[depth + 1].token,
            )),
        }
    }

    fn finish(mut self) -> Result<AstNode, ParseError> {
        while let Some(entry) = self.pending.last() {
            match entry {
                Pending::Call { .. } | Pending::Group { .. } => {
                    return Err(ParseError::at_token(
                        ParseErrorKind::UnclosedBrace,
                        entry.token(),
                    ));
                }
                Pending::Index { .. } => {
                    return Err(ParseError::at_token(
                        ParseErrorKind::UnclosedArray,
                        entry.token(),
                    ));
                }
                Pending::Operator { .. } | Pending::Structure(_) => self.reduce_top()?,
            }
        }

        if let Some(extra) = self.output.get(1) {
            return Err(ParseError::at_token(
                ParseErrorKind::TooManyOperands,
                &extra.token,
            ));
        }
        let Some(root) = self.output.pop() else {
            return Err(ParseError::new(
                ParseErrorKind::EmptyExpression,
                Span::point(0),
                String::new(),
            ));
        };
        trace!(ast = %root, "parsed");
        Ok(root)
    }
}

fn check_arguments(args: usize, expected: usize, at: &Token) -> Result<(), ParseError> {
    match args.cmp(&expected) {
        std::cmp::Ordering::Less => Err(ParseError::at_token(
            ParseErrorKind::MissingArgument,
            at,
        )),
        std::cmp::Ordering::Equal => Ok(()),
        std::cmp::Ordering::Greater => Err(ParseError::at_token(
            ParseErrorKind::TooManyOperands,
            at,
        )),
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
