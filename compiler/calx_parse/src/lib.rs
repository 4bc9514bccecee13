//! Parser for the calx expression language.
//!
//! Tokens are converted to an [`AstNode`] with the shunting-yard algorithm:
//! operands go onto an output stack, operators and open delimiters onto a
//! pending stack, and a pending operator is reduced into a node once an
//! incoming operator binds less tightly. Function calls, indexing and
//! structure access are handled as extra pending entries.
//!
//! The parser is iterative, so nesting depth is bounded by heap memory
//! rather than by the call stack.

mod parser;
mod pending;

use calx_diagnostic::ParseError;
use calx_ir::{AstNode, OperatorMap, Token};

pub use parser::Parser;

/// Parse a token sequence (as produced by `calx_lexer`) into a single tree.
pub fn parse(
    tokens: impl IntoIterator<Item = Token>,
    operators: &OperatorMap,
) -> Result<AstNode, ParseError> {
    Parser::new(operators).parse(tokens)
}
