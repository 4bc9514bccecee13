//! Tokenizer for the calx expression language.
//!
//! # Architecture
//!
//! - `cursor`: char-at-a-time cursor with byte offsets
//! - `escape`: string literal scanning and escape decoding
//! - `number`: hexadecimal and decimal literal scanning
//! - [`Tokenizer`]: the context-sensitive driver
//!
//! Whether `-` is a prefix or an infix operator, whether `name` is a
//! function or a variable, and whether `[` is legal all depend on the
//! previous token, so tokenizing needs the operator tables and the function
//! registry in addition to the source.

mod cursor;
mod escape;
mod number;
mod tokenizer;

use calx_diagnostic::ParseError;
use calx_ir::{FunctionLookup, OperatorMap, SyntaxOptions, Token};

pub use escape::quote;
pub use tokenizer::Tokenizer;

/// Tokenize `source` completely.
///
/// Fails on the first lexical error, including unbalanced braces or
/// brackets detected at end of input.
pub fn tokenize(
    source: &str,
    operators: &OperatorMap,
    functions: &dyn FunctionLookup,
    options: SyntaxOptions,
) -> Result<Vec<Token>, ParseError> {
    Tokenizer::new(source, operators, functions, options)?.collect()
}
