//! Calx IR - shared data model for the calx expression language.
//!
//! Everything downstream of the source text speaks these types:
//!
//! - [`Span`]: byte range into the expression source
//! - [`Token`] / [`TokenKind`]: the tokenizer's output
//! - [`KindSet`]: bit sets of token kinds used for context checks
//! - [`AstNode`]: the parser's output
//! - [`OperatorMap`]: prefix/infix/postfix operator tables
//! - [`SyntaxOptions`]: optional grammar features
//!
//! The crate holds no evaluation logic.

mod ast;
mod kind_set;
mod lookup;
pub mod operator;
mod options;
mod span;
mod token;

pub use ast::AstNode;
pub use kind_set::KindSet;
pub use lookup::FunctionLookup;
pub use operator::{Fixity, OperatorMap, OperatorMapping, OperatorTable};
pub use options::SyntaxOptions;
pub use span::Span;
pub use token::{Token, TokenKind};
