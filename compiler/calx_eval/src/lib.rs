//! Calx Eval - tree compiler and evaluation engine.
//!
//! # Pipeline
//!
//! ```text
//! source --calx_lexer--> tokens --calx_parse--> AstNode --TreeBuilder--> Node
//! ```
//!
//! [`ExpressionFactory::parse`] runs the whole pipeline against a
//! [`Configuration`] and returns a [`CompiledExpression`]. Every operator,
//! function and accessor is resolved while the tree is built, down to the
//! overloads admitting the call's argument count. The final overload is
//! picked on each evaluation from the runtime argument values.
//!
//! # Failed arguments
//!
//! A child that fails to evaluate does not abort its parent call. The
//! configured [`FailurePolicy`] turns the error into an argument value, so
//! `if(true, 4/2, 4/0)` evaluates to `2`: `if` takes its branches as lazy
//! parameters and discards the failed one. An overload that does not
//! accept failures rejects the argument, and the original error surfaces.

mod builder;
mod config;
mod expression;
mod factory;
mod failure;
mod literal;
mod node;
mod stack;

pub use config::Configuration;
pub use expression::CompiledExpression;
pub use factory::{ExpressionError, ExpressionFactory};
pub use failure::{CaptureFailures, FailFast, FailurePolicy};
pub use literal::{LiteralParser, StandardLiterals};
pub use node::Node;
pub use stack::ensure_sufficient_stack;
