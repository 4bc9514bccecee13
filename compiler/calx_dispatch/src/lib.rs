//! Typed multiple dispatch for the calx expression language.
//!
//! Operators and functions are plug-ins implementing [`Evaluable`]. Each is
//! registered together with a [`Signature`] as a [`TypedEvaluable`];
//! evaluables sharing a name form an overload set ([`TypedEvaluables`]).
//!
//! Resolution happens in two phases:
//!
//! 1. [`TypedEvaluables::filter_by_arity`] when the evaluation tree is
//!    built, since argument counts are known from the syntax
//! 2. [`TypedEvaluables::find`] on every evaluation, against the runtime
//!    argument values

mod evaluable;
mod resolver;
mod signature;
mod typed;

pub use evaluable::{EvalContext, Evaluable};
pub use resolver::{Bindings, FnResolver, VariableResolver, VariableTypeResolver};
pub use signature::{Parameter, Signature, Validator};
pub use typed::{TypedEvaluable, TypedEvaluableByName, TypedEvaluables};
