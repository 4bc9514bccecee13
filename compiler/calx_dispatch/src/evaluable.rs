//! The plug-in contract for operators and functions.

use calx_ir::Token;
use calx_value::{EvalResult, Value};

use crate::VariableResolver;

/// What an evaluable can see besides its arguments.
#[derive(Clone, Copy)]
pub struct EvalContext<'a> {
    /// The caller's bindings for this evaluation.
    pub variables: &'a dyn VariableResolver,
    /// Source text of the expression being evaluated.
    pub source: &'a str,
}

impl<'a> EvalContext<'a> {
    pub fn new(variables: &'a dyn VariableResolver, source: &'a str) -> Self {
        EvalContext { variables, source }
    }
}

/// An operator or function implementation.
///
/// `token` is the operator or function-name token of the call site, so
/// errors can point at it. Arguments have already been checked against the
/// evaluable's signature; a lazy parameter may receive
/// [`Value::Failure`].
pub trait Evaluable: Send + Sync {
    fn evaluate(&self, ctx: &EvalContext<'_>, token: &Token, args: &[Value]) -> EvalResult;
}

impl<F> Evaluable for F
where
    F: Fn(&EvalContext<'_>, &Token, &[Value]) -> EvalResult + Send + Sync,
{
    fn evaluate(&self, ctx: &EvalContext<'_>, token: &Token, args: &[Value]) -> EvalResult {
        self(ctx, token, args)
    }
}
