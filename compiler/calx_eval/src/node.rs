//! The evaluation tree.
//!
//! A [`Node`] never changes after construction and holds no per-call
//! state, so one tree can be evaluated from many threads at once, each
//! with its own bindings.

use calx_dispatch::{EvalContext, TypedEvaluables};
use calx_ir::Token;
use calx_value::errors::{no_matching_overload, variable_not_found};
use calx_value::{EvalError, EvalResult, ValidationError, Value};
use smallvec::SmallVec;
use tracing::trace;

use crate::stack::ensure_sufficient_stack;
use crate::FailurePolicy;

#[derive(Clone, Debug)]
pub enum Node {
    /// A literal or compile-time constant.
    Value { token: Token, value: Value },
    /// A variable, resolved against the bindings on every evaluation.
    Lookup { token: Token },
    /// An operator, function call or accessor.
    ///
    /// `overloads` is already filtered to the arity of `children` and is
    /// never empty; the overload is picked per evaluation from the runtime
    /// argument values.
    Evaluatable {
        token: Token,
        overloads: TypedEvaluables,
        children: Vec<Node>,
    },
}

impl Node {
    pub fn token(&self) -> &Token {
        match self {
            Node::Value { token, .. }
            | Node::Lookup { token }
            | Node::Evaluatable { token, .. } => token,
        }
    }

    pub fn evaluate(&self, ctx: &EvalContext<'_>, failures: &dyn FailurePolicy) -> EvalResult {
        match self {
            Node::Value { value, .. } => Ok(value.clone()),
            Node::Lookup { token } => ctx
                .variables
                .resolve(&token.text)
                .ok_or_else(|| variable_not_found(&token.text).with_span(token.span)),
            Node::Evaluatable {
                token,
                overloads,
                children,
            } => ensure_sufficient_stack(|| call(ctx, failures, token, overloads, children)),
        }
    }

    /// Visit every node in the subtree, parents before children.
    pub fn walk<'n>(&'n self, mut visit: impl FnMut(&'n Node)) {
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            visit(node);
            if let Node::Evaluatable { children, .. } = node {
                pending.extend(children.iter().rev());
            }
        }
    }
}

/// Trees are as deep as the expression nests, so children are released
/// from a worklist rather than by recursive drop glue.
impl Drop for Node {
    fn drop(&mut self) {
        let Node::Evaluatable { children, .. } = self else {
            return;
        };
        let mut pending = std::mem::take(children);
        while let Some(mut node) = pending.pop() {
            if let Node::Evaluatable { children, .. } = &mut node {
                pending.append(children);
            }
        }
    }
}

fn call(
    ctx: &EvalContext<'_>,
    failures: &dyn FailurePolicy,
    token: &Token,
    overloads: &TypedEvaluables,
    children: &[Node],
) -> EvalResult {
    let mut args: SmallVec<[Value; 4]> = SmallVec::with_capacity(children.len());
    for child in children {
        let value = match child.evaluate(ctx, failures) {
            Ok(value) => value,
            Err(error) => {
                trace!(call = %token.text, error = %error, "argument failed");
                failures.capture(error)?
            }
        };
        args.push(value);
    }

    match overloads.find(&args) {
        Ok(overload) => {
            let result = overload
                .evaluate(ctx, token, &args)
                .map_err(|e| e.with_span(token.span))?;
            match failures.stored_error(&result) {
                Some(error) => Err(error.with_span(token.span)),
                None => Ok(result),
            }
        }
        Err(errors) => {
            trace!(call = %token.text, candidates = errors.len(), "no overload accepted the arguments");
            Err(rejection(token, errors))
        }
    }
}

/// The error for an argument list every overload rejected.
///
/// When the first rejection is an argument that had already failed, that
/// failure is what the caller needs to see.
fn rejection(token: &Token, errors: Vec<ValidationError>) -> EvalError {
    if let Some(ValidationError::FailedArgument { error, .. }) = errors.first() {
        return (**error).clone();
    }
    no_matching_overload(&token.text, errors).with_span(token.span)
}
