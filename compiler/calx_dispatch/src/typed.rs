//! Overload sets and the name -> overload-set registry.

use std::fmt;
use std::sync::Arc;

use calx_ir::{FunctionLookup, Token};
use calx_value::{EvalResult, ValidationError, Value};
use rustc_hash::FxHashMap;

use crate::{EvalContext, Evaluable, Signature};

/// An evaluable paired with the signature it accepts.
#[derive(Clone)]
pub struct TypedEvaluable {
    signature: Signature,
    evaluable: Arc<dyn Evaluable>,
}

impl TypedEvaluable {
    pub fn new(
        signature: Signature,
        evaluable: impl Fn(&EvalContext<'_>, &Token, &[Value]) -> EvalResult + Send + Sync + 'static,
    ) -> Self {
        TypedEvaluable {
            signature,
            evaluable: Arc::new(evaluable),
        }
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Invoke without re-checking the signature.
    #[inline]
    pub fn evaluate(&self, ctx: &EvalContext<'_>, token: &Token, args: &[Value]) -> EvalResult {
        self.evaluable.evaluate(ctx, token, args)
    }
}

impl fmt::Debug for TypedEvaluable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedEvaluable")
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}

/// Overloads sharing one name, in registration order.
#[derive(Clone, Debug, Default)]
pub struct TypedEvaluables {
    overloads: Vec<TypedEvaluable>,
}

impl TypedEvaluables {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, overload: TypedEvaluable) -> Self {
        self.overloads.push(overload);
        self
    }

    pub fn push(&mut self, overload: TypedEvaluable) {
        self.overloads.push(overload);
    }

    pub fn iter(&self) -> impl Iterator<Item = &TypedEvaluable> {
        self.overloads.iter()
    }

    pub fn len(&self) -> usize {
        self.overloads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overloads.is_empty()
    }

    /// The overloads admitting `count` arguments, or `None` if there are none.
    pub fn filter_by_arity(&self, count: usize) -> Option<TypedEvaluables> {
        let overloads: Vec<TypedEvaluable> = self
            .overloads
            .iter()
            .filter(|overload| overload.signature.admits(count))
            .cloned()
            .collect();
        (!overloads.is_empty()).then_some(TypedEvaluables { overloads })
    }

    /// The first overload, in order, whose signature accepts `args`.
    ///
    /// On failure every overload's rejection is returned, in the same order.
    pub fn find(&self, args: &[Value]) -> Result<&TypedEvaluable, Vec<ValidationError>> {
        let mut errors = Vec::with_capacity(self.overloads.len());
        for overload in &self.overloads {
            match overload.signature.validate_arguments(args) {
                Ok(()) => return Ok(overload),
                Err(error) => errors.push(error),
            }
        }
        Err(errors)
    }
}

impl FromIterator<TypedEvaluable> for TypedEvaluables {
    fn from_iter<I: IntoIterator<Item = TypedEvaluable>>(iter: I) -> Self {
        TypedEvaluables {
            overloads: iter.into_iter().collect(),
        }
    }
}

/// Name -> overload set, with an optional fallback layer.
///
/// A name present in this layer shadows the whole overload set of the same
/// name in the fallback.
#[derive(Clone, Debug, Default)]
pub struct TypedEvaluableByName {
    entries: FxHashMap<String, TypedEvaluables>,
    fallback: Option<Arc<TypedEvaluableByName>>,
}

impl TypedEvaluableByName {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an overload to `name` in this layer.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, overload: TypedEvaluable) -> Self {
        self.insert(name, overload);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, overload: TypedEvaluable) {
        self.entries.entry(name.into()).or_default().push(overload);
    }

    pub fn get(&self, name: &str) -> Option<&TypedEvaluables> {
        self.entries
            .get(name)
            .or_else(|| self.fallback.as_deref().and_then(|base| base.get(name)))
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Layer `self` over `fallback`; see [`calx_ir::OperatorTable::and_then`].
    #[must_use]
    pub fn and_then(mut self, fallback: TypedEvaluableByName) -> TypedEvaluableByName {
        let base = match self.fallback.take() {
            Some(existing) => Arc::unwrap_or_clone(existing).and_then(fallback),
            None => fallback,
        };
        self.fallback = Some(Arc::new(base));
        self
    }

    /// All visible names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut out: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        if let Some(base) = self.fallback.as_deref() {
            out.extend(base.names());
        }
        out.sort_unstable();
        out.dedup();
        out
    }
}

impl FunctionLookup for TypedEvaluableByName {
    fn has_function(&self, name: &str) -> bool {
        self.contains(name)
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
