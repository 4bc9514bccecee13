//! Variable bindings supplied by the caller.
//!
//! The engine only reads bindings; it never stores or mutates them.

use std::collections::HashMap;
use std::hash::BuildHasher;

use calx_value::{Value, ValueType};
use rustc_hash::FxHashMap;

/// Looks up variable values by name.
pub trait VariableResolver {
    fn resolve(&self, name: &str) -> Option<Value>;

    fn is_bound(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }
}

/// Reports the static type of a variable, for tooling that inspects an
/// expression without evaluating it.
pub trait VariableTypeResolver {
    fn resolve_type(&self, name: &str) -> Option<ValueType>;
}

impl<S: BuildHasher> VariableResolver for HashMap<String, Value, S> {
    fn resolve(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }

    fn is_bound(&self, name: &str) -> bool {
        self.contains_key(name)
    }
}

impl<S: BuildHasher> VariableTypeResolver for HashMap<String, ValueType, S> {
    fn resolve_type(&self, name: &str) -> Option<ValueType> {
        self.get(name).copied()
    }
}

/// A plain name -> value map.
#[derive(Clone, Debug, Default)]
pub struct Bindings {
    values: FxHashMap<String, Value>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl VariableResolver for Bindings {
    fn resolve(&self, name: &str) -> Option<Value> {
        self.values.get(name).cloned()
    }

    fn is_bound(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }
}

/// The types of the bound values, for [`VariableTypeResolver`] users.
impl VariableTypeResolver for Bindings {
    fn resolve_type(&self, name: &str) -> Option<ValueType> {
        self.values.get(name).map(Value::value_type)
    }
}

impl<N: Into<String>, V: Into<Value>> FromIterator<(N, V)> for Bindings {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut bindings = Bindings::new();
        for (name, value) in iter {
            bindings.insert(name, value);
        }
        bindings
    }
}

/// Adapts a closure into a [`VariableResolver`].
pub struct FnResolver<F>(pub F);

impl<F> VariableResolver for FnResolver<F>
where
    F: Fn(&str) -> Option<Value>,
{
    fn resolve(&self, name: &str) -> Option<Value> {
        (self.0)(name)
    }
}
