//! Everything an [`ExpressionFactory`](crate::ExpressionFactory) needs to
//! know about the language it compiles.

use std::fmt;
use std::sync::Arc;

use calx_dispatch::{TypedEvaluableByName, TypedEvaluables};
use calx_ir::{OperatorMap, SyntaxOptions};
use calx_value::Value;
use rustc_hash::FxHashMap;

use crate::{CaptureFailures, FailurePolicy, LiteralParser, StandardLiterals};

/// Operators, evaluables, accessors, constants and policies.
///
/// Operator targets and function names share the `evaluables` registry.
/// An empty configuration knows no operators and no functions; start from
/// a catalog (such as `calx_std::standard_configuration`) and layer
/// overrides with the `with_*` setters.
#[derive(Clone)]
pub struct Configuration {
    pub operators: OperatorMap,
    pub evaluables: TypedEvaluableByName,
    /// Overloads for `target[index]`, called with two arguments.
    pub array_access: TypedEvaluables,
    /// Overloads for `target.name`, called with the target and the field
    /// name as a string.
    pub property_access: TypedEvaluables,
    /// Names replaced by their value when the tree is built.
    pub constants: FxHashMap<String, Value>,
    pub literals: Arc<dyn LiteralParser>,
    pub failures: Arc<dyn FailurePolicy>,
    pub syntax: SyntaxOptions,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            operators: OperatorMap::default(),
            evaluables: TypedEvaluableByName::default(),
            array_access: TypedEvaluables::default(),
            property_access: TypedEvaluables::default(),
            constants: FxHashMap::default(),
            literals: Arc::new(StandardLiterals),
            failures: Arc::new(CaptureFailures),
            syntax: SyntaxOptions::default(),
        }
    }
}

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_operators(mut self, operators: OperatorMap) -> Self {
        self.operators = operators;
        self
    }

    /// Layer `overrides` over the current operator tables.
    #[must_use]
    pub fn with_operator_overrides(mut self, overrides: OperatorMap) -> Self {
        self.operators = overrides.and_then(self.operators);
        self
    }

    #[must_use]
    pub fn with_evaluables(mut self, evaluables: TypedEvaluableByName) -> Self {
        self.evaluables = evaluables;
        self
    }

    /// Layer `overrides` over the current registry; a name defined in
    /// `overrides` hides every overload of that name underneath.
    #[must_use]
    pub fn with_evaluable_overrides(mut self, overrides: TypedEvaluableByName) -> Self {
        self.evaluables = overrides.and_then(self.evaluables);
        self
    }

    #[must_use]
    pub fn with_array_access(mut self, access: TypedEvaluables) -> Self {
        self.array_access = access;
        self
    }

    #[must_use]
    pub fn with_property_access(mut self, access: TypedEvaluables) -> Self {
        self.property_access = access;
        self
    }

    #[must_use]
    pub fn with_constant(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.constants.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_literals(mut self, literals: impl LiteralParser + 'static) -> Self {
        self.literals = Arc::new(literals);
        self
    }

    #[must_use]
    pub fn with_failures(mut self, failures: impl FailurePolicy + 'static) -> Self {
        self.failures = Arc::new(failures);
        self
    }

    #[must_use]
    pub fn with_syntax(mut self, syntax: SyntaxOptions) -> Self {
        self.syntax = syntax;
        self
    }
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("operators", &self.operators)
            .field("functions", &self.evaluables.names())
            .field("array_access", &self.array_access.len())
            .field("property_access", &self.property_access.len())
            .field("constants", &self.constants)
            .field("syntax", &self.syntax)
            .finish_non_exhaustive()
    }
}
