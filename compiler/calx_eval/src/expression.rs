//! A compiled, reusable expression.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use calx_dispatch::{EvalContext, VariableResolver, VariableTypeResolver};
use calx_value::{EvalResult, ValueType};

use crate::{FailurePolicy, Node};

/// An expression compiled once and evaluated any number of times.
///
/// Evaluation only reads the tree, so a `CompiledExpression` can be shared
/// across threads and evaluated concurrently with different bindings.
#[derive(Clone)]
pub struct CompiledExpression {
    source: Arc<str>,
    root: Arc<Node>,
    variables: BTreeSet<String>,
    failures: Arc<dyn FailurePolicy>,
}

impl CompiledExpression {
    pub(crate) fn new(source: &str, root: Node, failures: Arc<dyn FailurePolicy>) -> Self {
        let mut variables = BTreeSet::new();
        root.walk(|node| {
            if let Node::Lookup { token } = node {
                variables.insert(token.text.clone());
            }
        });
        CompiledExpression {
            source: Arc::from(source),
            root: Arc::new(root),
            variables,
            failures,
        }
    }

    pub fn evaluate(&self, variables: &dyn VariableResolver) -> EvalResult {
        let ctx = EvalContext::new(variables, &self.source);
        self.root.evaluate(&ctx, &*self.failures)
    }

    /// Names looked up from the bindings, excluding constants.
    pub fn used_variables(&self) -> &BTreeSet<String> {
        &self.variables
    }

    /// Used variables that `variables` does not bind.
    pub fn undefined_variables(&self, variables: &dyn VariableResolver) -> BTreeSet<String> {
        self.variables
            .iter()
            .filter(|name| !variables.is_bound(name))
            .cloned()
            .collect()
    }

    /// The type `types` reports for each used variable; unknown names are
    /// left out.
    pub fn variable_types(&self, types: &dyn VariableTypeResolver) -> BTreeMap<String, ValueType> {
        self.variables
            .iter()
            .filter_map(|name| types.resolve_type(name).map(|ty| (name.clone(), ty)))
            .collect()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn root(&self) -> &Node {
        &self.root
    }
}

impl std::fmt::Debug for CompiledExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompiledExpression")
            .field("source", &self.source)
            .field("variables", &self.variables)
            .finish_non_exhaustive()
    }
}
