//! AST -> evaluation tree.
//!
//! Every name is resolved here: constants, operator targets, functions
//! and accessors. A name that cannot be resolved for the arity it is used
//! with aborts construction.

use calx_dispatch::TypedEvaluables;
use calx_ir::{AstNode, Fixity, Token, TokenKind};
use calx_value::errors::{arity_mismatch, no_accessor, undefined_function, unknown_operator};
use calx_value::{EvalError, Value};
use tracing::debug;

use crate::stack::ensure_sufficient_stack;
use crate::{Configuration, Node};

pub(crate) struct TreeBuilder<'c> {
    config: &'c Configuration,
}

impl<'c> TreeBuilder<'c> {
    pub(crate) fn new(config: &'c Configuration) -> Self {
        TreeBuilder { config }
    }

    pub(crate) fn build(&self, ast: &AstNode) -> Result<Node, EvalError> {
        self.node(ast).inspect_err(|error| {
            debug!(error = %error, span = ?error.span, "tree construction failed");
        })
    }

    fn node(&self, ast: &AstNode) -> Result<Node, EvalError> {
        ensure_sufficient_stack(|| self.lower(ast))
    }

    fn lower(&self, ast: &AstNode) -> Result<Node, EvalError> {
        let token = &ast.token;
        let literals = &*self.config.literals;
        match token.kind {
            TokenKind::NumberLiteral => Ok(Node::Value {
                value: literals
                    .parse_number(token)
                    .map_err(|e| e.with_span(token.span))?,
                token: token.clone(),
            }),
            TokenKind::StringLiteral => Ok(Node::Value {
                value: literals
                    .parse_string(token)
                    .map_err(|e| e.with_span(token.span))?,
                token: token.clone(),
            }),
            TokenKind::VariableOrConstant => Ok(match self.config.constants.get(&token.text) {
                Some(value) => Node::Value {
                    token: token.clone(),
                    value: value.clone(),
                },
                None => Node::Lookup {
                    token: token.clone(),
                },
            }),
            TokenKind::PrefixOperator | TokenKind::InfixOperator | TokenKind::PostfixOperator => {
                let overloads = self.operator(token)?;
                Ok(evaluatable(token, overloads, self.children(&ast.children)?))
            }
            TokenKind::Function => {
                let overloads = self.function(token, ast.children.len())?;
                Ok(evaluatable(token, overloads, self.children(&ast.children)?))
            }
            TokenKind::ArrayOpen => {
                let overloads = accessor(&self.config.array_access, "array", token)?;
                Ok(evaluatable(token, overloads, self.children(&ast.children)?))
            }
            TokenKind::StructureSeparator => {
                let overloads = accessor(&self.config.property_access, "property", token)?;
                Ok(evaluatable(token, overloads, self.structure_children(ast)?))
            }
            TokenKind::BraceOpen
            | TokenKind::BraceClose
            | TokenKind::ArrayClose
            | TokenKind::Comma => Err(EvalError::new(format!(
                "unexpected `{}` in syntax tree",
                token.text
            ))
            .with_span(token.span)),
        }
    }

    fn children(&self, children: &[AstNode]) -> Result<Vec<Node>, EvalError> {
        children.iter().map(|child| self.node(child)).collect()
    }

    /// Target plus the field name as a string value.
    fn structure_children(&self, ast: &AstNode) -> Result<Vec<Node>, EvalError> {
        let mut nodes = Vec::with_capacity(ast.children.len());
        for (position, child) in ast.children.iter().enumerate() {
            if position == 1 && child.is_leaf() {
                nodes.push(Node::Value {
                    token: child.token.clone(),
                    value: Value::string(child.token.text.as_str()),
                });
            } else {
                nodes.push(self.node(child)?);
            }
        }
        Ok(nodes)
    }

    /// An operator resolves through its mapping's target; an operator
    /// without a mapping is looked up under its own text.
    fn operator(&self, token: &Token) -> Result<TypedEvaluables, EvalError> {
        let target = self
            .config
            .operators
            .for_kind(token.kind, &token.text)
            .map_or(token.text.as_str(), |mapping| mapping.target.as_str());
        let arity = Fixity::of(token.kind).map_or(1, Fixity::arity);
        self.config
            .evaluables
            .get(target)
            .and_then(|set| set.filter_by_arity(arity))
            .ok_or_else(|| unknown_operator(&token.text, target).with_span(token.span))
    }

    fn function(&self, token: &Token, arity: usize) -> Result<TypedEvaluables, EvalError> {
        let Some(set) = self.config.evaluables.get(&token.text) else {
            return Err(undefined_function(&token.text).with_span(token.span));
        };
        set.filter_by_arity(arity)
            .ok_or_else(|| arity_mismatch(&token.text, arity).with_span(token.span))
    }
}

fn evaluatable(token: &Token, overloads: TypedEvaluables, children: Vec<Node>) -> Node {
    Node::Evaluatable {
        token: token.clone(),
        overloads,
        children,
    }
}

fn accessor(
    access: &TypedEvaluables,
    kind: &'static str,
    token: &Token,
) -> Result<TypedEvaluables, EvalError> {
    access
        .filter_by_arity(2)
        .ok_or_else(|| no_accessor(kind).with_span(token.span))
}
