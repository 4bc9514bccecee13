//! Source text -> [`CompiledExpression`].

use calx_diagnostic::{ErrorCode, ParseError};
use calx_ir::{AstNode, Token};
use calx_value::EvalError;
use tracing::debug;

use crate::builder::TreeBuilder;
use crate::{CompiledExpression, Configuration};

/// Why an expression could not be compiled.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ExpressionError {
    /// Lexical or grammatical error.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// A name in the expression could not be resolved.
    #[error(transparent)]
    Compile(#[from] EvalError),
}

impl ExpressionError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ExpressionError::Parse(error) => error.code(),
            ExpressionError::Compile(error) => error.code(),
        }
    }

    pub fn render(&self, source: &str) -> String {
        match self {
            ExpressionError::Parse(error) => error.render(source),
            ExpressionError::Compile(error) => error.render(source),
        }
    }
}

/// Compiles expressions against one [`Configuration`].
#[derive(Clone, Copy, Debug)]
pub struct ExpressionFactory<'c> {
    config: &'c Configuration,
}

impl<'c> ExpressionFactory<'c> {
    pub fn new(config: &'c Configuration) -> Self {
        ExpressionFactory { config }
    }

    pub fn config(&self) -> &'c Configuration {
        self.config
    }

    pub fn tokenize(&self, source: &str) -> Result<Vec<Token>, ParseError> {
        calx_lexer::tokenize(
            source,
            &self.config.operators,
            &self.config.evaluables,
            self.config.syntax,
        )
    }

    pub fn parse_ast(&self, source: &str) -> Result<AstNode, ParseError> {
        let tokens = self.tokenize(source)?;
        calx_parse::parse(tokens, &self.config.operators)
    }

    /// Tokenize, parse and resolve `source`.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn parse(&self, source: &str) -> Result<CompiledExpression, ExpressionError> {
        let ast = self.parse_ast(source).inspect_err(|error| {
            debug!(code = %error.code(), %error, "parse failed");
        })?;
        let root = TreeBuilder::new(self.config).build(&ast)?;
        Ok(CompiledExpression::new(
            source,
            root,
            self.config.failures.clone(),
        ))
    }
}
