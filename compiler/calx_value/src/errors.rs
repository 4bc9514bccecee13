//! Evaluation errors.
//!
//! `EvalErrorKind` carries the structured category; factory functions
//! (e.g. [`division_by_zero`]) are the public way to build errors and fill
//! in both `kind` and `message`.
//!
//! The same type covers two phases: resolution failures while the
//! evaluation tree is built (unknown operator target, no overload for an
//! argument count) and failures while it is evaluated.

use std::fmt;

use calx_diagnostic::{snippet, ErrorCode};
use calx_ir::Span;

use crate::{ValidationError, Value};

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq)]
pub enum EvalErrorKind {
    // Resolution (tree construction)
    UnknownOperator {
        operator: String,
        target: String,
    },
    UndefinedFunction {
        name: String,
    },
    ArityMismatch {
        name: String,
        got: usize,
    },
    NoAccessor {
        access: &'static str,
    },
    InvalidLiteral {
        text: String,
        reason: String,
    },

    // Evaluation
    VariableNotFound {
        name: String,
    },
    NoMatchingOverload {
        name: String,
        errors: Vec<ValidationError>,
    },
    DivisionByZero,
    IndexOutOfBounds {
        index: f64,
        len: usize,
    },
    FieldNotFound {
        field: String,
    },

    /// Domain error raised by an evaluable.
    Custom {
        message: String,
    },
}

impl EvalErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::UnknownOperator { .. } => ErrorCode::E2001,
            Self::UndefinedFunction { .. } => ErrorCode::E2002,
            Self::ArityMismatch { .. } => ErrorCode::E2003,
            Self::NoAccessor { .. } => ErrorCode::E2004,
            Self::InvalidLiteral { .. } => ErrorCode::E2005,
            Self::VariableNotFound { .. } => ErrorCode::E3001,
            Self::NoMatchingOverload { .. } => ErrorCode::E3002,
            Self::DivisionByZero => ErrorCode::E3003,
            Self::IndexOutOfBounds { .. } => ErrorCode::E3004,
            Self::FieldNotFound { .. } => ErrorCode::E3005,
            Self::Custom { .. } => ErrorCode::E3006,
        }
    }
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownOperator { operator, target } => {
                write!(f, "operator `{operator}` has no implementation `{target}`")
            }
            Self::UndefinedFunction { name } => write!(f, "undefined function: {name}"),
            Self::ArityMismatch { name, got } => {
                let arg_word = if *got == 1 { "argument" } else { "arguments" };
                write!(f, "no overload of `{name}` takes {got} {arg_word}")
            }
            Self::NoAccessor { access } => write!(f, "no {access} accessor is registered"),
            Self::InvalidLiteral { text, reason } => {
                write!(f, "invalid literal `{text}`: {reason}")
            }
            Self::VariableNotFound { name } => write!(f, "variable not found: {name}"),
            Self::NoMatchingOverload { name, errors } => match errors.first() {
                Some(first) => write!(f, "no overload of `{name}` matches: {first}"),
                None => write!(f, "no overload of `{name}` matches"),
            },
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
            Self::FieldNotFound { field } => write!(f, "no field {field} on structure"),
            Self::Custom { message } => write!(f, "{message}"),
        }
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Human-readable message; equals `kind.to_string()` for
    /// factory-created errors.
    pub message: String,
    /// Source location of the node that raised the error.
    pub span: Option<Span>,
}

impl EvalError {
    /// Create a domain error with just a message.
    #[cold]
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        EvalError {
            kind: EvalErrorKind::Custom {
                message: message.clone(),
            },
            message,
            span: None,
        }
    }

    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        EvalError {
            kind,
            message,
            span: None,
        }
    }

    /// Attach a source span, keeping one that is already set.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        if self.span.is_none() {
            self.span = Some(span);
        }
        self
    }

    #[inline]
    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    /// Caret-annotated rendering; errors without a span point at the
    /// start of the source.
    pub fn render(&self, source: &str) -> String {
        let span = self.span.unwrap_or(Span::point(0));
        snippet::render(self.code(), &self.message, source, span)
    }
}

// Resolution Errors

/// Operator mapped to an evaluable name that is not registered for its arity.
#[cold]
pub fn unknown_operator(operator: &str, target: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnknownOperator {
        operator: operator.to_string(),
        target: target.to_string(),
    })
}

#[cold]
pub fn undefined_function(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedFunction {
        name: name.to_string(),
    })
}

/// No overload of `name` admits `got` arguments.
#[cold]
pub fn arity_mismatch(name: &str, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        name: name.to_string(),
        got,
    })
}

/// Indexing or field access used without a registered accessor.
#[cold]
pub fn no_accessor(access: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NoAccessor { access })
}

#[cold]
pub fn invalid_literal(text: &str, reason: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidLiteral {
        text: text.to_string(),
        reason: reason.into(),
    })
}

// Evaluation Errors

#[cold]
pub fn variable_not_found(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::VariableNotFound {
        name: name.to_string(),
    })
}

/// Every candidate of an overload set rejected the arguments.
#[cold]
pub fn no_matching_overload(name: &str, errors: Vec<ValidationError>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NoMatchingOverload {
        name: name.to_string(),
        errors,
    })
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn index_out_of_bounds(index: f64, len: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IndexOutOfBounds { index, len })
}

#[cold]
pub fn field_not_found(field: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::FieldNotFound {
        field: field.to_string(),
    })
}

#[cfg(test)]
mod tests;
