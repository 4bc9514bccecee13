//! Per-argument validation failures.
//!
//! A [`ValidationError`] explains why one overload rejected one argument
//! list. They only become an [`EvalError`] once every candidate of an
//! overload set has been tried.

use std::fmt;
use std::sync::Arc;

use crate::{EvalError, ParamType, ValueType};

/// Why a signature rejected an argument list. Positions are 0-based.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ValidationError {
    Arity {
        min: usize,
        max: Option<usize>,
        got: usize,
    },
    TypeMismatch {
        position: usize,
        expected: ParamType,
        found: ValueType,
    },
    NullArgument {
        position: usize,
    },
    Rejected {
        position: usize,
        message: String,
    },
    /// The argument itself failed to evaluate and the parameter does not
    /// tolerate failures.
    FailedArgument {
        position: usize,
        error: Arc<EvalError>,
    },
}

impl ValidationError {
    pub fn position(&self) -> Option<usize> {
        match self {
            ValidationError::Arity { .. } => None,
            ValidationError::TypeMismatch { position, .. }
            | ValidationError::NullArgument { position }
            | ValidationError::Rejected { position, .. }
            | ValidationError::FailedArgument { position, .. } => Some(*position),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Arity { min, max, got } => match max {
                Some(max) if max == min => write!(f, "expected {min} argument(s), got {got}"),
                Some(max) => write!(f, "expected {min} to {max} arguments, got {got}"),
                None => write!(f, "expected at least {min} argument(s), got {got}"),
            },
            ValidationError::TypeMismatch {
                position,
                expected,
                found,
            } => write!(
                f,
                "argument {}: expected {expected}, got {found}",
                position + 1
            ),
            ValidationError::NullArgument { position } => {
                write!(f, "argument {}: must not be null", position + 1)
            }
            ValidationError::Rejected { position, message } => {
                write!(f, "argument {}: {message}", position + 1)
            }
            ValidationError::FailedArgument { position, error } => {
                write!(f, "argument {}: {error}", position + 1)
            }
        }
    }
}
