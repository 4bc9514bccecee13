//! Runtime value model for the calx expression language.
//!
//! [`Value`] is a closed tagged union. Evaluation failures that must travel
//! through argument lists (so a conditional can discard an untaken branch)
//! are carried as [`Value::Failure`].

pub mod errors;
mod validation;
mod value;

pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use validation::ValidationError;
pub use value::{ParamType, Value, ValueType};
