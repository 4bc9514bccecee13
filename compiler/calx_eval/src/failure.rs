//! How evaluation failures travel through argument lists.
//!
//! When a child of a call fails, the engine hands the error to the
//! configured [`FailurePolicy`]. [`CaptureFailures`] turns it into a
//! [`Value::Failure`] argument so an evaluable with a lazy parameter (a
//! conditional, `&&`) can discard it. [`FailFast`] propagates it at once.

use calx_value::{EvalError, Value};

pub trait FailurePolicy: Send + Sync {
    /// Map a failed child evaluation to an argument value, or give the
    /// error back to abort the call.
    fn capture(&self, error: EvalError) -> Result<Value, EvalError>;

    /// The error stored in an evaluable's result, to be raised in place of
    /// returning that result.
    fn stored_error(&self, value: &Value) -> Option<EvalError>;
}

/// Failures become [`Value::Failure`] arguments. The default policy.
#[derive(Copy, Clone, Debug, Default)]
pub struct CaptureFailures;

impl FailurePolicy for CaptureFailures {
    fn capture(&self, error: EvalError) -> Result<Value, EvalError> {
        Ok(Value::failure(error))
    }

    fn stored_error(&self, value: &Value) -> Option<EvalError> {
        value.as_failure().map(|error| (**error).clone())
    }
}

/// The first failure aborts evaluation; lazy parameters never see one.
#[derive(Copy, Clone, Debug, Default)]
pub struct FailFast;

impl FailurePolicy for FailFast {
    fn capture(&self, error: EvalError) -> Result<Value, EvalError> {
        Err(error)
    }

    fn stored_error(&self, value: &Value) -> Option<EvalError> {
        value.as_failure().map(|error| (**error).clone())
    }
}
