//! Signatures, parameters and argument validators.

use std::fmt;
use std::sync::Arc;

use calx_value::{ParamType, ValidationError, Value};

type Check = dyn Fn(&Value) -> Option<String> + Send + Sync;

/// A named check on a single argument value.
///
/// Validators run after the type check, so a validator on a `Number`
/// parameter only ever sees numbers.
#[derive(Clone)]
pub struct Validator {
    check: Arc<Check>,
}

impl Validator {
    /// A check returning a failure message, or `None` to accept.
    pub fn new(check: impl Fn(&Value) -> Option<String> + Send + Sync + 'static) -> Self {
        Validator {
            check: Arc::new(check),
        }
    }

    /// Accept values for which `pred` holds, otherwise fail with `message`.
    pub fn predicate(
        message: impl Into<String>,
        pred: impl Fn(&Value) -> bool + Send + Sync + 'static,
    ) -> Self {
        let message = message.into();
        Validator::new(move |value| (!pred(value)).then(|| message.clone()))
    }

    pub fn non_negative() -> Self {
        Validator::predicate("must be non-negative", |value| {
            value.as_number().map_or(true, |n| n >= 0.0)
        })
    }

    pub fn non_zero() -> Self {
        Validator::predicate("must not equal zero", |value| {
            value.as_number().map_or(true, |n| n != 0.0)
        })
    }

    pub fn integer() -> Self {
        Validator::predicate("must be an integer", |value| {
            value.as_number().map_or(true, |n| n.fract() == 0.0)
        })
    }

    pub fn check(&self, value: &Value) -> Option<String> {
        (self.check)(value)
    }

    /// Both checks must pass; the first failure is reported.
    #[must_use]
    pub fn and(self, other: Validator) -> Validator {
        Validator::new(move |value| self.check(value).or_else(|| other.check(value)))
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Validator(..)")
    }
}

/// One declared parameter.
#[derive(Clone, Debug)]
pub struct Parameter {
    pub ty: ParamType,
    /// Accepts `null` in addition to values of `ty`.
    pub nullable: bool,
    /// Accepts a failed argument ([`Value::Failure`]) so the evaluable can
    /// decide whether the failure matters.
    pub lazy: bool,
    pub validators: Vec<Validator>,
}

impl Parameter {
    pub fn new(ty: ParamType) -> Self {
        Parameter {
            ty,
            nullable: false,
            lazy: false,
            validators: Vec::new(),
        }
    }

    pub fn any() -> Self {
        Parameter::new(ParamType::Any)
    }

    pub fn number() -> Self {
        Parameter::new(ParamType::Number)
    }

    pub fn string() -> Self {
        Parameter::new(ParamType::String)
    }

    pub fn boolean() -> Self {
        Parameter::new(ParamType::Boolean)
    }

    pub fn array() -> Self {
        Parameter::new(ParamType::Array)
    }

    pub fn structure() -> Self {
        Parameter::new(ParamType::Structure)
    }

    #[must_use]
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    #[must_use]
    pub fn lazy(mut self) -> Self {
        self.lazy = true;
        self
    }

    #[must_use]
    pub fn validated(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }

    /// Check one argument value at `position`.
    ///
    /// Order: failure sentinel, null, type, validators in declaration order.
    pub fn validate(&self, position: usize, value: &Value) -> Result<(), ValidationError> {
        match value {
            Value::Failure(_) if self.lazy => return Ok(()),
            Value::Failure(error) => {
                return Err(ValidationError::FailedArgument {
                    position,
                    error: Arc::clone(error),
                });
            }
            Value::Null if self.nullable => return Ok(()),
            Value::Null => return Err(ValidationError::NullArgument { position }),
            _ => {}
        }

        if !self.ty.accepts(value.value_type()) {
            return Err(ValidationError::TypeMismatch {
                position,
                expected: self.ty,
                found: value.value_type(),
            });
        }

        for validator in &self.validators {
            if let Some(message) = validator.check(value) {
                return Err(ValidationError::Rejected { position, message });
            }
        }
        Ok(())
    }
}

/// Declared parameters of an evaluable.
///
/// In a vararg signature the last parameter repeats and must match at least
/// once, so `min_args` is the parameter count in both shapes.
#[derive(Clone, Debug)]
pub struct Signature {
    parameters: Vec<Parameter>,
    vararg: bool,
    returns: ParamType,
}

impl Signature {
    pub fn new(parameters: Vec<Parameter>) -> Self {
        Signature {
            parameters,
            vararg: false,
            returns: ParamType::Any,
        }
    }

    /// A signature whose last parameter repeats.
    ///
    /// A vararg signature without parameters has nothing to repeat and
    /// behaves as a zero-argument signature.
    pub fn vararg(parameters: Vec<Parameter>) -> Self {
        let vararg = !parameters.is_empty();
        Signature {
            parameters,
            vararg,
            returns: ParamType::Any,
        }
    }

    #[must_use]
    pub fn returning(mut self, returns: ParamType) -> Self {
        self.returns = returns;
        self
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn is_vararg(&self) -> bool {
        self.vararg
    }

    pub fn returns(&self) -> ParamType {
        self.returns
    }

    pub fn min_args(&self) -> usize {
        self.parameters.len()
    }

    /// `None` means unbounded.
    pub fn max_args(&self) -> Option<usize> {
        (!self.vararg).then_some(self.parameters.len())
    }

    pub fn admits(&self, count: usize) -> bool {
        count >= self.min_args() && self.max_args().map_or(true, |max| count <= max)
    }

    /// The parameter describing argument `position`.
    pub fn parameter_for(&self, position: usize) -> Option<&Parameter> {
        match self.parameters.get(position) {
            Some(parameter) => Some(parameter),
            None if self.vararg => self.parameters.last(),
            None => None,
        }
    }

    /// Check an argument list, reporting the first problem.
    ///
    /// The argument count is checked before any argument value.
    pub fn validate_arguments(&self, args: &[Value]) -> Result<(), ValidationError> {
        if !self.admits(args.len()) {
            return Err(ValidationError::Arity {
                min: self.min_args(),
                max: self.max_args(),
                got: args.len(),
            });
        }
        for (position, value) in args.iter().enumerate() {
            if let Some(parameter) = self.parameter_for(position) {
                parameter.validate(position, value)?;
            }
        }
        Ok(())
    }
}
