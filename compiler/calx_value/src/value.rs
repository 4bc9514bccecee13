//! Values and their types.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::EvalError;

/// A runtime value.
///
/// Compound values are reference counted so cloning a value (which the
/// evaluator does for every lookup) never copies element data.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Number(f64),
    String(Arc<str>),
    Boolean(bool),
    Array(Arc<[Value]>),
    Structure(Arc<BTreeMap<String, Value>>),
    Null,
    /// An evaluation error captured as an argument value.
    Failure(Arc<EvalError>),
}

impl Value {
    pub fn string(s: impl Into<Arc<str>>) -> Self {
        Value::String(s.into())
    }

    pub fn array(items: impl Into<Arc<[Value]>>) -> Self {
        Value::Array(items.into())
    }

    pub fn structure<K: Into<String>>(fields: impl IntoIterator<Item = (K, Value)>) -> Self {
        Value::Structure(Arc::new(
            fields.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        ))
    }

    pub fn failure(error: EvalError) -> Self {
        Value::Failure(Arc::new(error))
    }

    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Number(_) => ValueType::Number,
            Value::String(_) => ValueType::String,
            Value::Boolean(_) => ValueType::Boolean,
            Value::Array(_) => ValueType::Array,
            Value::Structure(_) => ValueType::Structure,
            Value::Null => ValueType::Null,
            Value::Failure(_) => ValueType::Failure,
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Value::Failure(_))
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_structure(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Structure(fields) => Some(fields),
            _ => None,
        }
    }

    pub fn as_failure(&self) -> Option<&Arc<EvalError>> {
        match self {
            Value::Failure(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::String(s) => f.write_str(s),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Structure(fields) => {
                f.write_str("{")?;
                for (i, (name, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{name}: {value}")?;
                }
                f.write_str("}")
            }
            Value::Null => f.write_str("null"),
            Value::Failure(err) => write!(f, "<failure: {err}>"),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s.into())
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items.into())
    }
}

/// The runtime type tag of a [`Value`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueType {
    Number,
    String,
    Boolean,
    Array,
    Structure,
    Null,
    Failure,
}

impl ValueType {
    pub const fn name(self) -> &'static str {
        match self {
            ValueType::Number => "number",
            ValueType::String => "string",
            ValueType::Boolean => "boolean",
            ValueType::Array => "array",
            ValueType::Structure => "structure",
            ValueType::Null => "null",
            ValueType::Failure => "failure",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The declared type of a parameter.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ParamType {
    /// Any non-null value.
    Any,
    Number,
    String,
    Boolean,
    Array,
    Structure,
}

impl ParamType {
    /// Whether a (non-null, non-failure) value of type `ty` fits.
    pub fn accepts(self, ty: ValueType) -> bool {
        match (self, ty) {
            (_, ValueType::Null | ValueType::Failure) => false,
            (ParamType::Any, _)
            | (ParamType::Number, ValueType::Number)
            | (ParamType::String, ValueType::String)
            | (ParamType::Boolean, ValueType::Boolean)
            | (ParamType::Array, ValueType::Array)
            | (ParamType::Structure, ValueType::Structure) => true,
            _ => false,
        }
    }

    /// The value type a non-`Any` parameter type corresponds to.
    pub const fn value_type(self) -> Option<ValueType> {
        match self {
            ParamType::Any => None,
            ParamType::Number => Some(ValueType::Number),
            ParamType::String => Some(ValueType::String),
            ParamType::Boolean => Some(ValueType::Boolean),
            ParamType::Array => Some(ValueType::Array),
            ParamType::Structure => Some(ValueType::Structure),
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value_type() {
            Some(ty) => f.write_str(ty.name()),
            None => f.write_str("any"),
        }
    }
}

#[cfg(test)]
mod tests;
