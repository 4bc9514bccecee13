use calx_value::Value;
use rustc_hash::FxHashMap;

/// `true`, `false`, `null`, `PI` and `E`.
pub fn standard_constants() -> FxHashMap<String, Value> {
    [
        ("true", Value::Boolean(true)),
        ("false", Value::Boolean(false)),
        ("null", Value::Null),
        ("PI", Value::Number(std::f64::consts::PI)),
        ("E", Value::Number(std::f64::consts::E)),
    ]
    .into_iter()
    .map(|(name, value)| (name.to_string(), value))
    .collect()
}
