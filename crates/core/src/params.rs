//! Typed parameter extraction from a `serde_json::Value` object.
//!
//! A missing (or `null`) key falls back to the supplied default. A key that is
//! present with the wrong JSON type is a user mistake and is reported as
//! `HeartfieldError::InvalidParam` instead of being silently ignored.

use serde_json::Value;

use crate::color::Srgb;
use crate::error::HeartfieldError;

fn lookup<'a>(params: &'a Value, name: &str) -> Option<&'a Value> {
    params.get(name).filter(|v| !v.is_null())
}

fn type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn mismatch(name: &str, expected: &str, got: &Value) -> HeartfieldError {
    HeartfieldError::InvalidParam(format!(
        "'{name}' expected {expected}, got {}",
        type_name(got)
    ))
}

/// Extracts an `f64` from `params[name]`; integers are accepted.
pub fn param_f64(params: &Value, name: &str, default: f64) -> Result<f64, HeartfieldError> {
    match lookup(params, name) {
        None => Ok(default),
        Some(v) => v.as_f64().ok_or_else(|| mismatch(name, "number", v)),
    }
}

/// Extracts a non-negative integer from `params[name]`.
pub fn param_usize(params: &Value, name: &str, default: usize) -> Result<usize, HeartfieldError> {
    match lookup(params, name) {
        None => Ok(default),
        Some(v) => v
            .as_u64()
            .and_then(|n| usize::try_from(n).ok())
            .ok_or_else(|| mismatch(name, "non-negative integer", v)),
    }
}

/// Extracts a hex color string from `params[name]`.
pub fn param_color(params: &Value, name: &str, default: Srgb) -> Result<Srgb, HeartfieldError> {
    match lookup(params, name) {
        None => Ok(default),
        Some(Value::String(s)) => Srgb::from_hex(s),
        Some(v) => Err(mismatch(name, "hex color string", v)),
    }
}
