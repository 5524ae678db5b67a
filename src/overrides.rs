//! Override dictionaries.
//!
//! An override dict is a JSON object mapping field names to values. A config
//! is rebuilt by laying the dict over its current override form and feeding
//! the result back through the derived `Deserialize`, so unknown names and
//! mistyped values are rejected with the path of the offending field.

use crate::error::{KdResult, KeymapDrawerError};
use serde::de::DeserializeOwned;
use serde::{Serialize, Serializer};
use serde_json::{Map, Number, Value};

pub type Overrides = Map<String, Value>;

/// Serializes `value` into override form, reporting the path of any field
/// that has no JSON representation.
pub fn to_overrides<T: Serialize>(value: &T) -> KdResult<Overrides> {
    match serde_path_to_error::serialize(value, serde_json::value::Serializer)? {
        Value::Object(map) => Ok(map),
        other => Err(KeymapDrawerError::validation(
            "<root>",
            format!("expected an object, found {}", describe(&other)),
        )),
    }
}

pub fn from_overrides<T: DeserializeOwned>(overrides: Overrides) -> KdResult<T> {
    Ok(serde_path_to_error::deserialize(Value::Object(overrides))?)
}

/// Lays `patch` over `base`. With `depth` 1, object values one level down are
/// merged entry by entry instead of replaced; anything deeper is replaced.
pub fn merge_overrides(base: &mut Overrides, patch: &Overrides, depth: usize) {
    for (name, value) in patch {
        match (base.get_mut(name), value) {
            (Some(Value::Object(inner)), Value::Object(inner_patch)) if depth > 0 => {
                merge_overrides(inner, inner_patch, depth - 1);
            }
            _ => {
                base.insert(name.clone(), value.clone());
            }
        }
    }
}

/// Reads an environment variable's text as the same JSON type as `template`,
/// the field's current value.
pub fn parse_env_value(field: &str, template: &Value, raw: &str) -> KdResult<Value> {
    let trimmed = raw.trim();
    let parsed = match template {
        Value::Bool(_) => match trimmed.to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Some(Value::Bool(true)),
            "false" | "0" | "no" | "off" => Some(Value::Bool(false)),
            _ => None,
        },
        Value::Number(n) if n.is_f64() => trimmed
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number),
        Value::Number(_) => trimmed.parse::<u64>().ok().map(Value::from),
        Value::String(_) => Some(Value::String(raw.to_string())),
        Value::Object(_) => serde_json::from_str::<Value>(raw)
            .ok()
            .filter(Value::is_object),
        _ => None,
    };

    parsed.ok_or_else(|| {
        KeymapDrawerError::validation(
            field,
            format!("cannot read {:?} as {}", raw, describe(template)),
        )
    })
}

/// Serializes a float, refusing NaN and the infinities, which JSON cannot hold.
pub fn finite_f64<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if !value.is_finite() {
        return Err(serde::ser::Error::custom(format!(
            "non-finite number {} cannot be written",
            value
        )));
    }
    serializer.serialize_f64(*value)
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(n) if n.is_f64() => "a number",
        Value::Number(_) => "an unsigned integer",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
