use serde_json::{Map, Value};

use crate::models::error::DecodingError;

pub(crate) const ROOT_FIELD: &str = "<root>";

pub(crate) const fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Joins a parent field path and a child key, e.g. `env` + `witness`.
pub(crate) fn field_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}

fn invalid_type(field: &str, expected: &'static str, found: &Value) -> DecodingError {
    DecodingError::InvalidType {
        field: field.to_string(),
        expected,
        found: json_type(found),
    }
}

pub(crate) fn as_object<'a>(
    value: &'a Value,
    field: &str,
) -> Result<&'a Map<String, Value>, DecodingError> {
    let field = if field.is_empty() { ROOT_FIELD } else { field };
    value
        .as_object()
        .ok_or_else(|| invalid_type(field, "object", value))
}

pub(crate) fn required<'a>(
    object: &'a Map<String, Value>,
    parent: &str,
    key: &str,
) -> Result<&'a Value, DecodingError> {
    object
        .get(key)
        .ok_or_else(|| DecodingError::MissingField(field_path(parent, key)))
}

pub(crate) fn as_array<'a>(value: &'a Value, field: &str) -> Result<&'a [Value], DecodingError> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| invalid_type(field, "array", value))
}

pub(crate) fn as_str<'a>(value: &'a Value, field: &str) -> Result<&'a str, DecodingError> {
    value
        .as_str()
        .ok_or_else(|| invalid_type(field, "string", value))
}

pub(crate) fn required_string(
    object: &Map<String, Value>,
    parent: &str,
    key: &str,
) -> Result<String, DecodingError> {
    let value = required(object, parent, key)?;
    Ok(as_str(value, &field_path(parent, key))?.to_string())
}

/// Reads a string that falls back to `""` when the key is absent.
/// An explicit `null` is rejected.
pub(crate) fn optional_string(
    object: &Map<String, Value>,
    parent: &str,
    key: &str,
) -> Result<String, DecodingError> {
    object
        .get(key)
        .map(|value| as_str(value, &field_path(parent, key)).map(ToString::to_string))
        .transpose()
        .map(Option::unwrap_or_default)
}

/// Reads a boolean that falls back to `false` when the key is absent.
/// An explicit `null` is rejected.
pub(crate) fn optional_bool(
    object: &Map<String, Value>,
    parent: &str,
    key: &str,
) -> Result<bool, DecodingError> {
    object
        .get(key)
        .map(|value| {
            value
                .as_bool()
                .ok_or_else(|| invalid_type(&field_path(parent, key), "boolean", value))
        })
        .transpose()
        .map(Option::unwrap_or_default)
}
