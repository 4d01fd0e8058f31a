//! Validation boundary between raw provider payloads and typed models.
//!
//! Rows are decoded one at a time so the error names the offending row, and
//! each decoded row is run through its `validator` rules before it is
//! returned.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use validator::{Validate, ValidationError};

use crate::error::RemoteError;

/// Decode a JSON array of rows into `T`, validating each one.
pub fn decode_rows<T>(table: &'static str, payload: Value) -> Result<Vec<T>, RemoteError>
where
    T: DeserializeOwned + Validate,
{
    let rows = match payload {
        Value::Array(rows) => rows,
        other => {
            return Err(RemoteError::UnexpectedShape {
                table,
                found: kind(&other),
            })
        }
    };

    rows.into_iter()
        .enumerate()
        .map(|(row, value)| decode_row(table, row, value))
        .collect()
}

fn decode_row<T>(table: &'static str, row: usize, value: Value) -> Result<T, RemoteError>
where
    T: DeserializeOwned + Validate,
{
    let decoded: T = serde_json::from_value(value).map_err(|e| RemoteError::Schema {
        table,
        row,
        reason: e.to_string(),
    })?;
    decoded.validate().map_err(|e| RemoteError::Schema {
        table,
        row,
        reason: e.to_string(),
    })?;
    Ok(decoded)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Accept a row id stored as either a JSON string or number.
pub fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Int(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Int(n) => n.to_string(),
    })
}

/// Treat an explicit `null` the same as a missing field.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Row keys are placed into URL paths unencoded, so only ASCII
/// alphanumerics, `-` and `_` are accepted.
pub fn path_safe(value: &str) -> Result<(), ValidationError> {
    let ok = value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if ok {
        Ok(())
    } else {
        Err(ValidationError::new("path_safe"))
    }
}

/// Image URLs interpolated into inline CSS: empty, or an absolute http(s)
/// URL free of quotes, parentheses, backslashes and whitespace.
pub fn css_safe_url(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Ok(());
    }
    let scheme_ok = value.starts_with("https://") || value.starts_with("http://");
    let chars_ok = !value
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, '\'' | '"' | '(' | ')' | '\\' | '<' | '>'));
    if scheme_ok && chars_ok {
        Ok(())
    } else {
        Err(ValidationError::new("css_safe_url"))
    }
}
