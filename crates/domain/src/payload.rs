//! Loosely-typed JSON payloads received on create and update.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ValidationError;

/// A JSON object as supplied by a client.
pub type Payload = serde_json::Map<String, Value>;

/// Accept `value` only when it is a JSON object.
///
/// # Errors
///
/// Returns [`ValidationError::NotAJson`] for any other JSON value.
pub fn from_value(value: Value) -> Result<Payload, ValidationError> {
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(ValidationError::NotAJson),
    }
}

/// Fail unless `key` is present in `payload`.
///
/// # Errors
///
/// Returns [`ValidationError::MissingField`] when the key is absent.
pub fn ensure_present(payload: &Payload, key: &'static str) -> Result<(), ValidationError> {
    if payload.contains_key(key) {
        Ok(())
    } else {
        Err(ValidationError::MissingField(key))
    }
}

/// Read and decode a required key.
///
/// # Errors
///
/// Returns [`ValidationError::MissingField`] when the key is absent and
/// [`ValidationError::InvalidField`] when it does not decode as `T`.
pub fn require<T: DeserializeOwned>(
    payload: &Payload,
    key: &'static str,
) -> Result<T, ValidationError> {
    let value = payload
        .get(key)
        .ok_or(ValidationError::MissingField(key))?;
    decode(key, value.clone())
}

/// Read a required key that refers to another record by id.
///
/// Non-string values are kept as their JSON text; such a reference can never
/// resolve and surfaces as not-found once looked up.
///
/// # Errors
///
/// Returns [`ValidationError::MissingField`] when the key is absent.
pub fn reference(payload: &Payload, key: &'static str) -> Result<String, ValidationError> {
    match payload.get(key) {
        Some(Value::String(id)) => Ok(id.clone()),
        Some(other) => Ok(other.to_string()),
        None => Err(ValidationError::MissingField(key)),
    }
}

/// Decode a single field value.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidField`] naming `key` on type mismatch.
pub fn decode<T: DeserializeOwned>(key: &str, value: Value) -> Result<T, ValidationError> {
    serde_json::from_value(value).map_err(|_| ValidationError::InvalidField(key.to_string()))
}
