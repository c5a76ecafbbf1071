//! JSON helpers for moving values in and out of text.
//!
//! `deserialize` is the typed counterpart of "create an object from a
//! prototype and copy the parsed members onto it": the target type provides
//! the behavior, the JSON provides the field values.

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors produced by the JSON helpers.
#[derive(Debug, Error)]
pub enum JsonError {
    /// The value could not be written as JSON.
    #[error("failed to serialize value: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The text was not valid JSON, or did not fit the requested type.
    #[error("failed to deserialize value: {0}")]
    Deserialize(#[source] serde_json::Error),
}

/// Serialize `value` to compact JSON text.
///
/// # Errors
///
/// Returns [`JsonError::Serialize`] if the value's `Serialize` impl fails,
/// e.g. for a map with non-string keys.
pub fn serialize<T>(value: &T) -> Result<String, JsonError>
where
    T: Serialize + ?Sized,
{
    serde_json::to_string(value).map_err(JsonError::Serialize)
}

/// Parse `text` into a value of type `T`.
///
/// # Errors
///
/// Returns [`JsonError::Deserialize`] if `text` is malformed or its shape
/// does not match `T`.
pub fn deserialize<T>(text: &str) -> Result<T, JsonError>
where
    T: DeserializeOwned,
{
    serde_json::from_str(text).map_err(JsonError::Deserialize)
}
