//! Input resolution — pick the dispatch path from the invocation payload.
//!
//! The payload carries either `file_bytes` (base64 or raw) or `file_url`.
//! `file_bytes` wins when both are present; a payload with neither is a
//! configuration error caught before anything touches the network.

use base64::{engine::general_purpose::STANDARD, Engine};
use docsmith_core::AgentError;
use serde_json::Value;

/// The two dispatch paths accepted by the extraction agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionInput {
    Bytes(Vec<u8>),
    Url(String),
}

/// Resolve the invocation payload into a dispatch path.
///
/// Pure function of the payload shape; no side effects. A `file_bytes` field
/// that is present but `null` falls through to `file_url`.
pub fn resolve(payload: &Value) -> Result<ExtractionInput, AgentError> {
    if let Some(bytes_field) = payload.get("file_bytes").filter(|v| !v.is_null()) {
        return Ok(ExtractionInput::Bytes(decode_bytes(bytes_field)?));
    }
    if let Some(url) = payload.get("file_url").and_then(Value::as_str) {
        return Ok(ExtractionInput::Url(url.to_string()));
    }
    Err(AgentError::config(
        "Either 'file_bytes' or 'file_url' must be provided",
    ))
}

/// Decode the `file_bytes` field.
///
/// Accepts a base64 string (the declared contract), a non-base64 string
/// (passed through as its literal bytes, matching permissive upstream
/// behavior), or a JSON array of byte values.
fn decode_bytes(value: &Value) -> Result<Vec<u8>, AgentError> {
    match value {
        Value::String(s) => Ok(STANDARD
            .decode(s.as_bytes())
            .unwrap_or_else(|_| s.clone().into_bytes())),
        Value::Array(items) => items
            .iter()
            .map(|v| {
                v.as_u64()
                    .filter(|n| *n <= u8::MAX as u64)
                    .map(|n| n as u8)
                    .ok_or_else(|| {
                        AgentError::config("'file_bytes' array must contain byte values")
                    })
            })
            .collect(),
        _ => Err(AgentError::config(
            "'file_bytes' must be a base64 string or byte array",
        )),
    }
}
