//! API key issued by the key endpoint
//!
//! A [`Credential`] can only be produced by [`Credential::from_body`], which
//! guarantees it is non-empty and trimmed. The booking stage takes one by
//! reference, so a failed key fetch can never reach it.

use serde_json::{Map, Value};

use crate::error::{ClientError, ClientResult};

/// Trimmed, non-empty API key
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Extract a key from the key endpoint's response body.
    ///
    /// Accepted shapes, in order:
    /// 1. a JSON string
    /// 2. a JSON object with a string `key`, else a string `apiKey`
    /// 3. a body that is not JSON at all, used as plain text
    ///
    /// Any other JSON value yields no key.
    pub fn from_body(body: &str) -> ClientResult<Self> {
        let raw = match serde_json::from_str::<Value>(body) {
            Ok(Value::String(key)) => key,
            Ok(Value::Object(fields)) => key_field(&fields).unwrap_or_default().to_string(),
            Ok(_) => String::new(),
            Err(_) => body.to_string(),
        };

        let key = raw.trim();
        if key.is_empty() {
            return Err(ClientError::InvalidCredential);
        }
        Ok(Self(key.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// `key` wins over `apiKey` whenever it is a string, even an empty one
fn key_field(fields: &Map<String, Value>) -> Option<&str> {
    fields
        .get("key")
        .and_then(Value::as_str)
        .or_else(|| fields.get("apiKey").and_then(Value::as_str))
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential(***)")
    }
}
