use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::{ApiKey, SenderId, ValidationError};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("unable to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("invalid JSON response: {0}")]
    Decode(#[source] serde_json::Error),
}

pub fn encode_json_body<T: Serialize + ?Sized>(body: &T) -> Result<String, TransportError> {
    serde_json::to_string(body).map_err(TransportError::Encode)
}

pub fn decode_json_response<T: DeserializeOwned>(json: &str) -> Result<T, TransportError> {
    serde_json::from_str(json).map_err(TransportError::Decode)
}

/// Overwrite whatever the caller put in the `api_key` field.
pub fn inject_api_key(field: &mut String, api_key: &ApiKey) {
    api_key.as_str().clone_into(field);
}

/// Fill an empty sender field from the configured default.
pub fn fill_sender(
    field: &mut String,
    default: Option<&SenderId>,
    name: &'static str,
) -> Result<(), ValidationError> {
    if !field.trim().is_empty() {
        return Ok(());
    }
    match default {
        Some(sender) => {
            sender.as_str().clone_into(field);
            Ok(())
        }
        None => Err(ValidationError::Empty { field: name }),
    }
}
