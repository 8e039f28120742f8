pub mod admin;
pub mod business;
pub mod cash;
pub mod menu;
pub mod order;
pub mod receipt;
pub mod user;

use axum::body::Bytes;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Register buttons may POST with no body at all; an absent body means
/// "all defaults", anything else must be valid JSON.
pub(crate) fn decode_body<T: DeserializeOwned + Default>(body: &Bytes) -> Result<T, AppError> {
    if body.is_empty() {
        return Ok(T::default());
    }
    serde_json::from_slice(body)
        .map_err(|e| AppError::validation(format!("Malformed JSON body: {e}")))
}
