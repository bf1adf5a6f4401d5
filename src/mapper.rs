//! Generic JSON mapping.
//!
//! Decodes a response body into whatever shape the endpoint asks for. UTF-8
//! validation comes first so a binary body never reaches the JSON parser.

use crate::decode_error;
use crate::types::*;
use serde::de::DeserializeOwned;

/// Decode `body` into `T`.
///
/// Errors name `T` so a mismatch can be traced back to the endpoint's model.
pub fn map_response<T: DeserializeOwned>(body: &[u8]) -> MphResult<T> {
    let type_name = std::any::type_name::<T>();

    let text = std::str::from_utf8(body).map_err(|e| {
        MphError::decode(
            type_name,
            format!("response is not valid UTF-8: {}", e),
            None,
            Some(e),
            Some(concat!(file!(), ":", line!())),
        )
    })?;

    serde_json::from_str::<T>(text).map_err(|e| {
        decode_error!(
            type_name,
            format!("Error parsing response object: {}", e),
            Some(text.to_string()),
            e
        )
    })
}
