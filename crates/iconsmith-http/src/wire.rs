//! Response bodies of the generation endpoint and their classification.

use iconsmith_core::{GeneratedIcon, GenerationFailure};
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;

/// `{ "icons": [...] }`
#[derive(Debug, Deserialize)]
struct GenerateIconsResponse {
    icons: Vec<GeneratedIcon>,
}

/// `{ "error": ... }`
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    error: Value,
}

/// Decode a 2xx body into the icon list, verbatim.
pub fn parse_success(body: &[u8]) -> Result<Vec<GeneratedIcon>, GenerationFailure> {
    serde_json::from_slice::<GenerateIconsResponse>(body)
        .map(|response| response.icons)
        .map_err(|err| {
            GenerationFailure::transport(format!(
                "Invalid response from generation service: {err}"
            ))
        })
}

/// Classify a non-2xx response.
///
/// A body whose `error` field is a non-empty string is an application
/// failure carrying that string; anything else gets the generic status
/// description.
pub fn classify_error(status: StatusCode, body: &[u8]) -> GenerationFailure {
    match structured_message(body) {
        Some(message) => GenerationFailure::application(Some(status.as_u16()), message),
        None => GenerationFailure::transport(format!(
            "Request failed with status code {}",
            status.as_u16()
        )),
    }
}

fn structured_message(body: &[u8]) -> Option<String> {
    let response: ErrorResponse = serde_json::from_slice(body).ok()?;
    match response.error {
        Value::String(message) if !message.is_empty() => Some(message),
        _ => None,
    }
}
