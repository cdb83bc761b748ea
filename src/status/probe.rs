//! The single status request.
//!
//! # Responsibilities
//! - GET the endpoint with no body, headers, or query
//! - Reject non-2xx without reading the body
//! - Decode `{"message": "..."}`, ignoring any other field
//! - A repeated key resolves to its last occurrence
//!
//! Every failure cause stays distinguishable here so it can be logged; the
//! controller collapses them into one user-visible error.

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use url::Url;

/// Expected success body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HelloResponse {
    pub message: String,
}

/// Why the request did not produce a message.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// Connection, DNS, or body read failure.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered with a non-2xx status.
    #[error("server responded with status {0}")]
    Status(StatusCode),

    /// Body was not JSON with a text `message` field.
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ProbeError {
    /// Static label for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ProbeError::Transport(_) => "transport",
            ProbeError::Status(_) => "status",
            ProbeError::Decode(_) => "decode",
        }
    }
}

/// Issue the GET and decode the response.
pub async fn fetch_message(client: &Client, endpoint: &Url) -> Result<HelloResponse, ProbeError> {
    let response = client.get(endpoint.clone()).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(ProbeError::Status(status));
    }

    let body = response.bytes().await?;
    Ok(decode_body(&body)?)
}

/// Decode a success body.
///
/// Parsing goes through [`Value`] first so duplicate keys collapse to the
/// last value instead of failing the typed decode.
pub fn decode_body(body: &[u8]) -> Result<HelloResponse, serde_json::Error> {
    let value: Value = serde_json::from_slice(body)?;
    serde_json::from_value(value)
}
