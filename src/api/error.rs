// SPDX-License-Identifier: MPL-2.0
//! Failure normalization for API calls.

use crate::application::port::TransportError;
use serde_json::Value;
use std::fmt;

/// Message used when the server gives no usable `detail`.
pub const FALLBACK_MESSAGE: &str = "API request failed";

/// A failed API call. Every variant carries a human-readable message,
/// available through [`ApiError::message`] and `Display`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    Status { status: u16, message: String },
    /// The exchange never produced a status.
    Transport(String),
    /// A success body was not valid JSON.
    Decode(String),
    /// The request body could not be serialized.
    Encode(String),
}

impl ApiError {
    /// Builds the failure for a non-2xx response, pulling the message out of
    /// a `{"detail": "..."}` body when there is one.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|value| match value.get("detail") {
                Some(Value::String(detail)) => Some(detail.clone()),
                _ => None,
            })
            .unwrap_or_else(|| FALLBACK_MESSAGE.to_string());
        ApiError::Status { status, message }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            ApiError::Status { message, .. }
            | ApiError::Transport(message)
            | ApiError::Decode(message)
            | ApiError::Encode(message) => message,
        }
    }

    /// HTTP status, when the server answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ApiError {}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        ApiError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}
