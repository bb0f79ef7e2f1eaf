// SPDX-License-Identifier: MPL-2.0
//! Transport port definition.
//!
//! The [`Transport`] trait is the single seam between the API client and the
//! network. The client builds a fully resolved [`TransportRequest`] (method,
//! path below the origin, merged headers, encoded body) and the transport
//! returns the raw status and body text. Status interpretation and JSON
//! decoding stay in the client.

use crate::domain::{Headers, Method};
use std::fmt;
use std::future::Future;

// =============================================================================
// TransportError
// =============================================================================

/// The exchange itself failed; no status was received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Connection could not be established or was dropped.
    Network(String),
    /// The request could not be built (bad URL, bad header value).
    InvalidRequest(String),
    /// A status arrived but the body could not be read.
    Body(String),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Network(msg) => write!(f, "network error: {msg}"),
            TransportError::InvalidRequest(msg) => write!(f, "invalid request: {msg}"),
            TransportError::Body(msg) => write!(f, "failed to read response body: {msg}"),
        }
    }
}

impl std::error::Error for TransportError {}

// =============================================================================
// Request / Response
// =============================================================================

/// A request ready to be put on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportRequest {
    pub method: Method,
    /// Absolute path (with query string) below the transport's origin.
    pub path: String,
    pub headers: Headers,
    pub body: Option<String>,
}

/// Raw outcome of an exchange that produced a status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Mirrors the browser `Response.ok` flag: any 2xx status.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

// =============================================================================
// Transport
// =============================================================================

/// Sends requests and hands back raw responses.
///
/// Implementations attach session credentials themselves; the client never
/// sees cookies beyond the CSRF token it reads at construction.
pub trait Transport: Send + Sync {
    fn send(
        &self,
        request: TransportRequest,
    ) -> impl Future<Output = Result<TransportResponse, TransportError>> + Send;
}
