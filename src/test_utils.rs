// SPDX-License-Identifier: MPL-2.0
//! Test helpers shared by unit tests.
//!
//! [`MockTransport`] answers requests from a scripted queue and records every
//! request it receives, so tests can assert on both the outcome and what went
//! over the wire.

use crate::application::port::{Transport, TransportError, TransportRequest, TransportResponse};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;

type Scripted = Result<TransportResponse, TransportError>;

#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    responses: Arc<Mutex<VecDeque<Scripted>>>,
    requests: Arc<Mutex<Vec<TransportRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a response with the given status and body.
    pub fn respond(self, status: u16, body: &str) -> Self {
        self.responses
            .lock()
            .push_back(Ok(TransportResponse::new(status, body)));
        self
    }

    /// Queues a transport-level failure.
    pub fn fail(self, error: TransportError) -> Self {
        self.responses.lock().push_back(Err(error));
        self
    }

    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().clone()
    }

    pub fn last_request(&self) -> Option<TransportRequest> {
        self.requests.lock().last().cloned()
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        self.requests.lock().push(request);
        self.responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("no response scripted".into())))
    }
}
