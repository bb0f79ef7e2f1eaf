// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! Infrastructure adapters implement these traits; the API client only ever
//! talks to the trait, which is what lets tests swap in an in-memory
//! transport.
//!
//! # Available Ports
//!
//! - [`transport`]: request/response exchange with the backend

pub mod transport;

pub use transport::{Transport, TransportError, TransportRequest, TransportResponse};
