// SPDX-License-Identifier: MPL-2.0
//! Application layer - ports between the client logic and the outside world.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - The API client and UI stores use application layer ports
//!
//! # Example
//!
//! ```ignore
//! use portal_client::api::ApiClient;
//! use portal_client::infrastructure::ReqwestTransport;
//!
//! // Infrastructure implements the port trait
//! let transport = ReqwestTransport::new(origin, &cookies)?;
//! let client = ApiClient::new(transport, "/api/v1", &cookies);
//! ```

pub mod port;
