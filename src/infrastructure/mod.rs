// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`http`]: request transport over `reqwest` (implements [`Transport`])
//!
//! [`Transport`]: crate::application::port::Transport

pub mod http;

pub use http::ReqwestTransport;
