// SPDX-License-Identifier: MPL-2.0
//! Domain types shared across layers.
//!
//! Nothing in here depends on a concrete HTTP library or on the UI layer, so
//! ports and adapters can exchange these values freely.

pub mod http;

pub use http::{Headers, Method};
