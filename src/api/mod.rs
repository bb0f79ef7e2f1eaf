// SPDX-License-Identifier: MPL-2.0
//! Client for the backend REST API.
//!
//! # Components
//!
//! - [`client`] - `ApiClient`, the request wrapper all calls go through
//! - [`request`] - per-call options and query string encoding
//! - [`cookies`] - `CookieJar`, the source of the CSRF token
//! - [`error`] - `ApiError` and failure message normalization
//!
//! # Usage
//!
//! ```ignore
//! use portal_client::api::{ApiClient, CookieJar, DEFAULT_BASE_PATH};
//! use serde_json::json;
//!
//! let cookies = CookieJar::parse("csrftoken=abc");
//! let api = ApiClient::new(transport, DEFAULT_BASE_PATH, &cookies);
//!
//! let stats = api.get("/dashboard/stats/", [("range", "7d")]).await?;
//! let created = api.post("/contacts/", Some(&json!({"name": "A"}))).await?;
//! ```

pub mod client;
pub mod cookies;
pub mod error;
pub mod request;

pub use client::{ApiClient, DEFAULT_BASE_PATH};
pub use cookies::CookieJar;
pub use error::{ApiError, FALLBACK_MESSAGE};
pub use request::RequestConfig;
