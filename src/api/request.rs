// SPDX-License-Identifier: MPL-2.0
//! Per-call request options and URL helpers.

use crate::domain::{Headers, Method};
use std::fmt::Display;
use url::form_urlencoded;

/// Options for a single call; transient, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestConfig {
    pub method: Method,
    /// Already-encoded JSON body.
    pub body: Option<String>,
    /// Applied after the client defaults, so these win on a name clash.
    pub headers: Headers,
}

impl RequestConfig {
    #[must_use]
    pub fn new(method: Method) -> Self {
        Self {
            method,
            body: None,
            headers: Headers::new(),
        }
    }

    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.set(name, value);
        self
    }
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self::new(Method::Get)
    }
}

/// Encodes `params` in iteration order the way `URLSearchParams` does.
///
/// Returns an empty string for an empty iterator.
pub fn encode_query<I, K, V>(params: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Display,
{
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in params {
        serializer.append_pair(key.as_ref(), &value.to_string());
    }
    serializer.finish()
}

/// Appends `?query` to `endpoint` unless the query is empty.
#[must_use]
pub fn with_query(endpoint: &str, query: &str) -> String {
    if query.is_empty() {
        endpoint.to_string()
    } else {
        format!("{endpoint}?{query}")
    }
}
