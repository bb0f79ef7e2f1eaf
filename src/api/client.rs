// SPDX-License-Identifier: MPL-2.0
//! The API client.
//!
//! [`ApiClient`] turns a logical call (method, endpoint, optional JSON data,
//! optional query parameters) into a [`TransportRequest`] below the versioned
//! base path, and normalizes the outcome into either the decoded JSON body or
//! an [`ApiError`].
//!
//! Every request carries `Content-Type: application/json` and, when the
//! session has one, the `X-CSRFToken` header. The token is read from the
//! cookie jar once, in [`ApiClient::new`], and never refreshed.

use super::cookies::CookieJar;
use super::error::ApiError;
use super::request::{encode_query, with_query, RequestConfig};
use crate::application::port::{Transport, TransportRequest};
use crate::domain::http::{CONTENT_TYPE, CSRF_HEADER, JSON_CONTENT_TYPE};
use crate::domain::{Headers, Method};
use serde::Serialize;
use serde_json::Value;
use std::fmt::Display;
use tracing::{debug, error};

/// Base path of the versioned REST API.
pub const DEFAULT_BASE_PATH: &str = "/api/v1";

#[derive(Debug)]
pub struct ApiClient<T> {
    transport: T,
    base_path: String,
    csrf_token: Option<String>,
}

impl<T: Transport> ApiClient<T> {
    /// Creates a client and captures the CSRF token from `cookies`.
    pub fn new(transport: T, base_path: impl Into<String>, cookies: &CookieJar) -> Self {
        let base_path = base_path.into().trim_end_matches('/').to_string();
        Self {
            transport,
            base_path,
            csrf_token: cookies.csrf_token(),
        }
    }

    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    #[must_use]
    pub fn csrf_token(&self) -> Option<&str> {
        self.csrf_token.as_deref()
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn default_headers(&self) -> Headers {
        let mut headers = Headers::new().with(CONTENT_TYPE, JSON_CONTENT_TYPE);
        if let Some(token) = &self.csrf_token {
            headers.set(CSRF_HEADER, token.as_str());
        }
        headers
    }

    /// Sends one request and normalizes the result.
    ///
    /// Failures are logged before being returned.
    pub async fn request(&self, endpoint: &str, config: RequestConfig) -> Result<Value, ApiError> {
        let mut headers = self.default_headers();
        headers.merge(&config.headers);

        let request = TransportRequest {
            method: config.method,
            path: format!("{}{}", self.base_path, endpoint),
            headers,
            body: config.body,
        };
        debug!(method = %request.method, path = %request.path, "sending API request");

        let result = self.exchange(request).await;
        if let Err(err) = &result {
            error!(error = %err, status = ?err.status(), "API Error");
        }
        result
    }

    async fn exchange(&self, request: TransportRequest) -> Result<Value, ApiError> {
        let response = self.transport.send(request).await?;

        if !response.is_success() {
            return Err(ApiError::from_status(response.status, &response.body));
        }

        Ok(serde_json::from_str(&response.body)?)
    }

    /// GET `endpoint`, with `params` encoded as a query string in iteration
    /// order. No `?` is appended when `params` is empty.
    pub async fn get<I, K, V>(&self, endpoint: &str, params: I) -> Result<Value, ApiError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Display,
    {
        let url = with_query(endpoint, &encode_query(params));
        self.request(&url, RequestConfig::new(Method::Get)).await
    }

    /// POST `data` (or `{}` when `None`).
    pub async fn post(&self, endpoint: &str, data: Option<&Value>) -> Result<Value, ApiError> {
        self.write_value(Method::Post, endpoint, data).await
    }

    /// PUT `data` (or `{}` when `None`).
    pub async fn put(&self, endpoint: &str, data: Option<&Value>) -> Result<Value, ApiError> {
        self.write_value(Method::Put, endpoint, data).await
    }

    /// PATCH `data` (or `{}` when `None`).
    pub async fn patch(&self, endpoint: &str, data: Option<&Value>) -> Result<Value, ApiError> {
        self.write_value(Method::Patch, endpoint, data).await
    }

    pub async fn delete(&self, endpoint: &str) -> Result<Value, ApiError> {
        self.request(endpoint, RequestConfig::new(Method::Delete)).await
    }

    /// Sends any serializable payload with a write method.
    pub async fn send_json<B>(
        &self,
        method: Method,
        endpoint: &str,
        data: &B,
    ) -> Result<Value, ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.write(method, endpoint, data).await
    }

    async fn write_value(
        &self,
        method: Method,
        endpoint: &str,
        data: Option<&Value>,
    ) -> Result<Value, ApiError> {
        let empty = Value::Object(serde_json::Map::new());
        self.write(method, endpoint, data.unwrap_or(&empty)).await
    }

    async fn write<B>(&self, method: Method, endpoint: &str, data: &B) -> Result<Value, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let body = match serde_json::to_string(data) {
            Ok(body) => body,
            Err(err) => {
                let err = ApiError::Encode(err.to_string());
                error!(error = %err, "API Error");
                return Err(err);
            }
        };
        self.request(endpoint, RequestConfig::new(method).with_body(body))
            .await
    }
}
