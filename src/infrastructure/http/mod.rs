// SPDX-License-Identifier: MPL-2.0
//! `reqwest` adapter for the [`Transport`] port.
//!
//! Request paths are resolved against a fixed origin. Since every request
//! therefore targets that same origin, the session cookies are attached to
//! all of them, which is what same-origin credential scope amounts to here.

use crate::api::CookieJar;
use crate::application::port::{Transport, TransportError, TransportRequest, TransportResponse};
use crate::domain::Method;
use reqwest::header::COOKIE;
use url::Url;

/// User agent sent with every request.
const USER_AGENT: &str = concat!("PortalClient/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    origin: Url,
    cookie_header: Option<String>,
}

impl ReqwestTransport {
    /// Builds a transport for `origin` (scheme, host and optional port).
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::InvalidRequest`] when `origin` is not an
    /// absolute URL or the HTTP client cannot be initialized.
    pub fn new(origin: &str, cookies: &CookieJar) -> Result<Self, TransportError> {
        let origin = Url::parse(origin)
            .map_err(|e| TransportError::InvalidRequest(format!("invalid origin {origin}: {e}")))?;
        if origin.cannot_be_a_base() {
            return Err(TransportError::InvalidRequest(format!(
                "origin {origin} cannot be used as a base URL"
            )));
        }

        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| TransportError::InvalidRequest(e.to_string()))?;

        Ok(Self {
            client,
            origin,
            cookie_header: cookies.header_value(),
        })
    }

    #[must_use]
    pub fn origin(&self) -> &Url {
        &self.origin
    }

    /// Resolves a request path below the origin, keeping any query string.
    fn resolve(&self, path: &str) -> Result<Url, TransportError> {
        self.origin
            .join(path)
            .map_err(|e| TransportError::InvalidRequest(format!("invalid path {path}: {e}")))
    }
}

fn to_reqwest(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Patch => reqwest::Method::PATCH,
        Method::Delete => reqwest::Method::DELETE,
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        let url = self.resolve(&request.path)?;

        let mut builder = self.client.request(to_reqwest(request.method), url);
        for (name, value) in request.headers.iter() {
            builder = builder.header(name, value);
        }
        if let Some(cookie) = &self.cookie_header {
            builder = builder.header(COOKIE, cookie);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_builder() {
                TransportError::InvalidRequest(e.to_string())
            } else {
                TransportError::Network(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?;

        Ok(TransportResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_relative_origin() {
        let err = ReqwestTransport::new("/api", &CookieJar::new()).unwrap_err();
        assert!(matches!(err, TransportError::InvalidRequest(_)));
    }

    #[test]
    fn resolves_paths_with_query_against_origin() {
        let transport = ReqwestTransport::new("http://127.0.0.1:8000", &CookieJar::new()).unwrap();
        let url = transport.resolve("/api/v1/activities/?page=2").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8000/api/v1/activities/?page=2");
    }

    #[test]
    fn absolute_paths_replace_origin_path() {
        let transport =
            ReqwestTransport::new("https://example.com/app/", &CookieJar::new()).unwrap();
        let url = transport.resolve("/api/v1/faqs/").unwrap();
        assert_eq!(url.as_str(), "https://example.com/api/v1/faqs/");
    }

    #[test]
    fn captures_cookie_header_from_jar() {
        let jar = CookieJar::parse("sessionid=abc; csrftoken=tok");
        let transport = ReqwestTransport::new("http://localhost:8000", &jar).unwrap();
        assert_eq!(
            transport.cookie_header.as_deref(),
            Some("sessionid=abc; csrftoken=tok")
        );
    }

    #[test]
    fn method_mapping_is_one_to_one() {
        assert_eq!(to_reqwest(Method::Patch), reqwest::Method::PATCH);
        assert_eq!(to_reqwest(Method::Delete), reqwest::Method::DELETE);
    }
}
