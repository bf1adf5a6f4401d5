//! HTTP transport.
//!
//! The client talks to the network only through [`Transport`], so tests (or
//! callers with unusual needs) can substitute their own. [`ReqwestTransport`]
//! is the default.

use crate::config::REQUEST_TIMEOUT;
use crate::types::*;
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{header, Client as HttpClient};
use std::time::Duration;

/// A fully composed request, ready to go on the wire
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub timeout: Duration,
}

/// Status and body of whatever the server answered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Bytes,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// What the transport layer produced: a response, an error, or both
/// (a status line arrived but reading the body failed).
#[derive(Debug, Clone)]
pub struct TransportOutcome {
    pub response: Option<RawResponse>,
    pub error: Option<MphError>,
}

impl TransportOutcome {
    pub fn response(response: RawResponse) -> Self {
        Self {
            response: Some(response),
            error: None,
        }
    }

    pub fn failed(error: MphError) -> Self {
        Self {
            response: None,
            error: Some(error),
        }
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue the request once. Must not retry.
    async fn execute(&self, request: HttpRequest) -> TransportOutcome;
}

/// Transport backed by one shared `reqwest::Client`
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    http_client: HttpClient,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        let http_client = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|e| {
                // The timeout is also set on every request
                log::warn!("Falling back to a default HTTP client: {}", e);
                HttpClient::new()
            });

        Self { http_client }
    }

    /// Wrap an already configured client
    pub fn with_client(http_client: HttpClient) -> Self {
        Self { http_client }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> TransportOutcome {
        let url = match url::Url::parse(&request.url) {
            Ok(url) => url,
            Err(e) => {
                return TransportOutcome::failed(MphError::transport(
                    TransportErrorKind::InvalidUrl,
                    None,
                    format!("invalid request url: {}", e),
                    Some(e),
                    Some(concat!(file!(), ":", line!())),
                ))
            }
        };

        let mut builder = self
            .http_client
            .request(request.method.into(), url)
            .timeout(request.timeout)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::CACHE_CONTROL, "no-cache")
            .header(header::PRAGMA, "no-cache");

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => return TransportOutcome::failed(e.into()),
        };

        let status = response.status().as_u16();
        match response.bytes().await {
            Ok(body) => TransportOutcome::response(RawResponse { status, body }),
            Err(e) => TransportOutcome {
                response: Some(RawResponse::new(status, Bytes::new())),
                error: Some(e.into()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_url_fails_without_sending() {
        let transport = ReqwestTransport::new();
        let request = HttpRequest {
            method: HttpMethod::Get,
            url: "not a url api_key=secret".to_string(),
            headers: Vec::new(),
            timeout: REQUEST_TIMEOUT,
        };

        let outcome = tokio_test::block_on(transport.execute(request));
        assert!(outcome.response.is_none());
        let error = outcome.error.unwrap();
        assert_eq!(error.transport_kind(), Some(TransportErrorKind::InvalidUrl));
        assert!(!error.to_string().contains("secret"));
    }

    #[test]
    fn test_outcome_constructors() {
        let ok = TransportOutcome::response(RawResponse::new(200, "{}"));
        assert_eq!(ok.response.unwrap().body, Bytes::from_static(b"{}"));
        assert!(ok.error.is_none());

        let failed = TransportOutcome::failed(MphError::status(404));
        assert!(failed.response.is_none());
        assert_eq!(failed.error.unwrap().http_status(), Some(404));
    }
}
