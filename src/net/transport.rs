//! HTTP transport seam between the API client and the wire.
//!
//! Browser builds use [`FetchTransport`] over `gloo-net`; tests drive the
//! client through an in-memory mock. The transport only moves bytes — bearer
//! attachment and response interception live in [`crate::net::client`].

use std::future::Future;

use serde_json::Value;

use crate::net::error::ApiError;

/// HTTP method for an API request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// A fully described request, with a path relative to the configured base URL.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    /// Bearer token, filled in by the client before dispatch.
    pub bearer: Option<String>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            bearer: None,
        }
    }

    #[must_use]
    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Raw response: status plus unparsed body text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parse the body as JSON, if there is any to parse.
    pub fn json(&self) -> Option<Value> {
        serde_json::from_str(&self.body).ok()
    }
}

/// Executes one request and returns whatever came back.
///
/// Errors from this trait mean "no usable response" (connectivity, timeout);
/// non-2xx statuses are returned as ordinary [`RawResponse`] values so the
/// shared interceptor can map them.
pub trait Transport {
    fn execute(&self, request: ApiRequest) -> impl Future<Output = Result<RawResponse, ApiError>>;
}

/// Browser transport over the Fetch API.
#[cfg(feature = "hydrate")]
pub struct FetchTransport {
    base_url: String,
    timeout_ms: u32,
}

#[cfg(feature = "hydrate")]
impl FetchTransport {
    pub fn new(base_url: impl Into<String>, timeout_ms: u32) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_ms,
        }
    }
}

#[cfg(feature = "hydrate")]
impl Transport for FetchTransport {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        use futures::future::{Either, select};
        use gloo_net::http::Request as FetchRequest;

        let url = format!("{}{}", self.base_url, request.path);
        let builder = match request.method {
            Method::Get => FetchRequest::get(&url),
            Method::Post => FetchRequest::post(&url),
            Method::Put => FetchRequest::put(&url),
            Method::Delete => FetchRequest::delete(&url),
        };
        let mut builder =
            builder.query(request.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        if let Some(token) = &request.bearer {
            builder = builder.header("Authorization", &format!("Bearer {token}"));
        }

        let ready = match &request.body {
            Some(body) => builder
                .json(body)
                .map_err(|e| ApiError::Network(e.to_string()))?,
            None => builder
                .build()
                .map_err(|e| ApiError::Network(e.to_string()))?,
        };

        let send = std::pin::pin!(ready.send());
        let timeout = std::pin::pin!(gloo_timers::future::TimeoutFuture::new(self.timeout_ms));
        let response = match select(send, timeout).await {
            Either::Left((result, _)) => result.map_err(|e| ApiError::Network(e.to_string()))?,
            Either::Right(_) => return Err(ApiError::Network("request timed out".to_owned())),
        };

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Ok(RawResponse { status, body })
    }
}
