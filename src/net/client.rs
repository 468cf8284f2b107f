//! Shared API client: request decoration and response interception.
//!
//! Every outgoing request gets the persisted bearer token attached; every
//! response passes through the same interceptor. A 401 clears the stored
//! token and fires the unauthorized hook (a hard navigation to `/login` in
//! the browser build) exactly once before rejecting. There is no retry, no
//! backoff, and no de-duplication at this layer — callers own their policy,
//! and in practice failures surface immediately to the UI.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::net::envelope::{decode_list, decode_one};
use crate::net::error::ApiError;
use crate::net::session::Session;
use crate::net::transport::{ApiRequest, Method, RawResponse, Transport};

/// Connection settings for the API client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL all resource paths are relative to.
    pub base_url: String,
    pub timeout_ms: u32,
}

impl ApiConfig {
    /// Base URL baked in at build time via `SCHOOL_API_URL`, falling back
    /// to `/api`.
    pub fn from_env() -> Self {
        let base_url = option_env!("SCHOOL_API_URL").unwrap_or("/api").to_owned();
        Self {
            base_url,
            ..Self::default()
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "/api".to_owned(),
            timeout_ms: 10_000,
        }
    }
}

type UnauthorizedHook = Arc<dyn Fn() + Send + Sync>;

/// REST client wiring a transport, a token session, and the shared
/// unauthorized hook together.
pub struct ApiClient<T: Transport> {
    transport: T,
    session: Arc<dyn Session + Send + Sync>,
    on_unauthorized: UnauthorizedHook,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(
        transport: T,
        session: Arc<dyn Session + Send + Sync>,
        on_unauthorized: UnauthorizedHook,
    ) -> Self {
        Self {
            transport,
            session,
            on_unauthorized,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// The token store this client reads from; login flows in the host
    /// application write through it.
    pub fn session(&self) -> &Arc<dyn Session + Send + Sync> {
        &self.session
    }

    /// Dispatch a request with the bearer token attached and run the
    /// response through the shared interceptor.
    async fn dispatch(&self, mut request: ApiRequest) -> Result<RawResponse, ApiError> {
        request.bearer = self.session.token();
        let response = self.transport.execute(request).await?;

        if response.status == 401 {
            self.session.clear_token();
            (self.on_unauthorized)();
            leptos::logging::warn!("api: session rejected (401), token cleared");
            return Err(ApiError::Unauthorized);
        }
        if !response.is_success() {
            return Err(ApiError::from_response(response.status, response.json().as_ref()));
        }
        Ok(response)
    }

    /// Issue a request and return the raw JSON body.
    ///
    /// # Errors
    ///
    /// Rejects with the mapped [`ApiError`] on transport failure or any
    /// non-2xx status; a 2xx with a non-JSON body is a decode error.
    pub async fn send(&self, request: ApiRequest) -> Result<Value, ApiError> {
        let response = self.dispatch(request).await?;
        response
            .json()
            .ok_or_else(|| ApiError::Decode("response body was not JSON".to_owned()))
    }

    /// Issue a request, ignoring whatever body comes back on success.
    pub async fn send_ignoring_body(&self, request: ApiRequest) -> Result<(), ApiError> {
        self.dispatch(request).await.map(drop)
    }

    /// `GET` a single-record envelope.
    pub async fn get_one<R: DeserializeOwned>(
        &self,
        path: &str,
        query: Vec<(String, String)>,
    ) -> Result<R, ApiError> {
        let body = self
            .send(ApiRequest::new(Method::Get, path).with_query(query))
            .await?;
        decode_one(body)
    }

    /// `GET` a list envelope, unwrapping pagination if present.
    pub async fn get_list<R: DeserializeOwned>(
        &self,
        path: &str,
        query: Vec<(String, String)>,
    ) -> Result<Vec<R>, ApiError> {
        let body = self
            .send(ApiRequest::new(Method::Get, path).with_query(query))
            .await?;
        decode_list(body)
    }

    /// `POST` a payload, decoding a single-record envelope.
    pub async fn post_one<R: DeserializeOwned>(
        &self,
        path: &str,
        payload: &impl Serialize,
    ) -> Result<R, ApiError> {
        let body = self
            .send(ApiRequest::new(Method::Post, path).with_body(encode(payload)?))
            .await?;
        decode_one(body)
    }

    /// `POST` a payload, decoding a list envelope.
    pub async fn post_list<R: DeserializeOwned>(
        &self,
        path: &str,
        payload: &impl Serialize,
    ) -> Result<Vec<R>, ApiError> {
        let body = self
            .send(ApiRequest::new(Method::Post, path).with_body(encode(payload)?))
            .await?;
        decode_list(body)
    }

    /// `PUT` a partial payload, decoding the updated record's envelope.
    pub async fn put_one<R: DeserializeOwned>(
        &self,
        path: &str,
        payload: &impl Serialize,
    ) -> Result<R, ApiError> {
        let body = self
            .send(ApiRequest::new(Method::Put, path).with_body(encode(payload)?))
            .await?;
        decode_one(body)
    }

    /// `DELETE`, tolerating an empty success body.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send_ignoring_body(ApiRequest::new(Method::Delete, path))
            .await
    }
}

fn encode(payload: &impl Serialize) -> Result<Value, ApiError> {
    serde_json::to_value(payload).map_err(|e| ApiError::Encode(e.to_string()))
}

#[cfg(feature = "hydrate")]
impl ApiClient<crate::net::transport::FetchTransport> {
    /// Client wired for the browser: fetch transport, `localStorage`
    /// session, and a 401 hook that navigates to `/login`.
    pub fn browser(config: &ApiConfig) -> Self {
        use crate::net::session::BrowserSession;
        use crate::net::transport::FetchTransport;

        Self::new(
            FetchTransport::new(config.base_url.clone(), config.timeout_ms),
            Arc::new(BrowserSession),
            Arc::new(redirect_to_login),
        )
    }
}

/// Hard navigation to the login route, the browser-build unauthorized hook.
#[cfg(feature = "hydrate")]
pub fn redirect_to_login() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/login");
    }
}
