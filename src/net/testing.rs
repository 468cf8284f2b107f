//! Shared fixtures for API-layer tests: a scripted in-memory transport and
//! a client factory with a counting unauthorized hook.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::net::client::ApiClient;
use crate::net::error::ApiError;
use crate::net::session::{MemorySession, Session};
use crate::net::transport::{ApiRequest, RawResponse, Transport};

/// Transport that records every request and replays scripted responses in
/// order. When the script runs dry it answers with an empty list envelope.
#[derive(Default)]
pub struct MockTransport {
    requests: Mutex<Vec<ApiRequest>>,
    responses: Mutex<Vec<RawResponse>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond_with(status: u16, body: &str) -> Self {
        let transport = Self::default();
        transport.push_response(status, body);
        transport
    }

    pub fn push_response(&self, status: u16, body: &str) {
        if let Ok(mut responses) = self.responses.lock() {
            responses.push(RawResponse {
                status,
                body: body.to_owned(),
            });
        }
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

impl Transport for MockTransport {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request);
        }
        let scripted = self
            .responses
            .lock()
            .ok()
            .and_then(|mut responses| {
                if responses.is_empty() {
                    None
                } else {
                    Some(responses.remove(0))
                }
            });
        Ok(scripted.unwrap_or(RawResponse {
            status: 200,
            body: r#"{"success":true,"data":[]}"#.to_owned(),
        }))
    }
}

/// A client over the given transport plus handles on its session and a
/// counter of unauthorized-hook invocations.
pub struct Harness {
    pub api: Arc<ApiClient<MockTransport>>,
    pub session: Arc<MemorySession>,
    redirects: Arc<AtomicUsize>,
}

impl Harness {
    pub fn new(transport: MockTransport) -> Self {
        Self::with_session(transport, MemorySession::new())
    }

    pub fn with_token(transport: MockTransport, token: &str) -> Self {
        Self::with_session(transport, MemorySession::with_token(token))
    }

    fn with_session(transport: MockTransport, session: MemorySession) -> Self {
        let session = Arc::new(session);
        let redirects = Arc::new(AtomicUsize::new(0));
        let hook_redirects = Arc::clone(&redirects);
        let api = Arc::new(ApiClient::new(
            transport,
            Arc::clone(&session) as Arc<dyn Session + Send + Sync>,
            Arc::new(move || {
                hook_redirects.fetch_add(1, Ordering::SeqCst);
            }),
        ));
        Self {
            api,
            session,
            redirects,
        }
    }

    pub fn redirect_count(&self) -> usize {
        self.redirects.load(Ordering::SeqCst)
    }
}
