//! Bearer-token persistence.
//!
//! Browser builds keep the token in `localStorage` under the same key the
//! backend's web clients have always used; native builds and tests use an
//! in-memory store.

use std::sync::Mutex;

/// `localStorage` key for the persisted bearer token.
pub const TOKEN_KEY: &str = "authToken";

/// Persistence seam for the bearer token attached to API requests.
pub trait Session {
    /// Current token, if any.
    fn token(&self) -> Option<String>;
    /// Persist a new token.
    fn set_token(&self, token: &str);
    /// Remove the persisted token.
    fn clear_token(&self);
}

/// In-memory token store for native builds and tests.
#[derive(Debug, Default)]
pub struct MemorySession {
    token: Mutex<Option<String>>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            token: Mutex::new(Some(token.to_owned())),
        }
    }
}

impl Session for MemorySession {
    fn token(&self) -> Option<String> {
        match self.token.lock() {
            Ok(guard) => (*guard).clone(),
            Err(_) => None,
        }
    }

    fn set_token(&self, token: &str) {
        if let Ok(mut guard) = self.token.lock() {
            *guard = Some(token.to_owned());
        }
    }

    fn clear_token(&self) {
        if let Ok(mut guard) = self.token.lock() {
            *guard = None;
        }
    }
}

/// Token store over the browser's `localStorage`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSession;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

#[cfg(feature = "hydrate")]
impl Session for BrowserSession {
    fn token(&self) -> Option<String> {
        local_storage().and_then(|s| s.get_item(TOKEN_KEY).ok().flatten())
    }

    fn set_token(&self, token: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }

    fn clear_token(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}
