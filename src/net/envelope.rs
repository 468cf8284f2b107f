//! Response envelopes.
//!
//! Every backend response arrives wrapped in `{success, data, message?}`.
//! List payloads additionally come in two shapes — a flat array, or a
//! Laravel-style pagination wrapper with the items nested one level down —
//! and the client unwraps exactly one level to tolerate both.

#[cfg(test)]
#[path = "envelope_test.rs"]
mod envelope_test;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::net::error::ApiError;

/// Standard `{success, data, message?}` wrapper.
#[derive(Clone, Debug, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: T,
    #[serde(default)]
    pub message: Option<String>,
}

/// List payload: flat, or nested inside pagination.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum ListData<T> {
    Flat(Vec<T>),
    Paginated(Page<T>),
}

/// Pagination wrapper; only the fields the client reads.
#[derive(Clone, Debug, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub current_page: Option<u64>,
    #[serde(default)]
    pub per_page: Option<u64>,
    #[serde(default)]
    pub total: Option<u64>,
}

impl<T> ListData<T> {
    /// Unwrap one level of nesting into the bare items.
    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Flat(items) => items,
            Self::Paginated(page) => page.data,
        }
    }
}

/// Decode a single-record envelope from a response body.
pub fn decode_one<T: DeserializeOwned>(body: Value) -> Result<T, ApiError> {
    let envelope: Envelope<T> =
        serde_json::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(envelope.data)
}

/// Decode a list envelope, tolerating flat and paginated shapes.
pub fn decode_list<T: DeserializeOwned>(body: Value) -> Result<Vec<T>, ApiError> {
    let envelope: Envelope<ListData<T>> =
        serde_json::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(envelope.data.into_items())
}
