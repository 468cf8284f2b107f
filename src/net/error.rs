//! Failure taxonomy for API operations.
//!
//! ERROR HANDLING
//! ==============
//! The client performs no recovery: every failure maps onto [`ApiError`] and
//! rejects up to the page that initiated the call. `user_message` is the
//! best-effort human-readable string pages surface in their alert, preferring
//! a server-supplied validation payload over the status-keyed fallback.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::collections::BTreeMap;

use serde::Deserialize;
use thiserror::Error;

/// Field-level validation messages as returned by the backend on 400s,
/// shaped `{errors: {field: [messages]}}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ValidationErrors {
    #[serde(default)]
    pub errors: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    /// Flatten the per-field messages into a single joined string.
    pub fn flatten(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        for messages in self.errors.values() {
            for message in messages {
                parts.push(message.as_str());
            }
        }
        parts.join(" ")
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Everything that can go wrong with an API operation.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// No usable response: connectivity failure, CORS, or timeout.
    #[error("network error: {0}")]
    Network(String),
    /// 400 carrying field-level validation messages.
    #[error("validation failed: {}", .0.flatten())]
    Validation(ValidationErrors),
    /// 400 without a validation payload.
    #[error("bad request")]
    BadRequest,
    /// 401; the shared interceptor has already cleared the session.
    #[error("unauthorized")]
    Unauthorized,
    /// 404.
    #[error("not found")]
    NotFound,
    /// Any 5xx.
    #[error("server error ({status})")]
    Server { status: u16 },
    /// Non-2xx outside the mapped taxonomy.
    #[error("request failed ({status})")]
    Status { status: u16 },
    /// Could not serialize a request payload.
    #[error("could not encode request body: {0}")]
    Encode(String),
    /// 2xx whose body did not match the expected envelope.
    #[error("could not decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Map a non-success status and (possibly absent) JSON body to an error.
    pub fn from_response(status: u16, body: Option<&serde_json::Value>) -> Self {
        if status == 400 {
            if let Some(body) = body {
                if let Ok(validation) =
                    serde_json::from_value::<ValidationErrors>(body.clone())
                {
                    if !validation.is_empty() {
                        return Self::Validation(validation);
                    }
                }
            }
            return Self::BadRequest;
        }
        match status {
            401 => Self::Unauthorized,
            404 => Self::NotFound,
            500..=599 => Self::Server { status },
            _ => Self::Status { status },
        }
    }

    /// Best-effort human-readable message for alert surfaces.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(v) if !v.is_empty() => v.flatten(),
            Self::Validation(_) | Self::BadRequest => {
                "Invalid input. Please check your data.".to_owned()
            }
            Self::Unauthorized => "Unauthorized. Please login again.".to_owned(),
            Self::NotFound => "Resource not found.".to_owned(),
            Self::Server { .. } => "Server error. Please try again later.".to_owned(),
            Self::Network(_) | Self::Status { .. } | Self::Encode(_) | Self::Decode(_) => {
                "An error occurred. Please try again.".to_owned()
            }
        }
    }
}
