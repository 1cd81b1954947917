//! Error type shared by every REST helper.
//!
//! ERROR HANDLING
//! ==============
//! Views never see transport details directly. They call `user_message` with
//! a per-screen fallback so backend-provided messages win when present.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

/// Failure of a single API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS).
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("request failed: {status}")]
    Status { status: u16, message: Option<String> },

    /// The response body did not match the expected shape.
    #[error("response parse failed: {0}")]
    Decode(String),

    /// Browser-only call attempted during SSR or in a native build.
    #[error("not available on server")]
    Unavailable,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl ApiError {
    /// Build a status error, pulling `{"message": ...}` out of the body when
    /// the backend sent one.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .map(|m| m.trim().to_owned())
            .filter(|m| !m.is_empty());
        Self::Status { status, message }
    }

    /// Message suitable for display. Server-provided text wins over `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status { message: Some(message), .. } => message.clone(),
            _ => fallback.to_owned(),
        }
    }

    /// HTTP status when the server responded at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
