//! API error types surfaced to forms and list screens.

use serde::Deserialize;

/// Errors from the backend API, carrying a human-readable message.
///
/// The message is what a form or banner displays verbatim; screens never
/// inspect status codes beyond what these variants already encode.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    #[error("Cannot reach the server at {0}")]
    Connection(String),
    #[error("Request timed out")]
    Timeout,
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("Invalid response from server: {0}")]
    Decode(String),
    #[error("Request failed: {0}")]
    Transport(String),
}

/// Error body shapes the backend is known to produce.
/// Either `{"error": {"code", "message"}}` or a flat `{"message": ...}`.
#[derive(Deserialize)]
struct ErrorBody {
    error: Option<ErrorDetail>,
    message: Option<String>,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

impl ApiError {
    /// Build a `Status` error from a non-success response body.
    ///
    /// Prefers the server's message; falls back to a generic string when the
    /// body is not one of the known shapes.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error.map(|d| d.message).or(b.message))
            .unwrap_or_else(|| format!("Request failed with status {status}"));
        Self::Status { status, message }
    }

    /// Whether this error is an authentication rejection (expired or
    /// revoked token). Drives forced logout on profile refresh.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401, .. })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() {
            let url = err
                .url()
                .map(|u| u.to_string())
                .unwrap_or_else(|| "unknown host".to_string());
            Self::Connection(url)
        } else if err.is_timeout() {
            Self::Timeout
        } else if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}
