//! Error normalization for API calls.
//!
//! Stores only ever see [`ApiError::payload`]: the message they keep
//! verbatim and hand to the UI.

use thiserror::Error;

/// Marker surfaced when the request never got a response.
pub const NETWORK_ERROR: &str = "Network Error";

/// Message surfaced when a success body could not be read. The parser's
/// own detail goes to the log only.
pub const DECODE_ERROR: &str = "Failed to read server response";

/// Message surfaced after a 401 has torn the session down.
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized! Logging Out...";

/// Errors that can occur while talking to the backend or the image host.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// No response: DNS, connect, TLS, reset.
    #[error("Network error: {detail}")]
    Network { detail: String },

    /// Non-2xx response other than 401.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// 401 from the backend. The session has already been invalidated.
    #[error("Unauthorized")]
    Unauthorized,

    /// 2xx whose body did not match the expected shape.
    #[error("Failed to decode response: {detail}")]
    Decode { detail: String },

    /// Image host misconfigured or refused the file.
    #[error("Upload failed: {message}")]
    Upload { message: String },

    /// The request could not be built (bad base URL, bad path).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    /// The normalized message a store records on rejection.
    pub fn payload(&self) -> String {
        match self {
            ApiError::Network { .. } => NETWORK_ERROR.to_string(),
            ApiError::Http { message, .. } => message.clone(),
            ApiError::Unauthorized => UNAUTHORIZED_MESSAGE.to_string(),
            ApiError::Decode { .. } => DECODE_ERROR.to_string(),
            ApiError::Upload { message } => message.clone(),
            ApiError::InvalidRequest(message) => message.clone(),
        }
    }

    /// Get error type string for logs.
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::Network { .. } => "network_error",
            ApiError::Http { .. } => "http_error",
            ApiError::Unauthorized => "unauthorized",
            ApiError::Decode { .. } => "decode_error",
            ApiError::Upload { .. } => "upload_error",
            ApiError::InvalidRequest(_) => "invalid_request",
        }
    }
}

/// Extract the server's message from an error body.
///
/// Looks for `msg`, then `message`, then `error` (string or `{message}`)
/// in a JSON body; falls back to the raw text, then to a generic line
/// naming the status code.
pub fn normalize_error_body(status: u16, body: &[u8]) -> String {
    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(body) {
        for key in ["msg", "message", "error"] {
            match value.get(key) {
                Some(serde_json::Value::String(s)) if !s.is_empty() => return s.clone(),
                Some(serde_json::Value::Object(inner)) => {
                    if let Some(serde_json::Value::String(s)) = inner.get("message") {
                        return s.clone();
                    }
                }
                _ => {}
            }
        }
    }

    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    if !text.is_empty() {
        return text.to_string();
    }

    format!("Request failed with status code {}", status)
}
