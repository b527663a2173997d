//! Client Error Types
//!
//! The failure taxonomy is flat: a call either resolves or fails with an
//! [`ApiError`]. Callers catch it at the call site and decide what to show.

use thiserror::Error;

/// Errors returned by every backend call
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never produced an HTTP response
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status
    #[error("API error {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Status {
        status: u16,
        /// `message` field of the error body, when the backend sent one
        message: Option<String>,
    },

    /// The configured base URL or a request path is not a valid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The response body could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),

    /// Reading a local file for upload failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ApiError {
    /// Build a status error from a raw response body
    pub fn from_status(status: u16, body: &str) -> Self {
        ApiError::Status {
            status,
            message: message_from_body(body),
        }
    }

    /// Server-provided message, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// HTTP status code for status errors
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the backend rejected the session
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }
}

/// Extract the `message` field from a JSON error body.
///
/// Validation errors carry an array of messages; those are joined with "; ".
pub fn message_from_body(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;

    match value.get("message")? {
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        serde_json::Value::Array(items) => {
            let parts: Vec<&str> = items
                .iter()
                .filter_map(|v| v.as_str())
                .filter(|s| !s.trim().is_empty())
                .collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join("; "))
            }
        }
        _ => None,
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

#[cfg(feature = "native")]
impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::Status {
                status: status.as_u16(),
                message: None,
            }
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Result type for backend calls
pub type ApiResult<T> = Result<T, ApiError>;
