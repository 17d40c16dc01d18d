use std::fmt;

use serde::Deserialize;

/// Errors that can occur while talking to the Bible API.
/// Every failure is surfaced as-is; nothing here is retried.
#[derive(Debug)]
pub enum ApiError {
    /// Base URL cannot be used to build endpoint URLs.
    Config(String),
    /// Network-level failure (DNS, connection refused, body read).
    Network(String),
    /// API answered with a non-2xx status.
    Api { status: u16, message: String },
    /// Response body was not the expected JSON shape.
    Parse(String),
}

impl ApiError {
    /// True when the backend reported that the resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Api { status: 404, .. })
    }

    /// Builds an `Api` error from a failed response body.
    /// The backend wraps its messages as `{"detail": "..."}`; anything else is kept verbatim.
    pub(crate) fn from_response(status: u16, body: &str) -> Self {
        #[derive(Deserialize)]
        struct ErrorBody {
            detail: serde_json::Value,
        }

        let message = match serde_json::from_str::<ErrorBody>(body) {
            Ok(ErrorBody {
                detail: serde_json::Value::String(detail),
            }) => detail,
            // Validation errors carry a structured detail list
            Ok(ErrorBody { detail }) => detail.to_string(),
            Err(_) if body.trim().is_empty() => "empty response body".to_string(),
            Err(_) => body.to_string(),
        };
        ApiError::Api { status, message }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Config(msg) => write!(f, "config error: {msg}"),
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ApiError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}
