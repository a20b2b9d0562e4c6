// API client errors

use reqwest::StatusCode;
use serde_json::Value;
use std::io;

/// Category of a failed API call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// HTTP 401
    Authentication,
    /// HTTP 403
    AccessDenied,
    /// HTTP 404
    NotFound,
    /// HTTP 429
    RateLimited,
    /// Any other 4xx/5xx status
    Api,
    /// DNS failure, refused or reset connection
    Connection,
    /// The request exceeded the configured timeout
    Timeout,
    /// Other transport or decoding failure
    Request,
    /// Failure outside the HTTP layer
    Unexpected,
}

/// Error returned by every client call
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    kind: ErrorKind,
    status: Option<u16>,
    message: String,
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// HTTP status, for errors produced by an error response
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Map an error response to its fixed message
    ///
    /// `body` is the raw response text and `http_error` the transport
    /// library's description of the status, used when the body carries no
    /// usable `message`.
    pub fn from_status(status: StatusCode, body: &str, http_error: &str) -> Self {
        let (kind, message) = match status {
            StatusCode::UNAUTHORIZED => (
                ErrorKind::Authentication,
                "Authentication failed. Please check your API key.".to_string(),
            ),
            StatusCode::FORBIDDEN => (
                ErrorKind::AccessDenied,
                "Access denied. You do not have permission to perform this action.".to_string(),
            ),
            StatusCode::NOT_FOUND => (
                ErrorKind::NotFound,
                "The requested resource was not found.".to_string(),
            ),
            StatusCode::TOO_MANY_REQUESTS => (
                ErrorKind::RateLimited,
                "API rate limit exceeded. Please try again later.".to_string(),
            ),
            _ => (
                ErrorKind::Api,
                format!(
                    "API error ({}): {}",
                    status.as_u16(),
                    body_message(body).unwrap_or_else(|| http_error.to_string())
                ),
            ),
        };

        Self {
            kind,
            status: Some(status.as_u16()),
            message,
        }
    }

    /// Classify a transport-level failure
    pub fn from_reqwest(err: &reqwest::Error) -> Self {
        if err.is_connect() {
            Self::connection()
        } else if err.is_timeout() {
            Self::timeout()
        } else if is_connection_dropped(err) {
            Self::connection()
        } else {
            Self::new(ErrorKind::Request, format!("Request error: {}", err))
        }
    }

    pub fn connection() -> Self {
        Self::new(
            ErrorKind::Connection,
            "Connection error. Please check your network connection.",
        )
    }

    pub fn timeout() -> Self {
        Self::new(
            ErrorKind::Timeout,
            "Request timed out. Please try again later.",
        )
    }

    pub fn unexpected(detail: impl std::fmt::Display) -> Self {
        Self::new(ErrorKind::Unexpected, format!("Unexpected error: {}", detail))
    }

    fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            status: None,
            message: message.into(),
        }
    }
}

/// True when the peer closed or reset an established connection
fn is_connection_dropped(err: &reqwest::Error) -> bool {
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        if let Some(io_err) = cause.downcast_ref::<io::Error>() {
            if matches!(
                io_err.kind(),
                io::ErrorKind::ConnectionReset
                    | io::ErrorKind::ConnectionAborted
                    | io::ErrorKind::BrokenPipe
                    | io::ErrorKind::UnexpectedEof
            ) {
                return true;
            }
        }
        if let Some(hyper_err) = cause.downcast_ref::<hyper::Error>() {
            if hyper_err.is_closed() || hyper_err.is_incomplete_message() || hyper_err.is_canceled() {
                return true;
            }
        }
        source = cause.source();
    }
    false
}

/// `message` field of a JSON error body. Non-string values are rendered as JSON.
fn body_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("message")? {
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
