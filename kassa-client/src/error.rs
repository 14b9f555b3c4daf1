//! Client error types

use reqwest::StatusCode;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure (connect, TLS, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// 401 from the backend
    #[error("Authentication required: {0}")]
    Unauthorized(String),

    /// 403 from the backend
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// 404 from the backend
    #[error("Not found: {0}")]
    NotFound(String),

    /// 400 from the backend
    #[error("Validation error: {0}")]
    Validation(String),

    /// Any other non-success status
    #[error("Unexpected status {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// Credential store or authorization header could not be prepared;
    /// the request was not sent
    #[error("Credential error: {0}")]
    Credential(String),

    /// Request body could not be built; the request was not sent
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Credential file I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    /// Map a non-success status and its body to an error
    pub fn from_status(status: StatusCode, body: String) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => ClientError::Unauthorized(body),
            StatusCode::FORBIDDEN => ClientError::Forbidden(body),
            StatusCode::NOT_FOUND => ClientError::NotFound(body),
            StatusCode::BAD_REQUEST => ClientError::Validation(body),
            _ => ClientError::Status { status, body },
        }
    }

    /// HTTP status carried by this error, if it came from a response
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Unauthorized(_) => Some(StatusCode::UNAUTHORIZED),
            ClientError::Forbidden(_) => Some(StatusCode::FORBIDDEN),
            ClientError::NotFound(_) => Some(StatusCode::NOT_FOUND),
            ClientError::Validation(_) => Some(StatusCode::BAD_REQUEST),
            ClientError::Status { status, .. } => Some(*status),
            ClientError::Http(e) => e.status(),
            _ => None,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
