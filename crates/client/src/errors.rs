use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

/// Failures seen by API callers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The request never reached the server (connection refused, DNS).
    #[error("Server unreachable: {0}")]
    Unreachable(String),

    /// The server timed out or answered 502/503/504. The request may
    /// still have been applied.
    #[error("Service unavailable: {0}")]
    Transient(String),

    /// The server rejected the request.
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Invalid client configuration: {0}")]
    Configuration(String),
}

impl ClientError {
    pub fn is_transient(&self) -> bool {
        matches!(self, ClientError::Transient(_) | ClientError::Unreachable(_))
    }

    /// True only when the server cannot have seen the request, so even a
    /// non-idempotent call can be sent again.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, ClientError::Unreachable(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::Api { status: 404, .. })
    }

    /// Classifies a non-success response.
    pub(crate) fn from_status(status: StatusCode, message: String) -> Self {
        match status {
            StatusCode::BAD_GATEWAY
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::GATEWAY_TIMEOUT => {
                ClientError::Transient(format!("HTTP {}: {}", status.as_u16(), message))
            }
            _ => ClientError::Api {
                status: status.as_u16(),
                message,
            },
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() {
            ClientError::Unreachable(err.to_string())
        } else if err.is_timeout() || err.is_request() {
            ClientError::Transient(err.to_string())
        } else if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else if err.is_builder() {
            ClientError::Configuration(err.to_string())
        } else {
            ClientError::Transient(err.to_string())
        }
    }
}
