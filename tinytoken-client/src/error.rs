//! TinyToken client error types.

use std::error::Error as StdError;
use std::io;

use http::StatusCode;
use thiserror::Error;

/// Result type for TinyToken client operations.
pub type Result<T> = std::result::Result<T, TinyTokenError>;

/// Errors returned by the TinyToken client.
///
/// Every failure of a compression call ends up as one of these variants. The
/// `Display` text is the stable, human-readable message callers match on.
#[derive(Debug, Error)]
pub enum TinyTokenError {
    /// The service answered 2xx but the body had no usable `compressed_text`.
    #[error("Invalid response format")]
    InvalidResponse,

    /// The service rejected the API key (HTTP 401).
    #[error("Invalid API key")]
    InvalidApiKey,

    /// The service rejected the request body (HTTP 400).
    #[error("Invalid request parameters")]
    InvalidRequest,

    /// The service is throttling this caller (HTTP 429).
    #[error("Rate limit exceeded")]
    RateLimited,

    /// The request did not complete within the configured timeout.
    #[error("Request timeout")]
    Timeout,

    /// The connection to the service was refused.
    #[error("Connection error")]
    Connection,

    /// Any other non-success HTTP status.
    #[error("API error: {0}")]
    Api(u16),

    /// Any other failure (DNS, TLS, I/O, client construction).
    #[error("Request failed: {0}")]
    RequestFailed(String),
}

impl TinyTokenError {
    /// Classify a non-success HTTP status.
    pub fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => Self::InvalidApiKey,
            StatusCode::BAD_REQUEST => Self::InvalidRequest,
            StatusCode::TOO_MANY_REQUESTS => Self::RateLimited,
            other => Self::Api(other.as_u16()),
        }
    }

    /// Check if this is a timeout error.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }

    /// Check if this is a refused connection.
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connection)
    }

    /// Check if a later attempt could plausibly succeed.
    ///
    /// The client never retries on its own; this is for callers that wrap it
    /// in their own retry policy.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Timeout | Self::Connection | Self::RateLimited => true,
            Self::Api(status) => *status >= 500,
            _ => false,
        }
    }

    /// Get the HTTP status code if this error came from a response.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::InvalidApiKey => Some(401),
            Self::InvalidRequest => Some(400),
            Self::RateLimited => Some(429),
            Self::Api(status) => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for TinyTokenError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return Self::Timeout;
        }
        if connection_refused(&err) {
            return Self::Connection;
        }
        if let Some(status) = err.status() {
            return Self::from_status(status);
        }
        Self::RequestFailed(error_chain_message(&err))
    }
}

impl From<url::ParseError> for TinyTokenError {
    fn from(err: url::ParseError) -> Self {
        Self::RequestFailed(format!("invalid endpoint URL: {}", err))
    }
}

/// Walk the source chain looking for a refused TCP connect.
fn connection_refused(err: &(dyn StdError + 'static)) -> bool {
    let mut source = Some(err);
    while let Some(e) = source {
        if let Some(io_err) = e.downcast_ref::<io::Error>()
            && io_err.kind() == io::ErrorKind::ConnectionRefused
        {
            return true;
        }
        source = e.source();
    }
    false
}

/// reqwest's top-level message is terse ("error sending request"); include the causes.
fn error_chain_message(err: &(dyn StdError + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(e) = source {
        message.push_str(": ");
        message.push_str(&e.to_string());
        source = e.source();
    }
    message
}
