//! Error types for the shiftstats library.
//!
//! Every request flows through one classifier, so every failure a caller can
//! see is one of the variants below. Nothing is retried or swallowed.

use std::fmt;
use thiserror::Error;

/// The unified error type for shiftstats operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (DNS, refused or reset connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The server answered with a status other than 200.
    #[error("request failed: {0}")]
    Status(#[from] StatusError),

    /// The server answered 200 but did not advertise a JSON body.
    #[error("invalid content-type: {0}")]
    ContentType(#[from] ContentTypeError),

    /// The body was received in full but is not valid JSON.
    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Authentication errors (login response without a ticket).
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Input validation errors (base URL, header values).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

impl Error {
    /// Returns the HTTP status code if this is a status error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Status(err) => Some(err.status),
            _ => None,
        }
    }

    /// Check if the server refused the request for lack of valid credentials.
    pub fn is_auth_error(&self) -> bool {
        match self {
            Error::Status(err) => err.is_auth_error(),
            Error::Auth(_) => true,
            _ => false,
        }
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed (DNS, refused, reset).
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out: {message}")]
    Timeout { message: String },

    /// The response body could not be read or decompressed.
    #[error("failed to read response body: {message}")]
    Body { message: String },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        let message = err.to_string();
        if err.is_timeout() {
            TransportError::Timeout { message }
        } else if err.is_connect() {
            TransportError::Connection { message }
        } else if err.is_body() || err.is_decode() {
            TransportError::Body { message }
        } else {
            TransportError::Http { message }
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(TransportError::from(err))
    }
}

/// A response whose status code was not 200.
///
/// The body of such a response is never read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusError {
    /// HTTP status code.
    pub status: u16,
}

impl StatusError {
    /// Create a new status error.
    pub fn new(status: u16) -> Self {
        Self { status }
    }

    /// Check if this is an authentication or authorization failure.
    pub fn is_auth_error(&self) -> bool {
        self.status == 401 || self.status == 403
    }
}

impl fmt::Display for StatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "status code {}", self.status)
    }
}

impl std::error::Error for StatusError {}

/// A 200 response that was not advertised as `application/json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentTypeError {
    /// The observed content-type header, if any.
    pub content_type: Option<String>,
}

impl ContentTypeError {
    /// Create a new content-type error.
    pub fn new(content_type: Option<String>) -> Self {
        Self { content_type }
    }
}

impl fmt::Display for ContentTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.content_type {
            Some(ref content_type) => write!(
                f,
                "expected application/json but received {}",
                content_type
            ),
            None => write!(f, "expected application/json but received no content-type"),
        }
    }
}

impl std::error::Error for ContentTypeError {}

/// Authentication-related errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Login succeeded at the HTTP level but the body carried no `ticket.hash`.
    #[error("login response did not contain a ticket hash")]
    MissingTicket,
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid API base URL.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },

    /// A value that cannot be sent as an HTTP header.
    #[error("invalid header value for {name}: {reason}")]
    Header { name: String, reason: String },

    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {message}")]
    Client { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_carries_code() {
        let err = Error::from(StatusError::new(404));
        assert_eq!(err.status(), Some(404));
        assert!(!err.is_auth_error());
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn unauthorized_is_auth_error() {
        assert!(Error::from(StatusError::new(401)).is_auth_error());
        assert!(Error::from(StatusError::new(403)).is_auth_error());
        assert!(Error::from(AuthError::MissingTicket).is_auth_error());
    }

    #[test]
    fn content_type_error_reports_observed_type() {
        let err = ContentTypeError::new(Some("text/html; charset=utf-8".to_string()));
        assert_eq!(
            err.to_string(),
            "expected application/json but received text/html; charset=utf-8"
        );

        let missing = ContentTypeError::new(None);
        assert!(missing.to_string().contains("no content-type"));
    }

    #[test]
    fn malformed_wraps_parse_error() {
        let parse = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = Error::from(parse);
        assert!(matches!(err, Error::Malformed(_)));
        assert_eq!(err.status(), None);
    }
}
