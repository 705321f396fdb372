//! Error taxonomy shared by every network-facing operation.
//!
//! Every public operation returns [`Result<T>`]. Failures are described by an
//! [`Error`] whose [`ErrorKind`] is one of a closed set of categories:
//!
//! | Kind | Trigger |
//! |---|---|
//! | `NOT_FOUND` | HTTP 404 |
//! | `RATE_LIMITED` | HTTP 429 |
//! | `SERVER_ERROR` | any other non-2xx status |
//! | `NETWORK_ERROR` | the transport failed before a response was obtained |
//! | `PARSE_ERROR` | the body was not JSON, or did not match the expected shape |

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result alias used by every client operation.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Boxed underlying failure kept for diagnostics.
pub type Cause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Category of a failed request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    NotFound,
    RateLimited,
    ServerError,
    NetworkError,
    ParseError,
}

impl ErrorKind {
    /// Returns the stable token for this kind (e.g. `NOT_FOUND`)
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::RateLimited => "RATE_LIMITED",
            ErrorKind::ServerError => "SERVER_ERROR",
            ErrorKind::NetworkError => "NETWORK_ERROR",
            ErrorKind::ParseError => "PARSE_ERROR",
        }
    }

    /// Classify a non-success HTTP status code
    pub fn from_status(status: u16) -> Self {
        match status {
            404 => ErrorKind::NotFound,
            429 => ErrorKind::RateLimited,
            _ => ErrorKind::ServerError,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed Open Library request.
///
/// `cause` holds the transport, decode or validation failure behind the error and is
/// reachable through [`std::error::Error::source`].
#[derive(Debug, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    http_status: Option<u16>,
    #[source]
    cause: Option<Cause>,
}

impl Error {
    /// Create an error with no status and no cause
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            http_status: None,
            cause: None,
        }
    }

    /// Build the error for a non-success HTTP status.
    ///
    /// `url` is only used in the `NOT_FOUND` message.
    pub fn from_status(status: u16, url: &str) -> Self {
        let kind = ErrorKind::from_status(status);
        let message = match kind {
            ErrorKind::NotFound => format!("Not found: {}", url),
            ErrorKind::RateLimited => "Rate limited by Open Library".to_string(),
            _ => "Server error occurred".to_string(),
        };

        Self::new(kind, message).with_status(status)
    }

    /// Transport failure before any response was received
    pub fn network(cause: impl Into<Cause>) -> Self {
        Self::new(ErrorKind::NetworkError, "Network error occurred").with_cause(cause)
    }

    /// Response body could not be decoded as JSON
    pub fn invalid_json(cause: impl Into<Cause>) -> Self {
        Self::new(ErrorKind::ParseError, "Failed to parse JSON response").with_cause(cause)
    }

    /// Decoded JSON did not match the expected shape
    pub fn schema_mismatch(cause: impl Into<Cause>) -> Self {
        Self::new(ErrorKind::ParseError, "Response did not match expected schema")
            .with_cause(cause)
    }

    /// Attach an HTTP status code
    pub fn with_status(mut self, status: u16) -> Self {
        self.http_status = Some(status);
        self
    }

    /// Attach the underlying failure
    pub fn with_cause(mut self, cause: impl Into<Cause>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// HTTP status code, present for `NOT_FOUND`, `RATE_LIMITED` and `SERVER_ERROR`
    pub fn http_status(&self) -> Option<u16> {
        self.http_status
    }

    pub fn cause(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == ErrorKind::NotFound
    }

    pub fn is_rate_limited(&self) -> bool {
        self.kind == ErrorKind::RateLimited
    }
}

/// Detail of a response that decoded as JSON but did not match the expected shape
#[derive(Debug, thiserror::Error)]
#[error("schema validation failed at line {line}, column {column}: {detail}")]
pub struct SchemaError {
    detail: String,
    line: usize,
    column: usize,
}

impl SchemaError {
    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl From<serde_json::Error> for SchemaError {
    fn from(err: serde_json::Error) -> Self {
        Self {
            detail: err.to_string(),
            line: err.line(),
            column: err.column(),
        }
    }
}

/// Invalid caller input rejected at construction time
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("limit must be between {min} and {max}, got {value}")]
    LimitOutOfRange { value: i64, min: u32, max: u32 },

    #[error("offset must not be negative, got {0}")]
    NegativeOffset(i64),

    #[error("offset {0} is too large")]
    OffsetTooLarge(i64),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_status_classification() {
        assert_eq!(ErrorKind::from_status(404), ErrorKind::NotFound);
        assert_eq!(ErrorKind::from_status(429), ErrorKind::RateLimited);
        assert_eq!(ErrorKind::from_status(500), ErrorKind::ServerError);
        assert_eq!(ErrorKind::from_status(403), ErrorKind::ServerError);
        assert_eq!(ErrorKind::from_status(503), ErrorKind::ServerError);
    }

    #[test]
    fn test_from_status_messages() {
        let err = Error::from_status(404, "https://openlibrary.org/works/OL1W.json");
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.http_status(), Some(404));
        assert!(err.message().contains("/works/OL1W.json"));

        let err = Error::from_status(429, "ignored");
        assert_eq!(err.message(), "Rate limited by Open Library");

        let err = Error::from_status(502, "ignored");
        assert_eq!(err.kind(), ErrorKind::ServerError);
        assert_eq!(err.message(), "Server error occurred");
        assert_eq!(err.http_status(), Some(502));
    }

    #[test]
    fn test_cause_is_preserved() {
        let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "network timeout");
        let err = Error::network(io);

        assert_eq!(err.kind(), ErrorKind::NetworkError);
        assert!(err.http_status().is_none());
        let source = err.source().expect("cause should be exposed as source");
        assert!(source.downcast_ref::<std::io::Error>().is_some());
        assert_eq!(source.to_string(), "network timeout");
    }

    #[test]
    fn test_parse_error_messages_are_distinct() {
        let bad_json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let schema = serde_json::from_str::<u32>("\"x\"").unwrap_err();

        let a = Error::invalid_json(bad_json);
        let b = Error::schema_mismatch(SchemaError::from(schema));

        assert_eq!(a.kind(), ErrorKind::ParseError);
        assert_eq!(b.kind(), ErrorKind::ParseError);
        assert_eq!(a.message(), "Failed to parse JSON response");
        assert_eq!(b.message(), "Response did not match expected schema");
    }

    #[test]
    fn test_kind_tokens() {
        assert_eq!(ErrorKind::NotFound.to_string(), "NOT_FOUND");
        assert_eq!(
            serde_json::to_string(&ErrorKind::NetworkError).unwrap(),
            "\"NETWORK_ERROR\""
        );
        let err = Error::new(ErrorKind::ServerError, "Internal error").with_status(500);
        assert_eq!(err.to_string(), "SERVER_ERROR: Internal error");
    }
}
