//! Routing error types

use std::fmt;

use domain::ErrorResponse;
use thiserror::Error;

/// Errors raised by an [`HttpTransport`](crate::HttpTransport)
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection to the routing service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },

    /// The caller cancelled the request
    #[error("Request cancelled")]
    Cancelled,

    /// Reading the response body failed
    #[error("Failed to read response body: {0}")]
    Body(String),

    /// The transport could not be configured
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// A well-formed non-success response
///
/// Carries the parsed error payload together with the raw body text, so
/// callers can inspect bodies that only partially match the error schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseError {
    /// HTTP status code of the response
    pub status: u16,
    /// Parsed error payload
    pub response: ErrorResponse,
    /// Raw response body
    pub http_body: String,
}

impl fmt::Display for ResponseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}: {}", self.status, self.response)
    }
}

impl std::error::Error for ResponseError {}

/// Errors that can occur while computing routes
#[derive(Debug, Error)]
pub enum RoutingError {
    /// Transport mode missing or not recognised
    #[error("Invalid transport mode")]
    InvalidTransportMode,

    /// Routing mode not recognised
    #[error("Invalid routing mode: {0}")]
    InvalidRoutingMode(String),

    /// Traffic mode not recognised
    #[error("Invalid traffic mode: {0}")]
    InvalidTrafficMode(String),

    /// Avoid-area feature not recognised
    #[error("Invalid avoid area: {0}")]
    InvalidAvoidArea(String),

    /// Span attributes were requested without the polyline return attribute
    #[error("Spans require the polyline return attribute")]
    SpansRequirePolyline,

    /// The transport failed before a response was received
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The response body is not valid JSON for the expected schema
    #[error("Failed to decode response: {source}")]
    Decode {
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// The service answered with a non-success status
    #[error(transparent)]
    Response(#[from] ResponseError),

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl RoutingError {
    /// Returns true if the request was rejected locally, before any network I/O
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidTransportMode
                | Self::InvalidRoutingMode(_)
                | Self::InvalidTrafficMode(_)
                | Self::InvalidAvoidArea(_)
                | Self::SpansRequirePolyline
        )
    }

    /// Returns true if repeating the same request may succeed
    ///
    /// The client never retries on its own; this only classifies.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(err) => matches!(
                err,
                TransportError::ConnectionFailed(_)
                    | TransportError::Timeout { .. }
                    | TransportError::Body(_)
            ),
            Self::Response(err) => err.status == 429 || err.status >= 500,
            _ => false,
        }
    }

    /// The structured error payload, for non-success responses
    #[must_use]
    pub const fn error_response(&self) -> Option<&ErrorResponse> {
        match self {
            Self::Response(err) => Some(&err.response),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response_error(status: u16) -> ResponseError {
        ResponseError {
            status,
            response: ErrorResponse {
                title: "Mocked Error".to_string(),
                status: i32::from(status),
                ..ErrorResponse::default()
            },
            http_body: r#"{"title":"Mocked Error"}"#.to_string(),
        }
    }

    #[test]
    fn test_validation_errors() {
        assert!(RoutingError::InvalidTransportMode.is_validation());
        assert!(RoutingError::InvalidRoutingMode("x".to_string()).is_validation());
        assert!(RoutingError::InvalidTrafficMode("x".to_string()).is_validation());
        assert!(RoutingError::InvalidAvoidArea("x".to_string()).is_validation());
        assert!(RoutingError::SpansRequirePolyline.is_validation());
        assert!(!RoutingError::from(TransportError::Cancelled).is_validation());
    }

    #[test]
    fn test_retryable_errors() {
        let refused = TransportError::ConnectionFailed("x".to_string());
        assert!(RoutingError::from(refused).is_retryable());
        assert!(RoutingError::from(TransportError::Timeout { timeout_secs: 30 }).is_retryable());
        assert!(RoutingError::from(response_error(503)).is_retryable());
        assert!(RoutingError::from(response_error(429)).is_retryable());
    }

    #[test]
    fn test_non_retryable_errors() {
        assert!(!RoutingError::InvalidTransportMode.is_retryable());
        assert!(!RoutingError::from(TransportError::Cancelled).is_retryable());
        assert!(!RoutingError::from(response_error(400)).is_retryable());
    }

    #[test]
    fn test_error_display() {
        let err = RoutingError::SpansRequirePolyline;
        assert!(err.to_string().contains("polyline"));

        let err = RoutingError::from(response_error(400));
        assert!(err.to_string().contains("400"));
        assert!(err.to_string().contains("Mocked Error"));

        let err = RoutingError::InvalidAvoidArea("motorway".to_string());
        assert!(err.to_string().contains("motorway"));
    }

    #[test]
    fn test_error_response_accessor() {
        let err = RoutingError::from(response_error(400));
        assert_eq!(err.error_response().unwrap().title, "Mocked Error");
        assert!(RoutingError::InvalidTransportMode.error_response().is_none());
    }
}
