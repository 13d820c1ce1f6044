//! Error types for the pingx request routine.
//!
//! Every failure mode a request can hit gets its own variant, in the order
//! the validation pipeline checks them: URL construction, transport,
//! response shape, status code, body presence, UTF-8 decoding. Payload
//! serialization sits apart because it fires before any I/O happens.

use std::fmt;

use crate::client::TransportError;

/// Errors surfaced by `ApiService`.
#[derive(Debug, Clone)]
pub enum ApiError {
    /// Base URL + path did not form a valid URI.
    InvalidUrl(String),

    /// Transport-level failure: no response was received.
    Network(String),

    /// The response was not a well-formed HTTP response.
    InvalidResponse(String),

    /// The server answered with a status outside 200-299.
    Http(u16),

    /// The response body bytes were not valid UTF-8.
    Decoding(String),

    /// The server returned a 2xx response with an empty body.
    NoData,

    /// The request payload could not be encoded as JSON.
    Serialization(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::InvalidUrl(url) => {
                write!(f, "failed to create URL from: {url}")
            }
            ApiError::Network(cause) => write!(f, "network error: {cause}"),
            ApiError::InvalidResponse(cause) => {
                write!(f, "invalid response: {cause}")
            }
            ApiError::Http(status) => {
                write!(f, "HTTP error: status code {status}")
            }
            ApiError::Decoding(cause) => {
                write!(f, "failed to decode response body as UTF-8: {cause}")
            }
            ApiError::NoData => write!(f, "no data received in response"),
            ApiError::Serialization(cause) => {
                write!(f, "failed to serialize JSON payload: {cause}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Network(cause) => ApiError::Network(cause),
            TransportError::InvalidResponse(cause) => ApiError::InvalidResponse(cause),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            ApiError::InvalidUrl("ht tp://x".to_string()).to_string(),
            "failed to create URL from: ht tp://x"
        );
        assert_eq!(ApiError::Http(404).to_string(), "HTTP error: status code 404");
        assert_eq!(ApiError::NoData.to_string(), "no data received in response");
    }

    #[test]
    fn transport_error_conversion() {
        let err: ApiError = TransportError::Network("connection refused".to_string()).into();
        assert!(matches!(err, ApiError::Network(ref c) if c == "connection refused"));

        let err: ApiError = TransportError::InvalidResponse("truncated body".to_string()).into();
        assert!(matches!(err, ApiError::InvalidResponse(_)));
    }
}
