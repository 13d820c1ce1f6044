/// Supported HTTP methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        };
        write!(f, "{}", s)
    }
}

/// Output of a completed HTTP round-trip.
///
/// The body is kept as raw bytes: UTF-8 decoding (and the empty-body check)
/// are part of `ApiService`'s validation, not the transport's.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

/// Failure below the HTTP layer: no usable response was produced.
#[derive(Debug, Clone)]
pub enum TransportError {
    /// DNS failure, refused connection, timeout. Carries the underlying cause.
    Network(String),
    /// The transport produced something that is not a well-formed HTTP
    /// response, e.g. the body stream died mid-read.
    InvalidResponse(String),
}

/// A generic interface to execute a single HTTP request.
/// Your application can implement this trait and pass it to `ApiService`
/// to decouple `pingx` from any specific HTTP library.
///
/// Implementors perform exactly one round-trip per call: no retries, and no
/// redirect or timeout policy beyond the underlying library's defaults.
pub trait HttpClient {
    fn execute(
        &self,
        method: HttpMethod,
        url: &str,
        headers: &[(String, String)],
        body: Option<&[u8]>,
    ) -> Result<RawResponse, TransportError>;
}
