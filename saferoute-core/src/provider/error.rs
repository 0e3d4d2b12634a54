use thiserror::Error;

/// Errors from [`crate::provider::RouteProvider::candidate_routes`].
///
/// These describe failures of the routing service, not of scoring. Callers
/// handle them before any route reaches the scorer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteProviderError {
    /// The request did not complete within the configured timeout.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Requested URL.
        url: String,
        /// Configured timeout in whole seconds.
        timeout_secs: u64,
    },
    /// The service answered with a non-success HTTP status.
    #[error("request to {url} failed with HTTP {status}: {message}")]
    HttpError {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Error detail from the HTTP client.
        message: String,
    },
    /// The service could not be reached.
    #[error("network error contacting {url}: {message}")]
    NetworkError {
        /// Requested URL.
        url: String,
        /// Error detail from the HTTP client.
        message: String,
    },
    /// The response body could not be decoded.
    #[error("failed to parse routing response: {message}")]
    ParseError {
        /// Decoder error detail.
        message: String,
    },
    /// The service reported a failure in its response body.
    #[error("routing service returned {code}: {message}")]
    ServiceError {
        /// Service status code, such as `"NoRoute"`.
        code: String,
        /// Service-supplied explanation.
        message: String,
    },
    /// The service found no route between the endpoints.
    #[error("no route found between the requested points")]
    NoRoute,
}
