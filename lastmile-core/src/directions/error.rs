use thiserror::Error;

/// Errors from [`crate::directions::DirectionsService::fetch_route`].
///
/// None of these is fatal to a render cycle: the caller logs the failure and
/// keeps markers and bounds displayed without a drawn path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectionsError {
    /// The provider did not answer within the configured timeout.
    #[error("directions request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Request URL.
        url: String,
        /// Configured timeout in seconds.
        timeout_secs: u64,
    },
    /// The provider answered with a non-success HTTP status.
    #[error("directions request to {url} failed with HTTP {status}: {message}")]
    Http {
        /// Request URL.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Error detail from the HTTP client.
        message: String,
    },
    /// The provider could not be reached.
    #[error("directions request to {url} failed: {message}")]
    Network {
        /// Request URL.
        url: String,
        /// Error detail from the HTTP client.
        message: String,
    },
    /// The provider answered with a non-ok service status.
    #[error("directions service returned status {code}: {message}")]
    Service {
        /// Provider status code, e.g. `"NoRoute"`.
        code: String,
        /// Provider error message, possibly empty.
        message: String,
    },
    /// The provider's payload could not be interpreted.
    #[error("failed to parse directions response: {message}")]
    Parse {
        /// Decoder error detail.
        message: String,
    },
}
