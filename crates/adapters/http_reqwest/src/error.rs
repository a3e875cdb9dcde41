//! HTTP adapter error types.
//!
//! Request-time failures are reported as the port's `ApiError`; these
//! cover setting the client up.

/// Errors building an [`HttpController`](crate::HttpController).
#[derive(Debug, thiserror::Error)]
pub enum HttpAdapterError {
    /// `base_url` is not an absolute http(s) URL.
    #[error("invalid controller URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// `base_url` parsed but uses a scheme other than http or https.
    #[error("unsupported scheme in controller URL {0:?}")]
    UnsupportedScheme(String),

    /// The reqwest client could not be constructed.
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),
}
