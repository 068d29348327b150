use thiserror::Error;

/// Core error types for depsearch.
///
/// All errors provide structured error handling with source error tracking.
/// The HTTP surface maps these onto response statuses; nothing in this crate
/// panics on an upstream failure.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("missing or empty input: {0}")]
    InvalidInput(String),

    #[error("upstream request failed for {url}: {source}")]
    Upstream {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("upstream returned {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("failed to decode upstream response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("refusing plaintext URL to non-loopback host: {0}")]
    InsecureUrl(String),
}

/// Convenience type alias for `Result<T, CoreError>`.
///
/// This is the standard `Result` type used throughout the depsearch codebase.
pub type Result<T> = std::result::Result<T, CoreError>;
