use reqwest::StatusCode;
use thiserror::Error;

/// Errors produced by blog API calls.
///
/// Every variant names the request URL. The store logs these; how they are
/// shown (status banner, dialog line) is the caller's decision.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("server returned {status} for {url}")]
    Status { url: String, status: StatusCode },

    /// The response body did not match the expected shape.
    #[error("invalid response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}
