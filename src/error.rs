//! Error taxonomy for the client.
//!
//! Every failure mode is surfaced to the caller unchanged; nothing is caught
//! or retried internally. Retry and backoff policy belong to the embedder.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while building a request or submitting a search.
#[derive(Debug, Error)]
pub enum Error {
    /// A required request field was missing at construction time.
    ///
    /// Raised by the request builders, never by [`Client::search`].
    ///
    /// [`Client::search`]: crate::Client::search
    #[error("Invalid request: {0}")]
    Validation(String),

    /// The HTTP exchange could not be completed: connection failure, DNS
    /// failure, or a non-success status code.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not valid gzip even though a compressed
    /// transfer was requested.
    #[error("Gzip decompression failed: {0}")]
    Decompression(#[source] std::io::Error),

    /// The response body could not be parsed as JSON. Only produced for
    /// [`ResponseFormat::Json`]; passthrough formats never parse.
    ///
    /// [`ResponseFormat::Json`]: crate::ResponseFormat::Json
    #[error("Decode failed: {0}")]
    Decode(#[source] serde_json::Error),
}
