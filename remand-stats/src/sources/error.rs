//! Error types for page retrieval.

use thiserror::Error;

/// Result type for source operations.
pub type SourceResult<T> = Result<T, SourceError>;

/// Errors that can occur while fetching pages from the remote collector.
///
/// Failures propagate to the caller as-is: the retrieval layer performs no
/// retries and never drops a failed page, since a silently missing page
/// would corrupt every statistic computed downstream.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The HTTP request itself failed (connection, TLS, timeout).
    #[error("page request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server returned HTTP {status} for offset {offset}")]
    Status { status: u16, offset: usize },

    /// The response body could not be decoded into records.
    ///
    /// This includes categorical fields holding values outside their closed
    /// sets, which are rejected during deserialization.
    #[error("failed to decode page at offset {offset}: {reason}")]
    Decode { offset: usize, reason: String },

    /// The collector was configured with a zero stride.
    #[error("stride must be a positive integer")]
    ZeroStride,
}

impl SourceError {
    /// Creates a decode error for the page at the given offset.
    pub fn decode(offset: usize, reason: impl Into<String>) -> Self {
        Self::Decode {
            offset,
            reason: reason.into(),
        }
    }
}
