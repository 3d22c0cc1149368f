//! Crate-level error type.

use thiserror::Error;

use crate::analyzers::AnalyzerError;
use crate::sources::SourceError;

/// Result type used across the crate's public surface.
pub type Result<T> = std::result::Result<T, RemandError>;

/// Top-level error: retrieval failures and analysis failures, unified for
/// callers driving both layers.
#[derive(Debug, Error)]
pub enum RemandError {
    /// Page retrieval failed.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// An analysis failed.
    #[error(transparent)]
    Analyzer(#[from] AnalyzerError),

    /// Logging initialisation failed.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
