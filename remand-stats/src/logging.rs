//! Logging configuration and setup.
//!
//! The library itself only emits `tracing` events; installing a subscriber
//! is left to the binary. These helpers cover the common setups.

use tracing::Level;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

use crate::error::{RemandError, Result};

/// Configuration for structured logging.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Default log level when no environment filter applies.
    pub level: Level,
    /// Whether to emit JSON-formatted output.
    pub json_format: bool,
    /// Explicit filter directive overriding `RUST_LOG` and `level`.
    pub env_filter: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            json_format: false,
            env_filter: None,
        }
    }
}

impl LoggingConfig {
    /// Creates a verbose configuration suitable for debugging.
    pub fn verbose() -> Self {
        Self {
            level: Level::DEBUG,
            ..Self::default()
        }
    }

    /// Creates a production configuration: warnings only, JSON output.
    pub fn production() -> Self {
        Self {
            level: Level::WARN,
            json_format: true,
            env_filter: None,
        }
    }
}

/// Installs a global `tracing` subscriber according to the configuration.
///
/// Fails if a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = match &config.env_filter {
        Some(directive) => EnvFilter::try_new(directive)
            .map_err(|e| RemandError::Logging(e.to_string()))?,
        None => EnvFilter::builder()
            .with_default_directive(LevelFilter::from_level(config.level).into())
            .from_env_lossy(),
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = if config.json_format {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.map_err(|e| RemandError::Logging(e.to_string()))
}
