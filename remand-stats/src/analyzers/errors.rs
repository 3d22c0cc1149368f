//! Error types for the analyzer framework.

use thiserror::Error;

use crate::core::Field;

/// Result type for analyzer operations.
pub type AnalyzerResult<T> = Result<T, AnalyzerError>;

/// Errors that can occur during analyzer operations.
///
/// Analyses are atomic: they either complete over the entire population or
/// fail with one of these. Nothing is logged-and-continued inside the
/// analyzers themselves, since silent continuation would quietly corrupt
/// the resulting statistics.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// A statistic requiring division by the record count was invoked on
    /// zero records.
    #[error("population is empty; {operation} requires at least one record")]
    EmptyPopulation { operation: &'static str },

    /// Correlation was requested on a field with a single distinct value,
    /// making its standard deviation zero and the coefficient undefined.
    #[error("field `{field}` has a single distinct value; correlation is undefined")]
    DegenerateInput { field: Field },

    /// A field's raw value could not be converted to its semantic type.
    #[error("failed to parse {field} value `{value}`: {reason}")]
    Parse {
        field: Field,
        value: String,
        reason: String,
    },

    /// Invalid configuration or parameters.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Error occurred while merging states.
    #[error("failed to merge states: {0}")]
    StateMerge(String),
}

impl AnalyzerError {
    /// Creates an empty-population error for the named operation.
    pub fn empty_population(operation: &'static str) -> Self {
        Self::EmptyPopulation { operation }
    }

    /// Creates a degenerate-input error for the given field.
    pub fn degenerate_input(field: Field) -> Self {
        Self::DegenerateInput { field }
    }

    /// Creates a parse error for a field value.
    pub fn parse(field: Field, value: impl Into<String>, reason: impl ToString) -> Self {
        Self::Parse {
            field,
            value: value.into(),
            reason: reason.to_string(),
        }
    }

    /// Creates an invalid configuration error with the given message.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    /// Creates a state merge error with the given message.
    pub fn state_merge(msg: impl Into<String>) -> Self {
        Self::StateMerge(msg.into())
    }
}
