//! Context for storing analyzer computation results.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::types::MetricValue;

/// Stores the metrics computed by one analysis run over a population.
///
/// # Example
///
/// ```rust,ignore
/// use remand_stats::analyzers::{AnalyzerContext, MetricValue};
///
/// let mut context = AnalyzerContext::new();
/// context.store_metric("distribution.gender", MetricValue::Double(42.0));
///
/// if let Some(metric) = context.metric("distribution.gender") {
///     println!("gender share: {metric}");
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerContext {
    /// Stored metrics indexed by metric key.
    metrics: HashMap<String, MetricValue>,
    /// Metadata about the analysis run.
    metadata: AnalysisMetadata,
    /// Analyzer failures recorded in continue-on-error mode.
    errors: Vec<AnalysisError>,
}

/// Metadata about one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    /// Size of the analyzed population.
    pub record_count: u64,
    /// When the run started.
    pub analyzed_at: DateTime<Utc>,
}

/// An analyzer failure captured during a continue-on-error run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisError {
    /// Name of the failing analyzer.
    pub analyzer: String,
    /// Rendered error message.
    pub message: String,
}

impl AnalyzerContext {
    /// Creates a new empty analyzer context.
    pub fn new() -> Self {
        Self::with_record_count(0)
    }

    /// Creates a context for a population of the given size.
    pub fn with_record_count(record_count: u64) -> Self {
        Self {
            metrics: HashMap::new(),
            metadata: AnalysisMetadata {
                record_count,
                analyzed_at: Utc::now(),
            },
            errors: Vec::new(),
        }
    }

    /// Stores a metric value under the given key.
    pub fn store_metric(&mut self, key: impl Into<String>, value: MetricValue) {
        self.metrics.insert(key.into(), value);
    }

    /// Records an analyzer failure.
    pub fn record_error(&mut self, analyzer: impl Into<String>, message: impl Into<String>) {
        self.errors.push(AnalysisError {
            analyzer: analyzer.into(),
            message: message.into(),
        });
    }

    /// Retrieves a metric by key.
    pub fn metric(&self, key: &str) -> Option<&MetricValue> {
        self.metrics.get(key)
    }

    /// Returns all stored metrics.
    pub fn all_metrics(&self) -> &HashMap<String, MetricValue> {
        &self.metrics
    }

    /// Returns the run metadata.
    pub fn metadata(&self) -> &AnalysisMetadata {
        &self.metadata
    }

    /// Returns the failures recorded in continue-on-error mode.
    pub fn errors(&self) -> &[AnalysisError] {
        &self.errors
    }
}

impl Default for AnalyzerContext {
    fn default() -> Self {
        Self::new()
    }
}
