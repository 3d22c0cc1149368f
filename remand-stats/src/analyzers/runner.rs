//! Orchestration layer for running several analyzers over one population.

use std::sync::Arc;

use tracing::{debug, error, info, instrument};

use crate::core::Record;

use super::context::AnalyzerContext;
use super::errors::AnalyzerResult;
use super::traits::Analyzer;
use super::types::MetricValue;

/// Type alias for progress callback function.
pub type ProgressCallback = Arc<dyn Fn(f64) + Send + Sync>;

/// Type alias for a boxed analyzer execution function.
pub type AnalyzerExecution =
    Box<dyn Fn(&[Record]) -> AnalyzerResult<(String, MetricValue)> + Send + Sync>;

/// Runs a list of analyzers over one collected population.
///
/// Each analyzer receives the same immutable record slice and performs its
/// own independent pass; the runner collects the resulting metrics into an
/// [`AnalyzerContext`] keyed by metric key.
///
/// # Example
///
/// ```rust,ignore
/// use remand_stats::analyzers::{AnalysisRunner, DistinctValuesAnalyzer, ValueDistributionAnalyzer};
/// use remand_stats::core::Field;
///
/// let runner = AnalysisRunner::new()
///     .add(DistinctValuesAnalyzer::of_interest())
///     .add(ValueDistributionAnalyzer::new(Field::Gender));
///
/// let context = runner.run(&records)?;
/// println!("computed {} metrics", context.all_metrics().len());
/// ```
pub struct AnalysisRunner {
    executions: Vec<AnalyzerExecution>,
    analyzer_names: Vec<String>,
    on_progress: Option<ProgressCallback>,
    continue_on_error: bool,
}

impl Default for AnalysisRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisRunner {
    /// Creates an empty runner.
    pub fn new() -> Self {
        Self {
            executions: Vec::new(),
            analyzer_names: Vec::new(),
            on_progress: None,
            continue_on_error: false,
        }
    }

    /// Adds an analyzer to the run.
    pub fn add<A>(mut self, analyzer: A) -> Self
    where
        A: Analyzer + 'static,
    {
        self.analyzer_names.push(analyzer.name().to_string());
        self.executions.push(Box::new(move |records| {
            let state = analyzer.compute_state(records)?;
            let metric = analyzer.metric_from_state(&state)?;
            Ok((analyzer.metric_key(), metric.into()))
        }));
        self
    }

    /// Registers a progress callback receiving a fraction in `[0, 1]`.
    pub fn on_progress<F>(mut self, callback: F) -> Self
    where
        F: Fn(f64) + Send + Sync + 'static,
    {
        self.on_progress = Some(Arc::new(callback));
        self
    }

    /// Records analyzer failures in the context instead of aborting the run.
    ///
    /// The default is fail-fast: the first analyzer error aborts the whole
    /// run, matching the no-partial-failure policy of the analyzers
    /// themselves.
    pub fn continue_on_error(mut self, continue_on_error: bool) -> Self {
        self.continue_on_error = continue_on_error;
        self
    }

    /// Runs every analyzer over the given population.
    #[instrument(skip(self, records), fields(analyzers = self.executions.len(), records = records.len()))]
    pub fn run(&self, records: &[Record]) -> AnalyzerResult<AnalyzerContext> {
        let mut context = AnalyzerContext::with_record_count(records.len() as u64);
        let total = self.executions.len();

        for (index, execution) in self.executions.iter().enumerate() {
            let name = &self.analyzer_names[index];
            match execution(records) {
                Ok((key, metric)) => {
                    debug!(analyzer = %name, key = %key, "analyzer completed");
                    context.store_metric(key, metric);
                }
                Err(err) if self.continue_on_error => {
                    error!(analyzer = %name, %err, "analyzer failed; continuing");
                    context.record_error(name.clone(), err.to_string());
                }
                Err(err) => {
                    error!(analyzer = %name, %err, "analyzer failed");
                    return Err(err);
                }
            }

            if let Some(callback) = &self.on_progress {
                callback((index + 1) as f64 / total as f64);
            }
        }

        info!(
            metrics = context.all_metrics().len(),
            failures = context.errors().len(),
            "analysis run complete"
        );
        Ok(context)
    }
}
