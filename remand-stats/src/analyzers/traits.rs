//! Core analyzer traits.

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::core::{Field, Record};

use super::errors::AnalyzerResult;
use super::types::MetricValue;

/// Core trait for analyzers that compute metrics from a collected population.
///
/// Every analyzer is a pure, side-effect-free pass over its own complete,
/// already-materialized record sequence; analyzers never share intermediate
/// state. Computation is split into a state pass and a metric step so that
/// states can be persisted or, where the statistic permits, merged.
///
/// # Example
///
/// ```rust,ignore
/// use remand_stats::analyzers::{Analyzer, AnalyzerState, MetricValue};
/// use remand_stats::core::Record;
///
/// #[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
/// struct SizeState { count: u64 }
///
/// impl AnalyzerState for SizeState {
///     fn merge(states: Vec<Self>) -> AnalyzerResult<Self> {
///         Ok(SizeState { count: states.iter().map(|s| s.count).sum() })
///     }
/// }
///
/// #[derive(Debug)]
/// struct SizeAnalyzer;
///
/// impl Analyzer for SizeAnalyzer {
///     type State = SizeState;
///     type Metric = MetricValue;
///
///     fn compute_state(&self, records: &[Record]) -> AnalyzerResult<Self::State> {
///         Ok(SizeState { count: records.len() as u64 })
///     }
///
///     fn metric_from_state(&self, state: &Self::State) -> AnalyzerResult<Self::Metric> {
///         Ok(MetricValue::Long(state.count as i64))
///     }
///
///     fn name(&self) -> &str {
///         "size"
///     }
/// }
/// ```
pub trait Analyzer: Send + Sync + Debug {
    /// The state type holding intermediate computation results.
    type State: AnalyzerState;

    /// The metric type produced by this analyzer.
    type Metric: Into<MetricValue> + Send + Sync + Debug;

    /// Computes the state from the collected population.
    ///
    /// Records must be iterated in the order the collector produced them;
    /// some analyzers (ordinal encoding in particular) derive meaning from
    /// encounter order.
    fn compute_state(&self, records: &[Record]) -> AnalyzerResult<Self::State>;

    /// Computes the final metric from the accumulated state.
    fn metric_from_state(&self, state: &Self::State) -> AnalyzerResult<Self::Metric>;

    /// Merges multiple states into a single state.
    fn merge_states(&self, states: Vec<Self::State>) -> AnalyzerResult<Self::State> {
        Self::State::merge(states)
    }

    /// Returns the name of this analyzer.
    fn name(&self) -> &str;

    /// Returns a description of what this analyzer computes.
    fn description(&self) -> &str {
        ""
    }

    /// Returns the metric key for storing results.
    ///
    /// By default this is the analyzer name; field-based analyzers should
    /// override it to include the field name(s).
    fn metric_key(&self) -> String {
        self.name().to_string()
    }

    /// Returns the field(s) this analyzer operates on, if any.
    fn fields(&self) -> Vec<Field> {
        vec![]
    }
}

/// Trait for analyzer state.
///
/// States are serializable so intermediate results can be cached or
/// shipped; merging supports statistics that decompose over partitions.
pub trait AnalyzerState:
    Clone + Send + Sync + Debug + Serialize + for<'de> Deserialize<'de>
{
    /// Merges multiple states into a single state.
    ///
    /// Statistics whose encoding depends on scan order cannot be merged
    /// and must return a state-merge error.
    fn merge(states: Vec<Self>) -> AnalyzerResult<Self>
    where
        Self: Sized;

    /// Returns whether this state represents an empty computation.
    fn is_empty(&self) -> bool {
        false
    }
}
