//! Percentage distribution of one field's values.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::core::{Field, Record};

use super::errors::{AnalyzerError, AnalyzerResult};
use super::traits::{Analyzer, AnalyzerState};
use super::types::MetricValue;

/// Analyzer that computes each distinct value's percentage share of the
/// population for one field.
///
/// For a non-empty population the returned percentages sum to 100.0 within
/// floating-point tolerance. An empty population is an error, not a silent
/// division by zero.
#[derive(Debug, Clone)]
pub struct ValueDistributionAnalyzer {
    field: Field,
}

impl ValueDistributionAnalyzer {
    /// Creates a distribution analyzer for the given field.
    pub fn new(field: Field) -> Self {
        Self { field }
    }

    /// Returns the field being analyzed.
    pub fn field(&self) -> Field {
        self.field
    }
}

/// State for the distribution analyzer: occurrence counts per value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValueDistributionState {
    /// Occurrences per distinct value.
    pub counts: HashMap<String, u64>,
    /// Total record count.
    pub total: u64,
}

impl AnalyzerState for ValueDistributionState {
    fn merge(states: Vec<Self>) -> AnalyzerResult<Self> {
        if states.is_empty() {
            return Err(AnalyzerError::state_merge("no states to merge"));
        }
        let mut counts: HashMap<String, u64> = HashMap::new();
        let mut total = 0;
        for state in states {
            total += state.total;
            for (value, count) in state.counts {
                *counts.entry(value).or_insert(0) += count;
            }
        }
        Ok(ValueDistributionState { counts, total })
    }

    fn is_empty(&self) -> bool {
        self.total == 0
    }
}

impl Analyzer for ValueDistributionAnalyzer {
    type State = ValueDistributionState;
    type Metric = MetricValue;

    #[instrument(skip(self, records), fields(analyzer = "distribution", field = %self.field, records = records.len()))]
    fn compute_state(&self, records: &[Record]) -> AnalyzerResult<Self::State> {
        let mut counts: HashMap<String, u64> = HashMap::new();
        for record in records {
            *counts
                .entry(self.field.value(record).into_string())
                .or_insert(0) += 1;
        }
        Ok(ValueDistributionState {
            counts,
            total: records.len() as u64,
        })
    }

    fn metric_from_state(&self, state: &Self::State) -> AnalyzerResult<Self::Metric> {
        if state.total == 0 {
            return Err(AnalyzerError::empty_population("percentage distribution"));
        }
        let total = state.total as f64;
        let percentages = state
            .counts
            .iter()
            .map(|(value, count)| (value.clone(), *count as f64 / total * 100.0))
            .collect();
        Ok(MetricValue::Frequencies(percentages))
    }

    fn name(&self) -> &str {
        "distribution"
    }

    fn description(&self) -> &str {
        "Computes each distinct value's percentage share of the population"
    }

    fn metric_key(&self) -> String {
        format!("{}.{}", self.name(), self.field)
    }

    fn fields(&self) -> Vec<Field> {
        vec![self.field]
    }
}
