//! Distinct-value aggregation over caller-selected fields.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::core::{Field, Record};

use super::errors::{AnalyzerError, AnalyzerResult};
use super::traits::{Analyzer, AnalyzerState};
use super::types::MetricValue;

/// Analyzer that collects the set of distinct values per requested field.
///
/// Only the requested fields are computed: distinct-value sets over
/// unrequested free-text fields would be unbounded and are avoided by
/// construction. A requested field with zero matching records yields an
/// empty set, not an absent key.
///
/// # Example
///
/// ```rust,ignore
/// use remand_stats::analyzers::DistinctValuesAnalyzer;
/// use remand_stats::core::Field;
///
/// let analyzer = DistinctValuesAnalyzer::new([Field::Gender, Field::Court]);
/// let state = analyzer.compute_state(&records)?;
/// let sets = state.values;
/// println!("{} distinct genders", sets["gender"].len());
/// ```
#[derive(Debug, Clone)]
pub struct DistinctValuesAnalyzer {
    fields: Vec<Field>,
}

impl DistinctValuesAnalyzer {
    /// Creates an analyzer over the given fields.
    pub fn new(fields: impl IntoIterator<Item = Field>) -> Self {
        Self {
            fields: fields.into_iter().collect(),
        }
    }

    /// Creates an analyzer over the dataset's categorical fields of interest.
    pub fn of_interest() -> Self {
        Self::new(Field::CATEGORICAL)
    }
}

/// State for the distinct-values analyzer: one deduplicated value set per
/// requested field, keyed by field name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistinctValuesState {
    /// Distinct values observed, keyed by field name.
    pub values: HashMap<String, BTreeSet<String>>,
}

impl DistinctValuesState {
    /// Returns the distinct values observed for a field, if it was requested.
    pub fn for_field(&self, field: Field) -> Option<&BTreeSet<String>> {
        self.values.get(field.name())
    }
}

impl AnalyzerState for DistinctValuesState {
    fn merge(states: Vec<Self>) -> AnalyzerResult<Self> {
        if states.is_empty() {
            return Err(AnalyzerError::state_merge("no states to merge"));
        }
        let mut merged: HashMap<String, BTreeSet<String>> = HashMap::new();
        for state in states {
            for (field, values) in state.values {
                merged.entry(field).or_default().extend(values);
            }
        }
        Ok(DistinctValuesState { values: merged })
    }

    fn is_empty(&self) -> bool {
        self.values.values().all(BTreeSet::is_empty)
    }
}

impl Analyzer for DistinctValuesAnalyzer {
    type State = DistinctValuesState;
    type Metric = MetricValue;

    #[instrument(skip(self, records), fields(analyzer = "distinct_values", records = records.len()))]
    fn compute_state(&self, records: &[Record]) -> AnalyzerResult<Self::State> {
        let mut values: HashMap<String, BTreeSet<String>> = self
            .fields
            .iter()
            .map(|field| (field.name().to_string(), BTreeSet::new()))
            .collect();

        for record in records {
            for field in &self.fields {
                if let Some(set) = values.get_mut(field.name()) {
                    set.insert(field.value(record).into_string());
                }
            }
        }

        Ok(DistinctValuesState { values })
    }

    fn metric_from_state(&self, state: &Self::State) -> AnalyzerResult<Self::Metric> {
        let per_field = state
            .values
            .iter()
            .map(|(field, set)| (field.clone(), MetricValue::ValueSet(set.clone())))
            .collect();
        Ok(MetricValue::Map(per_field))
    }

    fn name(&self) -> &str {
        "distinct_values"
    }

    fn description(&self) -> &str {
        "Collects the set of distinct values per requested field"
    }

    fn metric_key(&self) -> String {
        let fields: Vec<&str> = self.fields.iter().map(Field::name).collect();
        format!("{}.{}", self.name(), fields.join("+"))
    }

    fn fields(&self) -> Vec<Field> {
        self.fields.clone()
    }
}
