//! Pearson correlation between two categorical fields via ordinal encoding.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::core::{Field, Record};

use super::errors::{AnalyzerError, AnalyzerResult};
use super::traits::{Analyzer, AnalyzerState};
use super::types::MetricValue;

/// Analyzer computing the Pearson correlation coefficient between two
/// categorical fields after ordinal encoding.
///
/// Each field's distinct values are numbered starting at 1 in
/// first-encountered order over the full record sequence. The encoding is
/// deliberately encounter-ordered, not sorted: the coefficient's magnitude
/// depends on this arbitrary ordering, and changing it changes the numeric
/// output. Callers wanting an order-free association measure should use a
/// different statistic, not a reordered encoding.
///
/// Mean is the sample mean; standard deviation is the population form
/// (divide by N, not N - 1).
///
/// # Example
///
/// ```rust,ignore
/// use remand_stats::analyzers::{Analyzer, OrdinalCorrelationAnalyzer};
/// use remand_stats::core::Field;
///
/// let analyzer = OrdinalCorrelationAnalyzer::new(Field::Organization, Field::Status);
/// let state = analyzer.compute_state(&records)?;
/// let metric = analyzer.metric_from_state(&state)?;
/// println!("r = {metric}");
/// ```
#[derive(Debug, Clone)]
pub struct OrdinalCorrelationAnalyzer {
    field_a: Field,
    field_b: Field,
}

impl OrdinalCorrelationAnalyzer {
    /// Creates a correlation analyzer over the two given fields.
    pub fn new(field_a: Field, field_b: Field) -> Self {
        Self { field_a, field_b }
    }
}

/// State for the ordinal correlation analyzer.
///
/// Holds the moment sums over the encoded pairs plus the distinct-value
/// counts needed to detect degenerate input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrdinalCorrelationState {
    /// Number of encoded pairs.
    pub n: u64,
    /// Sum of codes for the first field.
    pub sum_x: f64,
    /// Sum of codes for the second field.
    pub sum_y: f64,
    /// Sum of squared codes for the first field.
    pub sum_x2: f64,
    /// Sum of squared codes for the second field.
    pub sum_y2: f64,
    /// Sum of code products.
    pub sum_xy: f64,
    /// Distinct values observed for the first field.
    pub distinct_a: u64,
    /// Distinct values observed for the second field.
    pub distinct_b: u64,
}

impl AnalyzerState for OrdinalCorrelationState {
    fn merge(_states: Vec<Self>) -> AnalyzerResult<Self> {
        // Ordinal codes are assigned per scan; two partitions number their
        // values independently, so their moment sums are incompatible.
        Err(AnalyzerError::state_merge(
            "ordinal encodings are scan-local and cannot be merged",
        ))
    }

    fn is_empty(&self) -> bool {
        self.n == 0
    }
}

impl Analyzer for OrdinalCorrelationAnalyzer {
    type State = OrdinalCorrelationState;
    type Metric = MetricValue;

    #[instrument(skip(self, records), fields(
        analyzer = "ordinal_correlation",
        field_a = %self.field_a,
        field_b = %self.field_b,
        records = records.len()
    ))]
    fn compute_state(&self, records: &[Record]) -> AnalyzerResult<Self::State> {
        let mut codes_a: HashMap<String, f64> = HashMap::new();
        let mut codes_b: HashMap<String, f64> = HashMap::new();

        let mut state = OrdinalCorrelationState {
            n: records.len() as u64,
            sum_x: 0.0,
            sum_y: 0.0,
            sum_x2: 0.0,
            sum_y2: 0.0,
            sum_xy: 0.0,
            distinct_a: 0,
            distinct_b: 0,
        };

        for record in records {
            let x = ordinal_code(&mut codes_a, self.field_a.value(record).into_string());
            let y = ordinal_code(&mut codes_b, self.field_b.value(record).into_string());
            state.sum_x += x;
            state.sum_y += y;
            state.sum_x2 += x * x;
            state.sum_y2 += y * y;
            state.sum_xy += x * y;
        }

        state.distinct_a = codes_a.len() as u64;
        state.distinct_b = codes_b.len() as u64;
        Ok(state)
    }

    fn metric_from_state(&self, state: &Self::State) -> AnalyzerResult<Self::Metric> {
        if state.n == 0 {
            return Err(AnalyzerError::empty_population("correlation"));
        }
        if state.distinct_a < 2 {
            return Err(AnalyzerError::degenerate_input(self.field_a));
        }
        if state.distinct_b < 2 {
            return Err(AnalyzerError::degenerate_input(self.field_b));
        }

        let n = state.n as f64;
        let mean_x = state.sum_x / n;
        let mean_y = state.sum_y / n;
        let std_x = (state.sum_x2 / n - mean_x * mean_x).sqrt();
        let std_y = (state.sum_y2 / n - mean_y * mean_y).sqrt();
        let covariance = state.sum_xy / n - mean_x * mean_y;

        // Two or more distinct codes guarantee non-zero deviations, so the
        // quotient is well-defined; rounding can still nudge it past ±1.
        let r = (covariance / (std_x * std_y)).clamp(-1.0, 1.0);
        Ok(MetricValue::Double(r))
    }

    fn name(&self) -> &str {
        "ordinal_correlation"
    }

    fn description(&self) -> &str {
        "Pearson correlation between two ordinally encoded categorical fields"
    }

    fn metric_key(&self) -> String {
        format!("{}.{}_{}", self.name(), self.field_a, self.field_b)
    }

    fn fields(&self) -> Vec<Field> {
        vec![self.field_a, self.field_b]
    }
}

/// Returns the ordinal code for `value`, assigning the next code starting
/// at 1 on first encounter.
fn ordinal_code(codes: &mut HashMap<String, f64>, value: String) -> f64 {
    let next = codes.len() as f64 + 1.0;
    *codes.entry(value).or_insert(next)
}
