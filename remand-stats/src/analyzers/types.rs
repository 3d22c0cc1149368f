//! Types for analyzer metrics and values.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

/// Represents the different kinds of metric values analyzers can produce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum MetricValue {
    /// A floating-point metric value (e.g., a correlation coefficient).
    Double(f64),

    /// An integer metric value (e.g., a count).
    Long(i64),

    /// The set of distinct values observed for one field.
    ValueSet(BTreeSet<String>),

    /// Percentage share per distinct value of one field.
    Frequencies(HashMap<String, f64>),

    /// A map of string keys to metric values (e.g., per-field results).
    Map(HashMap<String, MetricValue>),
}

impl MetricValue {
    /// Checks whether the metric value is numeric (Double or Long).
    pub fn is_numeric(&self) -> bool {
        matches!(self, MetricValue::Double(_) | MetricValue::Long(_))
    }

    /// Attempts to get the numeric value as f64.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            MetricValue::Double(v) => Some(*v),
            MetricValue::Long(v) => Some(*v as f64),
            _ => None,
        }
    }

    /// Attempts to view the metric as a distinct-value set.
    pub fn as_value_set(&self) -> Option<&BTreeSet<String>> {
        match self {
            MetricValue::ValueSet(set) => Some(set),
            _ => None,
        }
    }

    /// Attempts to view the metric as a percentage distribution.
    pub fn as_frequencies(&self) -> Option<&HashMap<String, f64>> {
        match self {
            MetricValue::Frequencies(map) => Some(map),
            _ => None,
        }
    }

    /// Returns a human-readable rendering of the metric value.
    pub fn to_string_pretty(&self) -> String {
        match self {
            MetricValue::Double(v) => {
                if v.fract() == 0.0 {
                    format!("{v:.0}")
                } else {
                    format!("{v:.4}")
                }
            }
            MetricValue::Long(v) => v.to_string(),
            MetricValue::ValueSet(set) => format!("ValueSet({} values)", set.len()),
            MetricValue::Frequencies(map) => format!("Frequencies({} values)", map.len()),
            MetricValue::Map(map) => format!("Map({} entries)", map.len()),
        }
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_pretty())
    }
}

impl From<f64> for MetricValue {
    fn from(value: f64) -> Self {
        MetricValue::Double(value)
    }
}

impl From<i64> for MetricValue {
    fn from(value: i64) -> Self {
        MetricValue::Long(value)
    }
}

impl From<BTreeSet<String>> for MetricValue {
    fn from(value: BTreeSet<String>) -> Self {
        MetricValue::ValueSet(value)
    }
}

impl From<HashMap<String, f64>> for MetricValue {
    fn from(value: HashMap<String, f64>) -> Self {
        MetricValue::Frequencies(value)
    }
}
