//! Analyzer framework for computing descriptive statistics over a
//! collected population.
//!
//! Every analysis consumes the complete, already-materialized record
//! sequence independently: there is no shared intermediate state between
//! analyses and no concurrent mutation, so each pass is a pure read-only
//! scan.
//!
//! ## Available analyzers
//!
//! - [`DistinctValuesAnalyzer`]: set of distinct values per requested field
//! - [`ValueDistributionAnalyzer`]: percentage share per distinct value
//! - [`ArrestDateFilter`]: date-threshold selection over the arrest date
//! - [`OrdinalCorrelationAnalyzer`]: Pearson correlation between two
//!   categorical fields under encounter-order ordinal encoding

pub mod context;
pub mod correlation;
pub mod distinct;
pub mod distribution;
pub mod errors;
pub mod filter;
pub mod runner;
pub mod traits;
pub mod types;

pub use context::{AnalysisError, AnalysisMetadata, AnalyzerContext};
pub use correlation::{OrdinalCorrelationAnalyzer, OrdinalCorrelationState};
pub use distinct::{DistinctValuesAnalyzer, DistinctValuesState};
pub use distribution::{ValueDistributionAnalyzer, ValueDistributionState};
pub use errors::{AnalyzerError, AnalyzerResult};
pub use filter::{arrests_since, ArrestDateFilter};
pub use runner::AnalysisRunner;
pub use traits::{Analyzer, AnalyzerState};
pub use types::MetricValue;
