//! # remand-stats — paginated retrieval and descriptive statistics
//!
//! remand-stats collects the Israel Prison Service public detention
//! dataset through its paginated collector API and computes descriptive
//! statistics over the categorical and date fields of the result:
//! distinct-value sets, percentage distributions, date-threshold
//! selections, and Pearson correlation between ordinally encoded
//! categorical fields.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use remand_stats::analyzers::{
//!     AnalysisRunner, DistinctValuesAnalyzer, OrdinalCorrelationAnalyzer,
//!     ValueDistributionAnalyzer,
//! };
//! use remand_stats::core::Field;
//! use remand_stats::sources::{GovCollectorClient, PaginatedCollector};
//!
//! # async fn example() -> remand_stats::Result<()> {
//! // Drain the remote collector into one in-memory population.
//! let client = GovCollectorClient::new()?;
//! let collector = PaginatedCollector::new(client);
//! let records = collector.collect().await?;
//!
//! // Run independent analyses over the collected population.
//! let context = AnalysisRunner::new()
//!     .add(DistinctValuesAnalyzer::of_interest())
//!     .add(ValueDistributionAnalyzer::new(Field::Organization))
//!     .add(OrdinalCorrelationAnalyzer::new(Field::Organization, Field::Status))
//!     .run(&records)?;
//!
//! for (key, metric) in context.all_metrics() {
//!     println!("{key}: {metric}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - **`core`**: the [`core::Record`] entity, its closed categorical sets,
//!   and the [`core::Field`] accessor table
//! - **`sources`**: the [`sources::PageFetcher`] capability, the
//!   stride-based [`sources::PaginatedCollector`], and the thin gov.il
//!   HTTP adapter
//! - **`analyzers`**: the analyzer framework plus the concrete
//!   distinct-value, distribution, filter, and correlation analyzers
//! - **`logging`**: `tracing` subscriber setup helpers
//!
//! Retrieval is strictly sequential with one request in flight; analyses
//! are pure single-threaded passes over an immutable record slice. All
//! failures surface to the caller: no retry, no silent exclusion, no
//! partial results.

pub mod analyzers;
pub mod core;
pub mod error;
pub mod logging;
pub mod prelude;
pub mod sources;

pub use error::{RemandError, Result};

#[cfg(test)]
pub mod test_helpers;
