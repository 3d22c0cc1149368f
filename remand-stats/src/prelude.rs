//! Prelude for commonly used types and traits in remand-stats.

pub use crate::analyzers::{
    arrests_since, AnalysisRunner, Analyzer, AnalyzerContext, AnalyzerError, AnalyzerResult,
    AnalyzerState, ArrestDateFilter, DistinctValuesAnalyzer, MetricValue,
    OrdinalCorrelationAnalyzer, ValueDistributionAnalyzer,
};
pub use crate::core::{Field, FieldValue, Record};
pub use crate::error::{RemandError, Result};
pub use crate::logging::{init_logging, LoggingConfig};
pub use crate::sources::{
    GovCollectorClient, GovCollectorConfig, Page, PageFetcher, PaginatedCollector, SourceError,
};
