//! Date-threshold selection over the arrest date.

use chrono::NaiveDate;
use tracing::instrument;

use crate::core::{Field, Record};

use super::errors::{AnalyzerError, AnalyzerResult};

/// Selects records whose arrest date is on or after a threshold.
///
/// The comparison is inclusive at the boundary. A malformed arrest date
/// aborts the whole selection with a parse error: silently excluding the
/// row would corrupt any statistic computed over the filtered set.
#[derive(Debug, Clone, Copy)]
pub struct ArrestDateFilter {
    threshold: NaiveDate,
}

impl ArrestDateFilter {
    /// Creates a filter keeping records arrested on or after `threshold`.
    pub fn since(threshold: NaiveDate) -> Self {
        Self { threshold }
    }

    /// Returns the threshold date.
    pub fn threshold(&self) -> NaiveDate {
        self.threshold
    }

    /// Applies the filter, preserving record order.
    #[instrument(skip(self, records), fields(threshold = %self.threshold, records = records.len()))]
    pub fn filter<'a>(&self, records: &'a [Record]) -> AnalyzerResult<Vec<&'a Record>> {
        let mut kept = Vec::new();
        for record in records {
            let arrested = record.arrested_on().map_err(|e| {
                AnalyzerError::parse(Field::ArrestDate, record.arrest_date.as_str(), e)
            })?;
            if arrested >= self.threshold {
                kept.push(record);
            }
        }
        Ok(kept)
    }
}

/// Convenience wrapper over [`ArrestDateFilter::filter`].
pub fn arrests_since<'a>(
    records: &'a [Record],
    threshold: NaiveDate,
) -> AnalyzerResult<Vec<&'a Record>> {
    ArrestDateFilter::since(threshold).filter(records)
}
