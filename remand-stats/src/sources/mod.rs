//! Page retrieval: the fetcher capability, the paginated collector that
//! drives it, and the HTTP adapter for the gov.il dynamic collector.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::core::Record;

mod collector;
mod error;
mod gov;

pub use collector::{PaginatedCollector, DEFAULT_STRIDE};
pub use error::{SourceError, SourceResult};
pub use gov::{GovCollectorClient, GovCollectorConfig};

/// One page of records as returned by a fetcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// The records on this page, in server order.
    pub records: Vec<Record>,
    /// The server's declared total for the whole result set.
    ///
    /// Informational only: pagination never terminates on this number,
    /// only on an empty page.
    pub raw_total: u64,
}

/// Capability to fetch one page of records at a skip offset.
///
/// Implementations must guarantee monotonic exhaustion: results for
/// increasing offsets are disjoint and ordered, and `records` is empty
/// exactly when no data exists at or beyond the requested offset.
///
/// # Example
///
/// ```rust,ignore
/// use remand_stats::sources::{Page, PageFetcher, SourceResult};
///
/// #[derive(Debug)]
/// struct InMemoryFetcher { records: Vec<Record> }
///
/// #[async_trait::async_trait]
/// impl PageFetcher for InMemoryFetcher {
///     async fn fetch_page(&self, offset: usize) -> SourceResult<Page> {
///         let start = offset.min(self.records.len());
///         let end = (offset + 20).min(self.records.len());
///         Ok(Page {
///             records: self.records[start..end].to_vec(),
///             raw_total: self.records.len() as u64,
///         })
///     }
/// }
/// ```
#[async_trait]
pub trait PageFetcher: Debug + Send + Sync {
    /// Fetches the page of records starting at `offset`.
    async fn fetch_page(&self, offset: usize) -> SourceResult<Page>;
}
