//! Stride-based pagination over a [`PageFetcher`].

use futures::stream::{self, Stream, TryStreamExt};
use tracing::{debug, instrument};

use crate::core::Record;

use super::error::{SourceError, SourceResult};
use super::{Page, PageFetcher};

/// The page size of the upstream collector.
///
/// The stride must match the page size the fetcher actually returns;
/// a mismatch produces gaps or overlaps in the collected population.
/// This is a configuration contract, not something that is auto-detected.
pub const DEFAULT_STRIDE: usize = 20;

/// Drives a [`PageFetcher`] in fixed-size strides until exhaustion.
///
/// Retrieval is strictly sequential with at most one request in flight:
/// whether to request offset N + stride depends on learning that the page
/// at offset N was non-empty. Termination is decided solely by an empty
/// batch; the server's declared total is never consulted.
///
/// # Example
///
/// ```rust,no_run
/// use remand_stats::sources::{GovCollectorClient, PaginatedCollector};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = GovCollectorClient::new()?;
/// let collector = PaginatedCollector::new(client);
/// let records = collector.collect().await?;
/// println!("collected {} records", records.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct PaginatedCollector<F> {
    fetcher: F,
    stride: usize,
}

impl<F: PageFetcher> PaginatedCollector<F> {
    /// Creates a collector with the default stride of 20.
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            stride: DEFAULT_STRIDE,
        }
    }

    /// Creates a collector with a custom stride.
    ///
    /// The stride must be positive and must equal the fetcher's page size.
    pub fn with_stride(fetcher: F, stride: usize) -> SourceResult<Self> {
        if stride == 0 {
            return Err(SourceError::ZeroStride);
        }
        Ok(Self { fetcher, stride })
    }

    /// Returns the configured stride.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// A lazy, single-pass, forward-only stream of record batches, one per
    /// page, ending at the first empty batch.
    ///
    /// The stream is non-restartable; abandoning it mid-way holds no state
    /// beyond the request in flight.
    pub fn pages(&self) -> impl Stream<Item = SourceResult<Vec<Record>>> + '_ {
        stream::try_unfold(0usize, move |offset| async move {
            let Page { records, raw_total } = self.fetcher.fetch_page(offset).await?;
            if records.is_empty() {
                return Ok(None);
            }
            debug!(
                offset,
                batch = records.len(),
                declared_total = raw_total,
                "fetched page"
            );
            Ok(Some((records, offset + self.stride)))
        })
    }

    /// Drains [`pages`](Self::pages) into the exhaustive record sequence,
    /// in arrival order.
    ///
    /// An empty first page yields an empty sequence, which is a valid
    /// result, not an error. A failed page request aborts the whole
    /// collection.
    #[instrument(skip(self), fields(stride = self.stride))]
    pub async fn collect(&self) -> SourceResult<Vec<Record>> {
        let pages = self.pages();
        futures::pin_mut!(pages);

        let mut records = Vec::new();
        while let Some(batch) = pages.try_next().await? {
            records.extend(batch);
        }
        debug!(total = records.len(), "collection exhausted");
        Ok(records)
    }
}
