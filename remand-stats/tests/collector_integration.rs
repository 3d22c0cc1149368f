//! Integration tests for the paginated collector against fake fetchers.

mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use futures::TryStreamExt;
use remand_stats::sources::{Page, PageFetcher, PaginatedCollector, SourceError, SourceResult};

use common::{population, SliceFetcher};

/// Counts how many page requests were issued.
#[derive(Debug)]
struct CountingFetcher {
    inner: SliceFetcher,
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl PageFetcher for CountingFetcher {
    async fn fetch_page(&self, offset: usize) -> SourceResult<Page> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.fetch_page(offset).await
    }
}

#[tokio::test]
async fn collects_every_record_exactly_once_for_various_strides() {
    for (total, stride) in [(0, 20), (1, 20), (19, 20), (20, 20), (47, 20), (10, 5), (9, 3)] {
        let records = population(total);
        let fetcher = SliceFetcher {
            records: records.clone(),
            page_size: stride,
        };
        let collector = PaginatedCollector::with_stride(fetcher, stride).unwrap();

        let collected = collector.collect().await.unwrap();
        assert_eq!(collected, records, "total={total} stride={stride}");
    }
}

#[tokio::test]
async fn issues_one_trailing_request_past_the_last_page() {
    // 40 records at stride 20: two full pages plus the empty page that
    // signals exhaustion.
    let calls = Arc::new(AtomicUsize::new(0));
    let fetcher = CountingFetcher {
        inner: SliceFetcher {
            records: population(40),
            page_size: 20,
        },
        calls: Arc::clone(&calls),
    };
    let collector = PaginatedCollector::new(fetcher);

    assert_eq!(collector.collect().await.unwrap().len(), 40);
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn short_final_page_still_requires_empty_page_to_terminate() {
    let calls = Arc::new(AtomicUsize::new(0));
    let fetcher = CountingFetcher {
        inner: SliceFetcher {
            records: population(25),
            page_size: 20,
        },
        calls: Arc::clone(&calls),
    };

    let collected = PaginatedCollector::new(fetcher).collect().await.unwrap();
    assert_eq!(collected.len(), 25);
    // Pages at 0 and 20 return records; the loop stops only once the page
    // at 40 comes back empty.
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn pages_stream_is_lazy_and_batched() {
    let calls = Arc::new(AtomicUsize::new(0));
    let fetcher = CountingFetcher {
        inner: SliceFetcher {
            records: population(60),
            page_size: 20,
        },
        calls: Arc::clone(&calls),
    };
    let collector = PaginatedCollector::new(fetcher);

    let pages = collector.pages();
    futures::pin_mut!(pages);

    let first = pages.try_next().await.unwrap().unwrap();
    assert_eq!(first.len(), 20);
    // One request per consumed batch; no prefetching.
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    let second = pages.try_next().await.unwrap().unwrap();
    assert_eq!(second.len(), 20);
    assert_eq!(second[0].number, "20");
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn declared_total_is_ignored_for_termination() {
    /// Lies about the total: claims far more records than it serves.
    #[derive(Debug)]
    struct InflatedTotalFetcher(SliceFetcher);

    #[async_trait]
    impl PageFetcher for InflatedTotalFetcher {
        async fn fetch_page(&self, offset: usize) -> SourceResult<Page> {
            let mut page = self.0.fetch_page(offset).await?;
            page.raw_total = 1_000_000;
            Ok(page)
        }
    }

    let fetcher = InflatedTotalFetcher(SliceFetcher {
        records: population(30),
        page_size: 20,
    });

    let collected = PaginatedCollector::new(fetcher).collect().await.unwrap();
    assert_eq!(collected.len(), 30);
}

#[tokio::test]
async fn mid_stream_failure_aborts_collection() {
    /// Fails on the second page.
    #[derive(Debug)]
    struct FlakyFetcher(SliceFetcher);

    #[async_trait]
    impl PageFetcher for FlakyFetcher {
        async fn fetch_page(&self, offset: usize) -> SourceResult<Page> {
            if offset >= 20 {
                return Err(SourceError::Status {
                    status: 502,
                    offset,
                });
            }
            self.0.fetch_page(offset).await
        }
    }

    let fetcher = FlakyFetcher(SliceFetcher {
        records: population(60),
        page_size: 20,
    });

    let err = PaginatedCollector::new(fetcher).collect().await.unwrap_err();
    assert!(matches!(err, SourceError::Status { status: 502, offset: 20 }));
}
