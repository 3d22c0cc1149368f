//! HTTP adapter for the gov.il dynamic collector proxy.
//!
//! A thin [`PageFetcher`] over the `DataGovProxy` endpoint that backs the
//! Israel Prison Service dataset. Session management, cookies, and retry
//! policy are deliberately out of scope; the adapter sends one plain JSON
//! query per page and decodes the result.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::core::Record;

use super::error::{SourceError, SourceResult};
use super::{Page, PageFetcher};

/// The public proxy endpoint for dynamic collector queries.
pub const DEFAULT_ENDPOINT: &str = "https://www.gov.il/he/api/DataGovProxy/GetDGResults";

/// The dynamic collector template for the detention dataset (`is-db`).
pub const DEFAULT_TEMPLATE_ID: &str = "c0bc61c0-94ce-4f8f-bde5-d63d057e231b";

/// Configuration for [`GovCollectorClient`].
#[derive(Debug, Clone)]
pub struct GovCollectorConfig {
    /// Endpoint URL for the collector proxy.
    pub endpoint: String,
    /// Dynamic collector template identifier.
    pub template_id: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for GovCollectorConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            template_id: DEFAULT_TEMPLATE_ID.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// [`PageFetcher`] implementation for the gov.il collector proxy.
#[derive(Debug, Clone)]
pub struct GovCollectorClient {
    config: GovCollectorConfig,
    client: Client,
}

/// Query body understood by the proxy. Field names follow the wire format.
#[derive(Debug, Serialize)]
struct QueryBody<'a> {
    #[serde(rename = "DynamicTemplateID")]
    template_id: &'a str,
    #[serde(rename = "QueryFilters")]
    query_filters: QueryFilters,
    #[serde(rename = "From")]
    from: usize,
}

#[derive(Debug, Serialize)]
struct QueryFilters {
    skip: SkipFilter,
}

#[derive(Debug, Serialize)]
struct SkipFilter {
    #[serde(rename = "Query")]
    query: usize,
}

/// Envelope around one page of results.
///
/// Each row's `Data` carries the record plus a `totalresults` decoration,
/// which is discarded here: only `Record` fields are kept.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(rename = "Results")]
    results: Vec<ResultRow>,
    #[serde(rename = "TotalResults")]
    total_results: u64,
}

#[derive(Debug, Deserialize)]
struct ResultRow {
    #[serde(rename = "Data")]
    data: Record,
}

impl GovCollectorClient {
    /// Creates a client with the default endpoint and template.
    pub fn new() -> SourceResult<Self> {
        Self::with_config(GovCollectorConfig::default())
    }

    /// Creates a client with the given configuration.
    pub fn with_config(config: GovCollectorConfig) -> SourceResult<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &GovCollectorConfig {
        &self.config
    }
}

#[async_trait]
impl PageFetcher for GovCollectorClient {
    #[instrument(skip(self), fields(endpoint = %self.config.endpoint))]
    async fn fetch_page(&self, offset: usize) -> SourceResult<Page> {
        let body = QueryBody {
            template_id: &self.config.template_id,
            query_filters: QueryFilters {
                skip: SkipFilter { query: offset },
            },
            from: offset,
        };

        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
                offset,
            });
        }

        let payload: ApiResponse = response
            .json()
            .await
            .map_err(|e| SourceError::decode(offset, e.to_string()))?;

        Ok(Page {
            records: payload.results.into_iter().map(|row| row.data).collect(),
            raw_total: payload.total_results,
        })
    }
}
