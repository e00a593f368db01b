//! arXiv API client.
//!
//! Provides async HTTP client with:
//! - Connection pooling via reqwest
//! - Paged search exposed as a stream of feed entries
//! - Single-paper lookup by id with its own timeout

mod feed;

use std::time::Duration;

use async_stream::try_stream;
use futures::{Stream, TryStreamExt};
use reqwest::Client;
use url::Url;

pub use feed::parse_entries;

use crate::config::{Config, api};
use crate::error::{ClientError, ClientResult};
use crate::models::{FeedEntry, SortCriterion, SortOrder};

/// arXiv API client.
#[derive(Clone)]
pub struct ArxivClient {
    /// HTTP client.
    client: Client,

    /// Atom query endpoint.
    api_url: String,

    /// Timeout applied to id lookups.
    lookup_timeout: Duration,

    /// Entries requested per search page.
    page_size: usize,
}

impl ArxivClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("paprly-server/", env!("CARGO_PKG_VERSION")))
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(api::MAX_KEEPALIVE)
            .pool_idle_timeout(api::KEEPALIVE_EXPIRY)
            .gzip(true)
            .build()?;

        Ok(Self {
            client,
            api_url: config.arxiv_api_url.clone(),
            lookup_timeout: config.lookup_timeout,
            page_size: config.search_page_size.max(1),
        })
    }

    /// Query endpoint this client talks to.
    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Stream search results page by page, yielding at most `limit` entries.
    ///
    /// Stops early when arXiv returns a short or empty page.
    pub fn search_stream<'a>(
        &'a self,
        query: &'a str,
        limit: usize,
        sort_by: SortCriterion,
        sort_order: SortOrder,
    ) -> impl Stream<Item = ClientResult<FeedEntry>> + 'a {
        try_stream! {
            let mut start = 0;
            while start < limit {
                let page_len = self.page_size.min(limit - start);
                let url = self.search_url(query, start, page_len, sort_by, sort_order)?;

                tracing::debug!(%url, start, page_len, "Fetching arXiv search page");
                let response = self.client.get(url).send().await.map_err(ClientError::from)?;
                let body = Self::success_body(response).await?;
                let entries = parse_entries(body.as_bytes())?;

                let received = entries.len();
                for entry in entries.into_iter().take(page_len).filter(|e| !e.is_api_error()) {
                    yield entry;
                }

                if received < page_len {
                    break;
                }
                start += page_len;
            }
        }
    }

    /// Search arXiv and collect up to `max_results` entries.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, non-success status or a malformed feed.
    pub async fn search(
        &self,
        query: &str,
        max_results: usize,
        sort_by: SortCriterion,
        sort_order: SortOrder,
    ) -> ClientResult<Vec<FeedEntry>> {
        self.search_stream(query, max_results, sort_by, sort_order).try_collect().await
    }

    /// Fetch the feed for a single id.
    ///
    /// The id is sent as given; callers strip version suffixes beforehand.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Status` on a non-success status, other variants
    /// on transport or parse failure.
    pub async fn fetch_by_id(&self, id: &str) -> ClientResult<Vec<FeedEntry>> {
        let mut url = Url::parse(&self.api_url)?;
        url.query_pairs_mut().append_pair("id_list", id);

        tracing::debug!(%url, "Fetching arXiv entry");
        let response = self.client.get(url).timeout(self.lookup_timeout).send().await?;
        let body = Self::success_body(response).await?;

        parse_entries(body.as_bytes())
    }

    fn search_url(
        &self,
        query: &str,
        start: usize,
        max_results: usize,
        sort_by: SortCriterion,
        sort_order: SortOrder,
    ) -> ClientResult<Url> {
        let mut url = Url::parse(&self.api_url)?;
        url.query_pairs_mut()
            .append_pair("search_query", query)
            .append_pair("start", &start.to_string())
            .append_pair("max_results", &max_results.to_string())
            .append_pair("sortBy", sort_by.as_api_str())
            .append_pair("sortOrder", sort_order.as_api_str());
        Ok(url)
    }

    /// Read the body of a successful response, or turn the status into an error.
    async fn success_body(response: reqwest::Response) -> ClientResult<String> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "arXiv API returned an error status");
            return Err(ClientError::status(status.as_u16(), text));
        }

        Ok(response.text().await?)
    }
}

impl std::fmt::Debug for ArxivClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArxivClient")
            .field("api_url", &self.api_url)
            .field("page_size", &self.page_size)
            .finish_non_exhaustive()
    }
}
