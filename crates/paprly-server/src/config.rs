//! Configuration for the Paprly server.

use std::time::Duration;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// arXiv Atom API endpoint (search and id lookup share it).
    pub const ARXIV_API: &str = "https://export.arxiv.org/api/query";

    /// Default summarization model.
    pub const SUMMARIZER_MODEL: &str = "facebook/bart-large-cnn";

    /// Hugging Face inference endpoint for the default model.
    pub const SUMMARIZER_URL: &str =
        "https://router.huggingface.co/hf-inference/models/facebook/bart-large-cnn";

    /// Request timeout for search and summarization calls.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(90);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Timeout for the single-paper feed fetch.
    pub const LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

    /// Entries requested per arXiv search page.
    pub const SEARCH_PAGE_SIZE: usize = 100;

    /// Origin of the web front end allowed through CORS.
    pub const CORS_ORIGIN: &str = "http://localhost:3000";

    /// Maximum keepalive connections.
    pub const MAX_KEEPALIVE: usize = 10;

    /// Keepalive expiry.
    pub const KEEPALIVE_EXPIRY: Duration = Duration::from_secs(30);
}

/// Summarization defaults.
pub mod summary {
    /// Upper bound on summary length when the request omits one.
    pub const DEFAULT_MAX_LENGTH: usize = 150;

    /// Lower bound passed to the model.
    pub const MIN_LENGTH: usize = 25;
}

/// Search defaults.
pub mod search {
    /// Number of results when the request omits `max_results`.
    pub const DEFAULT_MAX_RESULTS: usize = 5;
}

/// Server configuration.
#[derive(Clone)]
pub struct Config {
    /// arXiv API query endpoint (for testing with mock servers).
    pub arxiv_api_url: String,

    /// Summarization inference endpoint.
    pub summarizer_url: String,

    /// Bearer token for the summarization endpoint (optional).
    pub summarizer_token: Option<String>,

    /// Origin allowed by CORS.
    pub cors_origin: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Timeout for the single-paper lookup fetch.
    pub lookup_timeout: Duration,

    /// Entries per search page.
    pub search_page_size: usize,
}

impl Config {
    /// Create a new configuration with an optional summarizer token.
    #[must_use]
    pub fn new(summarizer_token: Option<String>) -> Self {
        Self {
            arxiv_api_url: api::ARXIV_API.to_string(),
            summarizer_url: api::SUMMARIZER_URL.to_string(),
            summarizer_token,
            cors_origin: api::CORS_ORIGIN.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            lookup_timeout: api::LOOKUP_TIMEOUT,
            search_page_size: api::SEARCH_PAGE_SIZE,
        }
    }

    /// Create a test configuration with custom URLs for mock servers.
    ///
    /// The arXiv API lives at `{base_url}/api/query` and the summarizer at
    /// `{base_url}/summarize`.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            arxiv_api_url: format!("{}/api/query", base_url),
            summarizer_url: format!("{}/summarize", base_url),
            summarizer_token: None,
            cors_origin: api::CORS_ORIGIN.to_string(),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            lookup_timeout: Duration::from_secs(2),
            search_page_size: api::SEARCH_PAGE_SIZE,
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::new(std::env::var("SUMMARIZER_API_TOKEN").ok());

        if let Ok(url) = std::env::var("ARXIV_API_URL") {
            config.arxiv_api_url = url;
        }
        if let Ok(url) = std::env::var("SUMMARIZER_URL") {
            config.summarizer_url = url;
        }
        if let Ok(origin) = std::env::var("CORS_ORIGIN") {
            config.cors_origin = origin;
        }
        if let Ok(size) = std::env::var("ARXIV_PAGE_SIZE") {
            config.search_page_size = size.parse()?;
        }

        Ok(config)
    }

    /// Check if a summarizer token is configured.
    #[must_use]
    pub const fn has_summarizer_token(&self) -> bool {
        self.summarizer_token.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None)
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("arxiv_api_url", &self.arxiv_api_url)
            .field("summarizer_url", &self.summarizer_url)
            .field("has_summarizer_token", &self.has_summarizer_token())
            .field("cors_origin", &self.cors_origin)
            .field("request_timeout", &self.request_timeout)
            .field("lookup_timeout", &self.lookup_timeout)
            .field("search_page_size", &self.search_page_size)
            .finish_non_exhaustive()
    }
}
