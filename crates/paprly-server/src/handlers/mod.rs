//! Request handlers: summarization, arXiv search and arXiv lookup.
//!
//! Each handler is a plain async function over an [`AppContext`] so it can be
//! exercised without the HTTP layer.

mod lookup;
mod search;
mod summarize;

use std::sync::Arc;

pub use lookup::lookup;
pub use search::search;
pub use summarize::summarize;

use crate::client::ArxivClient;
use crate::config::Config;
use crate::summarizer::{HttpSummarizer, Summarizer};

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppContext {
    /// arXiv API client.
    pub arxiv: Arc<ArxivClient>,

    /// Summarization model handle, built once at startup.
    pub summarizer: Arc<dyn Summarizer>,
}

impl AppContext {
    /// Create a new context from already constructed collaborators.
    #[must_use]
    pub fn new(arxiv: Arc<ArxivClient>, summarizer: Arc<dyn Summarizer>) -> Self {
        Self { arxiv, summarizer }
    }

    /// Build the production collaborators from configuration.
    ///
    /// # Errors
    ///
    /// Returns error if an HTTP client cannot be initialized.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let arxiv = ArxivClient::new(config)?;
        let summarizer = HttpSummarizer::new(config)?;
        tracing::info!(model = summarizer.model(), "Summarization backend ready");

        Ok(Self::new(Arc::new(arxiv), Arc::new(summarizer)))
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("arxiv", &self.arxiv)
            .field("model", &self.summarizer.model())
            .finish()
    }
}
