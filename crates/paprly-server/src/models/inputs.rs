//! Request bodies for the POST endpoints.

use serde::{Deserialize, Serialize};

use super::{SortCriterion, SortOrder};
use crate::config::{search, summary};

/// Body of `POST /summarize`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeRequest {
    /// Text to summarize.
    pub text: String,

    /// Upper bound on summary length in model tokens.
    #[serde(default)]
    pub max_length: Option<usize>,
}

impl SummarizeRequest {
    /// Requested length, or the default of 150.
    #[must_use]
    pub fn max_length(&self) -> usize {
        self.max_length.unwrap_or(summary::DEFAULT_MAX_LENGTH)
    }
}

/// Body of `POST /arxiv_search`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    /// arXiv search query.
    pub query: String,

    /// Maximum number of records to return.
    #[serde(default)]
    pub max_results: Option<usize>,

    /// Sort field name, e.g. `SubmittedDate`.
    #[serde(default)]
    pub sort_by: Option<String>,

    /// Sort direction, e.g. `Descending`.
    #[serde(default)]
    pub sort_order: Option<String>,
}

impl SearchRequest {
    /// Requested result count, or the default of 5.
    #[must_use]
    pub fn max_results(&self) -> usize {
        self.max_results.unwrap_or(search::DEFAULT_MAX_RESULTS)
    }

    /// Sort field with silent fallback.
    #[must_use]
    pub fn sort_by(&self) -> SortCriterion {
        SortCriterion::parse_or_default(self.sort_by.as_deref())
    }

    /// Sort direction with silent fallback.
    #[must_use]
    pub fn sort_order(&self) -> SortOrder {
        SortOrder::parse_or_default(self.sort_order.as_deref())
    }
}
