//! Paper record and the normalization that produces it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry of an arXiv Atom feed, independent of how it was fetched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedEntry {
    /// Canonical entry URL (`<id>` element), e.g. `http://arxiv.org/abs/2101.00001v1`.
    pub id: String,

    /// Entry title.
    pub title: String,

    /// Abstract text.
    pub summary: String,

    /// Author names in feed order.
    pub authors: Vec<String>,

    /// First publication timestamp.
    pub published: Option<DateTime<Utc>>,
}

impl FeedEntry {
    /// arXiv reports an unknown or malformed id as a single entry whose id
    /// points at its error documentation instead of an abstract page.
    #[must_use]
    pub fn is_api_error(&self) -> bool {
        self.id.contains("arxiv.org/api/errors")
    }
}

/// Flat paper record returned by both search and lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaperRecord {
    /// Last path segment of `url`.
    pub id: String,

    /// Title on one line; `arXiv:<id>` when upstream sends none.
    pub title: String,

    /// Abstract on one line.
    pub r#abstract: String,

    /// Author names joined with `", "`.
    pub contributors: String,

    /// RFC 3339 publication timestamp.
    pub date_published: Option<String>,

    /// Canonical entry URL.
    pub url: String,
}

impl From<FeedEntry> for PaperRecord {
    fn from(entry: FeedEntry) -> Self {
        let id = id_from_url(&entry.id).to_string();
        let title = match collapse_whitespace(&entry.title) {
            t if t.is_empty() => format!("arXiv:{id}"),
            t => t,
        };

        Self {
            id,
            title,
            r#abstract: collapse_whitespace(&entry.summary),
            contributors: entry.authors.join(", "),
            date_published: iso_date(entry.published),
            url: entry.id,
        }
    }
}

/// Summarization response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResult {
    /// Primary summary text of the first model candidate.
    pub summary: String,
}

/// Search response body.
///
/// Failures are reported in the body, never through the status code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SearchResponse {
    /// Normalized results, at most `max_results` long.
    Results {
        /// Records in upstream order.
        results: Vec<PaperRecord>,
    },
    /// Any failure during the search.
    Error {
        /// Failure message.
        error: String,
    },
}

/// Last `/`-delimited segment of an entry URL.
#[must_use]
pub fn id_from_url(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}

/// Collapse runs of whitespace (Atom text wraps with indentation) to single spaces.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Format a publication timestamp the same way for every endpoint.
#[must_use]
pub fn iso_date(published: Option<DateTime<Utc>>) -> Option<String> {
    published.map(|d| d.to_rfc3339())
}
