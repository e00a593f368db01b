//! arXiv identifier handling.
//!
//! Users paste ids in several shapes: `2410.12345`, `arXiv:2410.12345v2`,
//! `https://doi.org/10.48550/arXiv.2410.12345` or an abs/pdf URL.

use std::sync::LazyLock;

use regex::Regex;

static VERSION_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"v\d+$").expect("valid version regex"));

static BARE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\d{4}\.\d{4,5}(v\d+)?$").expect("valid id regex"));

static PREFIXED_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^arxiv:(\d{4}\.\d{4,5}(?:v\d+)?)$").expect("valid prefixed id regex")
});

static DOI_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:https?://)?(?:dx\.)?doi\.org/10\.48550/arxiv\.(\d{4}\.\d{4,5}(?:v\d+)?)$")
        .expect("valid doi regex")
});

/// Result of classifying user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArxivInput {
    /// A bare arXiv id, version suffix preserved.
    Id(String),
    /// Not recognizable as an arXiv reference.
    Unknown,
}

/// Remove a trailing `v<digits>` version marker.
///
/// `1234.5678v2` becomes `1234.5678`; ids without a suffix are returned as is.
#[must_use]
pub fn strip_version(id: &str) -> &str {
    VERSION_SUFFIX.find(id).map_or(id, |m| &id[..m.start()])
}

/// Work out which arXiv id, if any, the input refers to.
#[must_use]
pub fn classify(input: &str) -> ArxivInput {
    let s = input.trim();

    if BARE_ID.is_match(s) {
        return ArxivInput::Id(s.to_string());
    }

    if let Some(caps) = PREFIXED_ID.captures(s).or_else(|| DOI_ID.captures(s)) {
        return ArxivInput::Id(caps[1].to_string());
    }

    if let Ok(url) = url::Url::parse(s) {
        if url.host_str().is_some_and(|h| h.ends_with("arxiv.org")) {
            let last = url.path_segments().and_then(Iterator::last).unwrap_or("");
            let id = last.strip_suffix(".pdf").unwrap_or(last);
            if !id.is_empty() {
                return ArxivInput::Id(id.to_string());
            }
        }
    }

    ArxivInput::Unknown
}

/// Id sent upstream for a lookup: classified when possible, always unversioned.
#[must_use]
pub fn lookup_id(raw: &str) -> String {
    let id = match classify(raw) {
        ArxivInput::Id(id) => id,
        ArxivInput::Unknown => raw.trim().to_string(),
    };
    strip_version(&id).to_string()
}
