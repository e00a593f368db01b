//! Atom feed parsing.

use feed_rs::model::Entry;

use crate::error::ClientResult;
use crate::models::FeedEntry;

/// Parse an arXiv Atom response body into entries, in feed order.
pub fn parse_entries(body: &[u8]) -> ClientResult<Vec<FeedEntry>> {
    let feed = feed_rs::parser::parse(body)?;
    Ok(feed.entries.into_iter().map(into_entry).collect())
}

fn into_entry(entry: Entry) -> FeedEntry {
    FeedEntry {
        id: entry.id,
        title: entry.title.map(|t| t.content).unwrap_or_default(),
        summary: entry.summary.map(|t| t.content).unwrap_or_default(),
        authors: entry.authors.into_iter().map(|p| p.name).collect(),
        published: entry.published,
    }
}
