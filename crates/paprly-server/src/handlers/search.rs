//! arXiv search.

use super::AppContext;
use crate::models::{PaperRecord, SearchRequest, SearchResponse};

/// Search arXiv and normalize each hit into a [`PaperRecord`].
///
/// Never fails: any error is reported as `SearchResponse::Error`.
pub async fn search(ctx: &AppContext, request: SearchRequest) -> SearchResponse {
    let max_results = request.max_results();
    let sort_by = request.sort_by();
    let sort_order = request.sort_order();

    tracing::info!(
        query = %request.query,
        max_results,
        sort_by = sort_by.name(),
        sort_order = sort_order.as_api_str(),
        "arXiv search"
    );

    match ctx.arxiv.search(&request.query, max_results, sort_by, sort_order).await {
        Ok(entries) => SearchResponse::Results {
            results: entries.into_iter().map(PaperRecord::from).collect(),
        },
        Err(e) => {
            tracing::warn!(query = %request.query, error = %e, "arXiv search failed");
            SearchResponse::Error { error: e.to_string() }
        }
    }
}
