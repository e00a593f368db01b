//! Single-paper lookup by arXiv id.

use super::AppContext;
use crate::error::{ApiError, ApiResult, ClientError};
use crate::models::{PaperRecord, lookup_id};

/// Fetch one paper by id.
///
/// The id may carry a version suffix or be written as an `arXiv:` reference,
/// DOI or arxiv.org URL; the request always goes out for the unversioned id.
///
/// # Errors
///
/// - `ApiError::Upstream` when arXiv answers with a non-success status
/// - `ApiError::NotFound` when the feed holds no entry for the id
/// - `ApiError::Internal` for transport or parse failures
pub async fn lookup(ctx: &AppContext, arxiv_id: &str) -> ApiResult<PaperRecord> {
    let id = lookup_id(arxiv_id);
    tracing::debug!(requested = arxiv_id, id = %id, "arXiv lookup");

    let entries = match ctx.arxiv.fetch_by_id(&id).await {
        Ok(entries) => entries,
        Err(ClientError::Status { status, .. }) => {
            tracing::warn!(id = %id, status, "arXiv lookup rejected upstream");
            return Err(ApiError::Upstream("arXiv API error".to_string()));
        }
        Err(e) => return Err(ApiError::internal(e.to_string())),
    };

    entries
        .into_iter()
        .find(|e| !e.is_api_error())
        .map(PaperRecord::from)
        .ok_or_else(|| ApiError::NotFound(format!("Paper {id} not found")))
}
