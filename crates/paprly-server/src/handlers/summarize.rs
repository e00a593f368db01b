//! Text summarization.

use super::AppContext;
use crate::config::summary;
use crate::error::{ApiError, ApiResult};
use crate::models::{SummarizeRequest, SummaryResult};
use crate::summarizer::SummarizationRequest;

/// Summarize `request.text` with the configured model.
///
/// The text is trimmed first. The model is bounded by `max_length` (default
/// 150) and a minimum of 25 tokens, clamped so it never exceeds the maximum,
/// with deterministic decoding. Only the first candidate is returned.
pub async fn summarize(ctx: &AppContext, request: SummarizeRequest) -> ApiResult<SummaryResult> {
    let max_length = request.max_length();
    let text = request.text.trim();

    if text.is_empty() {
        return Err(ApiError::validation("text", "cannot be empty"));
    }
    if max_length == 0 {
        return Err(ApiError::validation("max_length", "must be greater than zero"));
    }

    let model_request = SummarizationRequest {
        text: text.to_string(),
        max_length,
        min_length: summary::MIN_LENGTH.min(max_length),
        do_sample: false,
    };

    tracing::debug!(
        model = ctx.summarizer.model(),
        chars = model_request.text.len(),
        max_length,
        "Summarizing text"
    );

    let candidates = ctx
        .summarizer
        .summarize(&model_request)
        .await
        .map_err(|e| ApiError::Model(e.to_string()))?;

    let first = candidates
        .into_iter()
        .next()
        .ok_or_else(|| ApiError::Model("model returned no candidates".to_string()))?;

    Ok(SummaryResult { summary: first.summary_text })
}
