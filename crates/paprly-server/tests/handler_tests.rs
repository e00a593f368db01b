//! Handler tests with an in-process summarization model.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use paprly_server::client::ArxivClient;
use paprly_server::config::Config;
use paprly_server::error::{ApiError, ClientError, ClientResult};
use paprly_server::handlers::{self, AppContext};
use paprly_server::models::{SearchRequest, SearchResponse, SummarizeRequest};
use paprly_server::summarizer::{SummarizationRequest, SummaryCandidate, Summarizer};

/// Records what it was asked and answers with fixed candidates.
#[derive(Default)]
struct RecordingSummarizer {
    seen: Mutex<Vec<SummarizationRequest>>,
    fail: bool,
}

#[async_trait]
impl Summarizer for RecordingSummarizer {
    fn model(&self) -> &str {
        "recording"
    }

    async fn summarize(
        &self,
        request: &SummarizationRequest,
    ) -> ClientResult<Vec<SummaryCandidate>> {
        self.seen.lock().unwrap().push(request.clone());
        if self.fail {
            return Err(ClientError::status(500, "CUDA out of memory"));
        }
        Ok(vec![
            SummaryCandidate { summary_text: "first".to_string() },
            SummaryCandidate { summary_text: "second".to_string() },
        ])
    }
}

fn context(summarizer: Arc<RecordingSummarizer>) -> AppContext {
    // No arXiv calls are made against this address in these tests.
    let arxiv = ArxivClient::new(&Config::for_testing("http://127.0.0.1:9")).unwrap();
    AppContext::new(Arc::new(arxiv), summarizer)
}

#[tokio::test]
async fn test_summarize_defaults() {
    let model = Arc::new(RecordingSummarizer::default());
    let ctx = context(Arc::clone(&model));

    let result = handlers::summarize(
        &ctx,
        SummarizeRequest { text: "\n  Some text to shorten.  ".to_string(), max_length: None },
    )
    .await
    .unwrap();

    assert_eq!(result.summary, "first");

    let seen = model.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(
        seen[0],
        SummarizationRequest {
            text: "Some text to shorten.".to_string(),
            max_length: 150,
            min_length: 25,
            do_sample: false,
        }
    );
}

#[tokio::test]
async fn test_summarize_custom_length() {
    let model = Arc::new(RecordingSummarizer::default());
    let ctx = context(Arc::clone(&model));

    handlers::summarize(&ctx, SummarizeRequest { text: "text".to_string(), max_length: Some(60) })
        .await
        .unwrap();

    let seen = model.seen.lock().unwrap();
    assert_eq!(seen[0].max_length, 60);
    assert_eq!(seen[0].min_length, 25);
}

#[tokio::test]
async fn test_summarize_zero_length_rejected() {
    let model = Arc::new(RecordingSummarizer::default());
    let ctx = context(Arc::clone(&model));

    let err = handlers::summarize(
        &ctx,
        SummarizeRequest { text: "text".to_string(), max_length: Some(0) },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ApiError::Validation { ref field, .. } if field == "max_length"));
    assert!(model.seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_summarize_model_error_propagates() {
    let model = Arc::new(RecordingSummarizer { fail: true, ..Default::default() });
    let ctx = context(model);

    let err = handlers::summarize(
        &ctx,
        SummarizeRequest { text: "text".to_string(), max_length: None },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ApiError::Model(ref msg) if msg.contains("CUDA out of memory")));
}

#[tokio::test]
async fn test_search_transport_failure_is_swallowed() {
    let ctx = context(Arc::new(RecordingSummarizer::default()));

    let response = handlers::search(
        &ctx,
        SearchRequest {
            query: "graphs".to_string(),
            max_results: Some(2),
            sort_by: None,
            sort_order: None,
        },
    )
    .await;

    assert!(matches!(response, SearchResponse::Error { .. }));
}

#[tokio::test]
async fn test_lookup_transport_failure_is_internal() {
    let ctx = context(Arc::new(RecordingSummarizer::default()));

    let err = handlers::lookup(&ctx, "2101.00001").await.unwrap_err();

    assert!(matches!(err, ApiError::Internal(_)), "got {err:?}");
}
