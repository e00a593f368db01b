//! Summarization model backend.
//!
//! The model runs out of process behind a Hugging Face style inference
//! endpoint. A single [`Summarizer`] handle is built at startup and shared by
//! every request.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::{Config, api};
use crate::error::{ClientError, ClientResult};

/// Parameters for one model invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummarizationRequest {
    /// Input text, already trimmed.
    pub text: String,

    /// Upper bound on output length in model tokens.
    pub max_length: usize,

    /// Lower bound on output length in model tokens.
    pub min_length: usize,

    /// Sampled decoding; `false` means greedy/beam search.
    pub do_sample: bool,
}

/// One output candidate produced by the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryCandidate {
    /// Generated summary.
    pub summary_text: String,
}

/// A summarization model.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Model identifier for logging; the endpoint URL when the model is not named in it.
    fn model(&self) -> &str;

    /// Run the model and return its candidates, best first.
    async fn summarize(&self, request: &SummarizationRequest)
    -> ClientResult<Vec<SummaryCandidate>>;
}

#[derive(Serialize)]
struct InferencePayload<'a> {
    inputs: &'a str,
    parameters: InferenceParameters,
}

#[derive(Serialize)]
struct InferenceParameters {
    max_length: usize,
    min_length: usize,
    do_sample: bool,
}

/// Summarizer backed by an HTTP inference endpoint.
#[derive(Clone)]
pub struct HttpSummarizer {
    client: Client,
    url: String,
    token: Option<String>,
}

impl HttpSummarizer {
    /// Create a summarizer for the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("paprly-server/", env!("CARGO_PKG_VERSION")))
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(api::MAX_KEEPALIVE)
            .pool_idle_timeout(api::KEEPALIVE_EXPIRY)
            .build()?;

        Ok(Self {
            client,
            url: config.summarizer_url.clone(),
            token: config.summarizer_token.clone(),
        })
    }
}

#[async_trait]
impl Summarizer for HttpSummarizer {
    fn model(&self) -> &str {
        self.url.rsplit_once("/models/").map_or(self.url.as_str(), |(_, model)| model)
    }

    async fn summarize(
        &self,
        request: &SummarizationRequest,
    ) -> ClientResult<Vec<SummaryCandidate>> {
        let payload = InferencePayload {
            inputs: &request.text,
            parameters: InferenceParameters {
                max_length: request.max_length,
                min_length: request.min_length,
                do_sample: request.do_sample,
            },
        };

        let mut builder = self.client.post(&self.url).json(&payload);
        if let Some(ref token) = self.token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ClientError::status(status.as_u16(), text));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

impl std::fmt::Debug for HttpSummarizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpSummarizer")
            .field("url", &self.url)
            .field("has_token", &self.token.is_some())
            .finish_non_exhaustive()
    }
}
