//! Paprly Server
//!
//! Backend for the Paprly reading list: summarizes text with a pretrained
//! sequence-to-sequence model, searches arXiv and looks up single arXiv papers.
//!
//! # Endpoints
//!
//! - `GET /health`
//! - `POST /summarize` with `{text, max_length?}`
//! - `POST /arxiv_search` with `{query, max_results?, sort_by?, sort_order?}`
//! - `GET /arxiv_paper/{arxiv_id}`
//!
//! Search and lookup both return [`models::PaperRecord`], normalized by the
//! same code path.
//!
//! # Example
//!
//! ```no_run
//! use paprly_server::{config::Config, server::PaprlyServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     PaprlyServer::new(&config)?.run_http(8000).await
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod server;
pub mod summarizer;

pub use client::ArxivClient;
pub use config::Config;
pub use error::{ApiError, ClientError};
pub use handlers::AppContext;
