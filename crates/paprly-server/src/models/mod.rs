//! Data models shared by the handlers.
//!
//! Request bodies use snake_case like the original web client sends them;
//! `PaperRecord` is serialized with camelCase field names.

pub mod arxiv_id;
mod enums;
mod inputs;
mod paper;

pub use arxiv_id::{ArxivInput, classify, lookup_id, strip_version};
pub use enums::{SortCriterion, SortOrder};
pub use inputs::{SearchRequest, SummarizeRequest};
pub use paper::{
    FeedEntry, PaperRecord, SearchResponse, SummaryResult, collapse_whitespace, id_from_url,
    iso_date,
};
