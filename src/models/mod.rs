//! Core data models for response formats and decoded search results.

mod format;
mod response;

pub use format::ResponseFormat;
pub use response::SearchResponse;
