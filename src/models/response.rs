//! Decoded search responses.

use serde::Serialize;

/// The decoded result of one search, shaped by the request's
/// [`ResponseFormat`](crate::ResponseFormat).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SearchResponse {
    /// Body parsed into a JSON tree ([`ResponseFormat::Json`]).
    ///
    /// [`ResponseFormat::Json`]: crate::ResponseFormat::Json
    Json(serde_json::Value),
    /// Body passed through as text (every other format).
    Raw(String),
}

impl SearchResponse {
    /// The parsed JSON tree, if this response was decoded.
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            SearchResponse::Json(value) => Some(value),
            SearchResponse::Raw(_) => None,
        }
    }

    /// Consume the response, yielding the parsed JSON tree if present.
    pub fn into_json(self) -> Option<serde_json::Value> {
        match self {
            SearchResponse::Json(value) => Some(value),
            SearchResponse::Raw(_) => None,
        }
    }

    /// The passthrough body text, if this response was not decoded.
    pub fn as_raw(&self) -> Option<&str> {
        match self {
            SearchResponse::Json(_) => None,
            SearchResponse::Raw(text) => Some(text),
        }
    }

    /// Consume the response, yielding the passthrough text if present.
    pub fn into_raw(self) -> Option<String> {
        match self {
            SearchResponse::Json(_) => None,
            SearchResponse::Raw(text) => Some(text),
        }
    }
}
