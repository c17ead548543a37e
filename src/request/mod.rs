//! Request types for the Yelp v1 search endpoints.
//!
//! This module defines the [`SearchRequest`] trait that all request types
//! implement, and one submodule per search family:
//!
//! - [`review`]: business review search, addressed by street address
//!   ([`review::Location`]), coordinate ([`review::GeoPoint`]), or bounding
//!   box ([`review::BoundingBox`])
//! - [`neighborhood`]: neighborhood lookup for an address or coordinate
//! - [`phone`]: business lookup by phone number
//!
//! A new addressing mode is added by implementing [`SearchRequest`]; the
//! [`Client`](crate::Client) only ever talks to the trait.
//!
//! Every request is built through its builder, which validates required
//! fields and fails with [`Error::Validation`] before anything touches the
//! network. Built requests are immutable.

use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::models::ResponseFormat;
use crate::query::{ParamList, ParamValue};

pub mod neighborhood;
pub mod phone;
pub mod review;

/// The contract every Yelp request type fulfils.
///
/// A request knows its fixed endpoint and how to lay out its own wire
/// parameters; the [`Client`](crate::Client) turns that into a URL, submits
/// it, and decodes the response per [`SearchRequest::response_format`].
pub trait SearchRequest: fmt::Debug + Send + Sync {
    /// Fixed endpoint this request is submitted to. Never empty.
    fn base_url(&self) -> &str;

    /// Ordered wire parameters. The URL's parameter order is exactly the
    /// order of this list; optional fields left unset are carried as `None`
    /// and omitted from the URL entirely.
    fn to_params(&self) -> ParamList;

    /// Format the response body is decoded with.
    fn response_format(&self) -> ResponseFormat;

    /// Whether a gzip-compressed transfer is requested.
    fn compress_response(&self) -> bool;
}

/// Category filter: a single token or an ordered sequence of tokens.
///
/// The two shapes are preserved rather than normalized because they encode
/// differently on the wire: a single token is percent-escaped like any other
/// scalar, while a sequence is joined with a literal unescaped `+` (see
/// [`ParamValue::Multi`]).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Category {
    /// One category token.
    One(String),
    /// An ordered sequence of category tokens.
    Many(Vec<String>),
}

impl Category {
    pub(crate) fn to_param(&self) -> ParamValue {
        match self {
            Category::One(token) => ParamValue::Scalar(token.clone()),
            Category::Many(tokens) => ParamValue::Multi(tokens.clone()),
        }
    }
}

impl From<&str> for Category {
    fn from(token: &str) -> Self {
        Category::One(token.to_string())
    }
}

impl From<String> for Category {
    fn from(token: String) -> Self {
        Category::One(token)
    }
}

impl From<Vec<String>> for Category {
    fn from(tokens: Vec<String>) -> Self {
        Category::Many(tokens)
    }
}

impl From<Vec<&str>> for Category {
    fn from(tokens: Vec<&str>) -> Self {
        Category::Many(tokens.into_iter().map(str::to_string).collect())
    }
}

/// Fields shared by every request family: the caller's credential and the
/// response handling preferences.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct RequestCore {
    pub yws_id: String,
    pub response_format: ResponseFormat,
    pub compress_response: bool,
}

/// Builder-time validation: a `None` required field becomes an
/// [`Error::Validation`] naming the field.
pub(crate) fn require<T>(field: Option<T>, name: &'static str) -> Result<T> {
    field.ok_or_else(|| Error::Validation(format!("missing required field: {}", name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_single_token() {
        assert_eq!(Category::from("playgrounds"), Category::One("playgrounds".to_string()));
        assert_eq!(
            Category::from("icecream".to_string()),
            Category::One("icecream".to_string())
        );
    }

    #[test]
    fn test_category_from_token_sequence() {
        let expected = Category::Many(vec!["playgrounds".to_string(), "icecream".to_string()]);
        assert_eq!(Category::from(vec!["playgrounds", "icecream"]), expected);
        assert_eq!(
            Category::from(vec!["playgrounds".to_string(), "icecream".to_string()]),
            expected
        );
    }

    #[test]
    fn test_category_param_shapes() {
        assert_eq!(
            Category::from("a b").to_param(),
            ParamValue::Scalar("a b".to_string())
        );
        assert_eq!(
            Category::from(vec!["a", "b"]).to_param(),
            ParamValue::Multi(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn test_require() {
        assert_eq!(require(Some(1), "radius").unwrap(), 1);
        let err = require::<u32>(None, "radius").unwrap_err();
        assert!(matches!(err, Error::Validation(ref message)
            if message == "missing required field: radius"));
    }
}
