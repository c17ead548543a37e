//! Query-string construction.
//!
//! [`build_url`] turns a base endpoint plus an ordered parameter list into
//! the exact URL submitted to Yelp. The parameter order in the URL is the
//! order of the list, which each request type fixes explicitly (see
//! [`SearchRequest::to_params`](crate::SearchRequest::to_params)) - nothing
//! here depends on map iteration order.

use std::borrow::Cow;

/// One wire parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// A plain scalar, percent-escaped when the URL is built.
    Scalar(String),
    /// An ordered token list emitted joined with a literal `+` and no
    /// escaping at all - Yelp's convention for multi-category filters. A `+`
    /// inside a token is indistinguishable from the delimiter on the wire;
    /// that is a limitation of the upstream format, not corrected here.
    Multi(Vec<String>),
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Scalar(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Scalar(value)
    }
}

impl From<u8> for ParamValue {
    fn from(value: u8) -> Self {
        ParamValue::Scalar(value.to_string())
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Scalar(value.to_string())
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Scalar(value.to_string())
    }
}

/// Ordered parameter list for one request. `None` values are fields the
/// caller left unset; they are omitted from the URL entirely, never encoded
/// as `key=`.
pub type ParamList = Vec<(&'static str, Option<ParamValue>)>;

/// Build the full query URL for `base_url` and `params`.
///
/// Deterministic and pure: identical inputs yield byte-identical URLs. The
/// first emitted pair follows a single `?` appended to the base URL and
/// subsequent pairs are separated by `&`. When every parameter is absent the
/// result keeps the trailing bare `?`, matching the upstream client this
/// crate is wire-compatible with.
pub fn build_url(base_url: &str, params: &ParamList) -> String {
    let mut url = String::with_capacity(base_url.len() + 64);
    url.push_str(base_url);
    url.push('?');

    let mut emitted = 0;
    for (key, value) in params {
        let Some(value) = value else { continue };
        if emitted > 0 {
            url.push('&');
        }
        url.push_str(key);
        url.push('=');
        match value {
            ParamValue::Scalar(scalar) => url.push_str(&escape(scalar)),
            ParamValue::Multi(tokens) => url.push_str(&tokens.join("+")),
        }
        emitted += 1;
    }
    url
}

fn escape(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}
