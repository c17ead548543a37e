//! Phone search requests: look a business up by its phone number.

use serde::Serialize;

use crate::error::Result;
use crate::models::ResponseFormat;
use crate::query::{ParamList, ParamValue};
use crate::request::{require, RequestCore, SearchRequest};

/// Endpoint for phone number search.
pub const PHONE_SEARCH_URL: &str = "http://api.yelp.com/phone_search";

/// Phone search for a single number. The number is submitted exactly as
/// given; the endpoint accepts digits with or without punctuation.
///
/// Required fields: `number` and `yws_id`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Number {
    number: String,
    core: RequestCore,
}

impl Number {
    /// Creates a builder with no fields set.
    pub fn builder() -> NumberBuilder {
        NumberBuilder::default()
    }
}

impl SearchRequest for Number {
    fn base_url(&self) -> &str {
        PHONE_SEARCH_URL
    }

    fn to_params(&self) -> ParamList {
        vec![
            ("phone", Some(ParamValue::from(self.number.as_str()))),
            ("yws_id", Some(ParamValue::from(self.core.yws_id.as_str()))),
        ]
    }

    fn response_format(&self) -> ResponseFormat {
        self.core.response_format
    }

    fn compress_response(&self) -> bool {
        self.core.compress_response
    }
}

/// Builder for [`Number`].
#[derive(Debug, Clone)]
pub struct NumberBuilder {
    number: Option<String>,
    yws_id: Option<String>,
    response_format: ResponseFormat,
    compress_response: bool,
}

impl Default for NumberBuilder {
    fn default() -> Self {
        Self {
            number: None,
            yws_id: None,
            response_format: ResponseFormat::default(),
            compress_response: true,
        }
    }
}

impl NumberBuilder {
    /// Phone number to look up.
    pub fn number(mut self, number: impl Into<String>) -> Self {
        self.number = Some(number.into());
        self
    }

    /// Yelp web service id. Required.
    pub fn yws_id(mut self, yws_id: impl Into<String>) -> Self {
        self.yws_id = Some(yws_id.into());
        self
    }

    /// Format the response body is decoded with. Defaults to JSON.
    pub fn response_format(mut self, format: ResponseFormat) -> Self {
        self.response_format = format;
        self
    }

    /// Whether to request a gzip-compressed transfer. Defaults to `true`.
    pub fn compress_response(mut self, compress: bool) -> Self {
        self.compress_response = compress;
        self
    }

    pub fn build(self) -> Result<Number> {
        Ok(Number {
            number: require(self.number, "number")?,
            core: RequestCore {
                yws_id: require(self.yws_id, "yws_id")?,
                response_format: self.response_format,
                compress_response: self.compress_response,
            },
        })
    }
}
