//! Neighborhood search requests: resolve a street address or coordinate to
//! the Yelp neighborhoods containing it.

use serde::Serialize;

use crate::error::Result;
use crate::models::ResponseFormat;
use crate::query::{ParamList, ParamValue};
use crate::request::{require, RequestCore, SearchRequest};

/// Endpoint shared by both neighborhood search addressing modes.
pub const NEIGHBORHOOD_SEARCH_URL: &str = "http://api.yelp.com/neighborhood_search";

/// Neighborhood search addressed by a street address.
///
/// Required fields: `address`, `city`, `state`, and `yws_id`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    address: String,
    city: String,
    state: String,
    country: Option<String>,
    core: RequestCore,
}

impl Location {
    /// Creates a builder with no fields set.
    pub fn builder() -> LocationBuilder {
        LocationBuilder::default()
    }
}

impl SearchRequest for Location {
    fn base_url(&self) -> &str {
        NEIGHBORHOOD_SEARCH_URL
    }

    fn to_params(&self) -> ParamList {
        vec![
            ("address", Some(ParamValue::from(self.address.as_str()))),
            ("city", Some(ParamValue::from(self.city.as_str()))),
            ("state", Some(ParamValue::from(self.state.as_str()))),
            ("country", self.country.as_deref().map(ParamValue::from)),
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

/// Builder for [`Location`].
#[derive(Debug, Clone)]
pub struct LocationBuilder {
    address: Option<String>,
    city: Option<String>,
    state: Option<String>,
    country: Option<String>,
    yws_id: Option<String>,
    response_format: ResponseFormat,
    compress_response: bool,
}

impl Default for LocationBuilder {
    fn default() -> Self {
        Self {
            address: None,
            city: None,
            state: None,
            country: None,
            yws_id: None,
            response_format: ResponseFormat::default(),
            compress_response: true,
        }
    }
}

impl LocationBuilder {
    /// Street address.
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// City name.
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// State code.
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Country code. Optional.
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
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

    pub fn build(self) -> Result<Location> {
        Ok(Location {
            address: require(self.address, "address")?,
            city: require(self.city, "city")?,
            state: require(self.state, "state")?,
            country: self.country,
            core: RequestCore {
                yws_id: require(self.yws_id, "yws_id")?,
                response_format: self.response_format,
                compress_response: self.compress_response,
            },
        })
    }
}

/// Neighborhood search addressed by a single coordinate.
///
/// Required fields: `latitude`, `longitude`, and `yws_id`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
    core: RequestCore,
}

impl GeoPoint {
    /// Creates a builder with no fields set.
    pub fn builder() -> GeoPointBuilder {
        GeoPointBuilder::default()
    }
}

impl SearchRequest for GeoPoint {
    fn base_url(&self) -> &str {
        NEIGHBORHOOD_SEARCH_URL
    }

    fn to_params(&self) -> ParamList {
        vec![
            ("lat", Some(ParamValue::from(self.latitude))),
            ("long", Some(ParamValue::from(self.longitude))),
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

/// Builder for [`GeoPoint`].
#[derive(Debug, Clone)]
pub struct GeoPointBuilder {
    latitude: Option<f64>,
    longitude: Option<f64>,
    yws_id: Option<String>,
    response_format: ResponseFormat,
    compress_response: bool,
}

impl Default for GeoPointBuilder {
    fn default() -> Self {
        Self {
            latitude: None,
            longitude: None,
            yws_id: None,
            response_format: ResponseFormat::default(),
            compress_response: true,
        }
    }
}

impl GeoPointBuilder {
    /// Latitude of the point to resolve.
    pub fn latitude(mut self, latitude: f64) -> Self {
        self.latitude = Some(latitude);
        self
    }

    /// Longitude of the point to resolve.
    pub fn longitude(mut self, longitude: f64) -> Self {
        self.longitude = Some(longitude);
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

    pub fn build(self) -> Result<GeoPoint> {
        Ok(GeoPoint {
            latitude: require(self.latitude, "latitude")?,
            longitude: require(self.longitude, "longitude")?,
            core: RequestCore {
                yws_id: require(self.yws_id, "yws_id")?,
                response_format: self.response_format,
                compress_response: self.compress_response,
            },
        })
    }
}
