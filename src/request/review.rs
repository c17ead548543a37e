//! Business review search requests.
//!
//! Three addressing modes target the same review search endpoint:
//! [`Location`] (street address), [`GeoPoint`] (single coordinate), and
//! [`BoundingBox`] (two corner coordinates). All three share the same wire
//! tail: optional radius, sort order, and result count cap, the required
//! search term, and an optional category filter.

use serde::Serialize;

use crate::error::Result;
use crate::models::ResponseFormat;
use crate::query::{ParamList, ParamValue};
use crate::request::{require, Category, RequestCore, SearchRequest};

/// Endpoint shared by all review search addressing modes.
pub const REVIEW_SEARCH_URL: &str = "http://api.yelp.com/business_review_search";

/// Sort orders accepted by the review search endpoint.
pub mod sort {
    /// Best matched first (the endpoint default).
    pub const BEST_MATCHED: u8 = 0;
    /// Nearest first.
    pub const DISTANCE: u8 = 1;
    /// Highest rated first.
    pub const HIGHEST_RATED: u8 = 2;
}

/// Filters and preferences shared by every review search addressing mode.
///
/// `append_params` is the single source of the shared wire tail, so the
/// three addressing modes cannot drift apart in parameter order.
#[derive(Debug, Clone, PartialEq, Serialize)]
struct ReviewCommon {
    term: String,
    radius: Option<u32>,
    sort: Option<u8>,
    business_count: Option<u32>,
    category: Option<Category>,
    core: RequestCore,
}

impl ReviewCommon {
    fn append_params(&self, params: &mut ParamList) {
        params.push(("radius", self.radius.map(ParamValue::from)));
        params.push(("sort", self.sort.map(ParamValue::from)));
        params.push((
            "num_biz_requested",
            self.business_count.map(ParamValue::from),
        ));
        params.push(("term", Some(ParamValue::from(self.term.as_str()))));
        params.push(("category", self.category.as_ref().map(Category::to_param)));
        params.push(("yws_id", Some(ParamValue::from(self.core.yws_id.as_str()))));
    }
}

/// Review search addressed by a street address.
///
/// Required fields: `address`, `city`, `state`, `term`, and `yws_id`.
///
/// # Example
///
/// ```
/// use yelp_client::request::review::Location;
///
/// let request = Location::builder()
///     .address("650 Mission St")
///     .city("San Francisco")
///     .state("CA")
///     .radius(2)
///     .term("cream puffs")
///     .yws_id("YWSID")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    address: String,
    city: String,
    state: String,
    country: Option<String>,
    common: ReviewCommon,
}

impl Location {
    /// Creates a builder with no fields set.
    pub fn builder() -> LocationBuilder {
        LocationBuilder::default()
    }
}

impl SearchRequest for Location {
    fn base_url(&self) -> &str {
        REVIEW_SEARCH_URL
    }

    fn to_params(&self) -> ParamList {
        let mut params: ParamList = Vec::with_capacity(10);
        params.push(("address", Some(ParamValue::from(self.address.as_str()))));
        params.push(("city", Some(ParamValue::from(self.city.as_str()))));
        params.push(("state", Some(ParamValue::from(self.state.as_str()))));
        params.push((
            "country",
            self.country.as_deref().map(ParamValue::from),
        ));
        self.common.append_params(&mut params);
        params
    }

    fn response_format(&self) -> ResponseFormat {
        self.common.core.response_format
    }

    fn compress_response(&self) -> bool {
        self.common.core.compress_response
    }
}

/// Builder for [`Location`]. `build` fails with
/// [`Error::Validation`](crate::Error::Validation) when a required field is
/// missing.
#[derive(Debug, Clone)]
pub struct LocationBuilder {
    address: Option<String>,
    city: Option<String>,
    state: Option<String>,
    country: Option<String>,
    term: Option<String>,
    radius: Option<u32>,
    sort: Option<u8>,
    business_count: Option<u32>,
    category: Option<Category>,
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
            term: None,
            radius: None,
            sort: None,
            business_count: None,
            category: None,
            yws_id: None,
            response_format: ResponseFormat::default(),
            compress_response: true,
        }
    }
}

impl LocationBuilder {
    /// Street address, e.g. `"650 Mission St"`.
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// City name.
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// State code, e.g. `"CA"`.
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Country code. Optional.
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Search term, e.g. `"cream puffs"`.
    pub fn term(mut self, term: impl Into<String>) -> Self {
        self.term = Some(term.into());
        self
    }

    /// Search radius in miles. Optional.
    pub fn radius(mut self, radius: u32) -> Self {
        self.radius = Some(radius);
        self
    }

    /// Sort order, one of the [`sort`] constants. Optional; the endpoint
    /// defaults to best matched.
    pub fn sort(mut self, sort: u8) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Cap on the number of businesses returned. Optional.
    pub fn business_count(mut self, count: u32) -> Self {
        self.business_count = Some(count);
        self
    }

    /// Category filter, a single token or a token sequence.
    pub fn category(mut self, category: impl Into<Category>) -> Self {
        self.category = Some(category.into());
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
            common: ReviewCommon {
                term: require(self.term, "term")?,
                radius: self.radius,
                sort: self.sort,
                business_count: self.business_count,
                category: self.category,
                core: RequestCore {
                    yws_id: require(self.yws_id, "yws_id")?,
                    response_format: self.response_format,
                    compress_response: self.compress_response,
                },
            },
        })
    }
}

/// Review search addressed by a single coordinate.
///
/// Required fields: `latitude`, `longitude`, `term`, and `yws_id`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
    common: ReviewCommon,
}

impl GeoPoint {
    /// Creates a builder with no fields set.
    pub fn builder() -> GeoPointBuilder {
        GeoPointBuilder::default()
    }
}

impl SearchRequest for GeoPoint {
    fn base_url(&self) -> &str {
        REVIEW_SEARCH_URL
    }

    fn to_params(&self) -> ParamList {
        let mut params: ParamList = Vec::with_capacity(8);
        params.push(("lat", Some(ParamValue::from(self.latitude))));
        params.push(("long", Some(ParamValue::from(self.longitude))));
        self.common.append_params(&mut params);
        params
    }

    fn response_format(&self) -> ResponseFormat {
        self.common.core.response_format
    }

    fn compress_response(&self) -> bool {
        self.common.core.compress_response
    }
}

/// Builder for [`GeoPoint`].
#[derive(Debug, Clone)]
pub struct GeoPointBuilder {
    latitude: Option<f64>,
    longitude: Option<f64>,
    term: Option<String>,
    radius: Option<u32>,
    sort: Option<u8>,
    business_count: Option<u32>,
    category: Option<Category>,
    yws_id: Option<String>,
    response_format: ResponseFormat,
    compress_response: bool,
}

impl Default for GeoPointBuilder {
    fn default() -> Self {
        Self {
            latitude: None,
            longitude: None,
            term: None,
            radius: None,
            sort: None,
            business_count: None,
            category: None,
            yws_id: None,
            response_format: ResponseFormat::default(),
            compress_response: true,
        }
    }
}

impl GeoPointBuilder {
    /// Latitude of the search center.
    pub fn latitude(mut self, latitude: f64) -> Self {
        self.latitude = Some(latitude);
        self
    }

    /// Longitude of the search center.
    pub fn longitude(mut self, longitude: f64) -> Self {
        self.longitude = Some(longitude);
        self
    }

    /// Search term.
    pub fn term(mut self, term: impl Into<String>) -> Self {
        self.term = Some(term.into());
        self
    }

    /// Search radius in miles. Optional.
    pub fn radius(mut self, radius: u32) -> Self {
        self.radius = Some(radius);
        self
    }

    /// Sort order, one of the [`sort`] constants. Optional.
    pub fn sort(mut self, sort: u8) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Cap on the number of businesses returned. Optional.
    pub fn business_count(mut self, count: u32) -> Self {
        self.business_count = Some(count);
        self
    }

    /// Category filter, a single token or a token sequence.
    pub fn category(mut self, category: impl Into<Category>) -> Self {
        self.category = Some(category.into());
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
            common: ReviewCommon {
                term: require(self.term, "term")?,
                radius: self.radius,
                sort: self.sort,
                business_count: self.business_count,
                category: self.category,
                core: RequestCore {
                    yws_id: require(self.yws_id, "yws_id")?,
                    response_format: self.response_format,
                    compress_response: self.compress_response,
                },
            },
        })
    }
}

/// Review search addressed by a bounding box: top-left and bottom-right
/// corner coordinates.
///
/// Required fields: all four corner coordinates, `term`, and `yws_id`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoundingBox {
    top_left_latitude: f64,
    top_left_longitude: f64,
    bottom_right_latitude: f64,
    bottom_right_longitude: f64,
    common: ReviewCommon,
}

impl BoundingBox {
    /// Creates a builder with no fields set.
    pub fn builder() -> BoundingBoxBuilder {
        BoundingBoxBuilder::default()
    }
}

impl SearchRequest for BoundingBox {
    fn base_url(&self) -> &str {
        REVIEW_SEARCH_URL
    }

    fn to_params(&self) -> ParamList {
        let mut params: ParamList = Vec::with_capacity(10);
        params.push(("tl_lat", Some(ParamValue::from(self.top_left_latitude))));
        params.push(("tl_long", Some(ParamValue::from(self.top_left_longitude))));
        params.push((
            "br_lat",
            Some(ParamValue::from(self.bottom_right_latitude)),
        ));
        params.push((
            "br_long",
            Some(ParamValue::from(self.bottom_right_longitude)),
        ));
        self.common.append_params(&mut params);
        params
    }

    fn response_format(&self) -> ResponseFormat {
        self.common.core.response_format
    }

    fn compress_response(&self) -> bool {
        self.common.core.compress_response
    }
}

/// Builder for [`BoundingBox`].
#[derive(Debug, Clone)]
pub struct BoundingBoxBuilder {
    top_left_latitude: Option<f64>,
    top_left_longitude: Option<f64>,
    bottom_right_latitude: Option<f64>,
    bottom_right_longitude: Option<f64>,
    term: Option<String>,
    radius: Option<u32>,
    sort: Option<u8>,
    business_count: Option<u32>,
    category: Option<Category>,
    yws_id: Option<String>,
    response_format: ResponseFormat,
    compress_response: bool,
}

impl Default for BoundingBoxBuilder {
    fn default() -> Self {
        Self {
            top_left_latitude: None,
            top_left_longitude: None,
            bottom_right_latitude: None,
            bottom_right_longitude: None,
            term: None,
            radius: None,
            sort: None,
            business_count: None,
            category: None,
            yws_id: None,
            response_format: ResponseFormat::default(),
            compress_response: true,
        }
    }
}

impl BoundingBoxBuilder {
    /// Latitude of the top-left corner.
    pub fn top_left_latitude(mut self, latitude: f64) -> Self {
        self.top_left_latitude = Some(latitude);
        self
    }

    /// Longitude of the top-left corner.
    pub fn top_left_longitude(mut self, longitude: f64) -> Self {
        self.top_left_longitude = Some(longitude);
        self
    }

    /// Latitude of the bottom-right corner.
    pub fn bottom_right_latitude(mut self, latitude: f64) -> Self {
        self.bottom_right_latitude = Some(latitude);
        self
    }

    /// Longitude of the bottom-right corner.
    pub fn bottom_right_longitude(mut self, longitude: f64) -> Self {
        self.bottom_right_longitude = Some(longitude);
        self
    }

    /// Search term.
    pub fn term(mut self, term: impl Into<String>) -> Self {
        self.term = Some(term.into());
        self
    }

    /// Search radius in miles. Optional.
    pub fn radius(mut self, radius: u32) -> Self {
        self.radius = Some(radius);
        self
    }

    /// Sort order, one of the [`sort`] constants. Optional.
    pub fn sort(mut self, sort: u8) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Cap on the number of businesses returned. Optional.
    pub fn business_count(mut self, count: u32) -> Self {
        self.business_count = Some(count);
        self
    }

    /// Category filter, a single token or a token sequence.
    pub fn category(mut self, category: impl Into<Category>) -> Self {
        self.category = Some(category.into());
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

    pub fn build(self) -> Result<BoundingBox> {
        Ok(BoundingBox {
            top_left_latitude: require(self.top_left_latitude, "top_left_latitude")?,
            top_left_longitude: require(self.top_left_longitude, "top_left_longitude")?,
            bottom_right_latitude: require(
                self.bottom_right_latitude,
                "bottom_right_latitude",
            )?,
            bottom_right_longitude: require(
                self.bottom_right_longitude,
                "bottom_right_longitude",
            )?,
            common: ReviewCommon {
                term: require(self.term, "term")?,
                radius: self.radius,
                sort: self.sort,
                business_count: self.business_count,
                category: self.category,
                core: RequestCore {
                    yws_id: require(self.yws_id, "yws_id")?,
                    response_format: self.response_format,
                    compress_response: self.compress_response,
                },
            },
        })
    }
}
