//! Integration tests for the Yelp search client.
//!
//! These tests drive the full search path against a local mock endpoint:
//! exact URL construction, header submission, gzip transfer, decoding, and
//! the debug log stream.

use std::io::Write;
use std::sync::{Arc, Mutex};

use flate2::write::GzEncoder;
use flate2::Compression;
use mockito::{Matcher, Server, ServerGuard};

use yelp_client::query::ParamList;
use yelp_client::request::{neighborhood, phone, review};
use yelp_client::{
    Client, Error, LogSink, ResponseFormat, SearchRequest, SearchResponse, DEFAULT_AGENT,
};

/// Test double that points a request at the mock server instead of the
/// production endpoint, keeping path, parameters, and preferences identical.
#[derive(Debug)]
struct Rehosted<R> {
    base_url: String,
    inner: R,
}

impl<R: SearchRequest> Rehosted<R> {
    fn new(server: &ServerGuard, inner: R) -> Self {
        let path = inner
            .base_url()
            .rsplit('/')
            .next()
            .expect("endpoint has a path");
        Self {
            base_url: format!("{}/{}", server.url(), path),
            inner,
        }
    }
}

impl<R: SearchRequest> SearchRequest for Rehosted<R> {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn to_params(&self) -> ParamList {
        self.inner.to_params()
    }

    fn response_format(&self) -> ResponseFormat {
        self.inner.response_format()
    }

    fn compress_response(&self) -> bool {
        self.inner.compress_response()
    }
}

/// Sink that keeps every debug line for inspection.
#[derive(Debug, Default)]
struct CaptureSink {
    lines: Mutex<Vec<String>>,
}

impl CaptureSink {
    fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl LogSink for CaptureSink {
    fn debug(&self, message: &str) {
        self.lines.lock().unwrap().push(message.to_string());
    }
}

const CREAM_PUFFS_QUERY: &str = "address=650%20Mission%20St&city=San%20Francisco&state=CA\
                                 &radius=2&term=cream%20puffs&yws_id=YWSID";

fn cream_puffs() -> review::Location {
    review::Location::builder()
        .address("650 Mission St")
        .city("San Francisco")
        .state("CA")
        .radius(2)
        .term("cream puffs")
        .yws_id("YWSID")
        .build()
        .unwrap()
}

fn gzip(body: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(body).unwrap();
    encoder.finish().unwrap()
}

/// The concrete review search scenario: every populated parameter appears in
/// order, absent ones are omitted, the default headers go out, and the
/// gzipped JSON body comes back decoded.
#[tokio::test]
async fn test_review_search_submits_exact_url_and_decodes_gzipped_json() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock(
            "GET",
            format!("/business_review_search?{}", CREAM_PUFFS_QUERY).as_str(),
        )
        .match_header("User-Agent", DEFAULT_AGENT)
        .match_header("Accept-Encoding", "gzip,deflate")
        .with_header("content-encoding", "gzip")
        .with_body(gzip(br#"{"businesses":[{"name":"Beard Papa"}]}"#))
        .create_async()
        .await;

    let client = Client::new();
    let request = Rehosted::new(&server, cream_puffs());
    let response = client.search(&request).await.unwrap();

    mock.assert_async().await;
    let json = response.as_json().unwrap();
    assert_eq!(json["businesses"][0]["name"], "Beard Papa");
}

/// An uncompressed transfer sends no Accept-Encoding header at all, and a
/// custom agent replaces the default one.
#[tokio::test]
async fn test_uncompressed_transfer_omits_accept_encoding() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock(
            "GET",
            format!("/business_review_search?{}", CREAM_PUFFS_QUERY).as_str(),
        )
        .match_header("User-Agent", "my-app/1.0")
        .match_header("Accept-Encoding", Matcher::Missing)
        .with_body(r#"{"businesses":[]}"#)
        .create_async()
        .await;

    let client = Client::builder().agent("my-app/1.0").build().unwrap();
    let request = Rehosted::new(
        &server,
        review::Location::builder()
            .address("650 Mission St")
            .city("San Francisco")
            .state("CA")
            .radius(2)
            .term("cream puffs")
            .yws_id("YWSID")
            .compress_response(false)
            .build()
            .unwrap(),
    );
    let response = client.search(&request).await.unwrap();

    mock.assert_async().await;
    assert_eq!(
        response,
        SearchResponse::Json(serde_json::json!({"businesses": []}))
    );
}

/// Neighborhood requests go to the neighborhood endpoint with their own
/// parameter layout.
#[tokio::test]
async fn test_neighborhood_search_hits_neighborhood_endpoint() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock(
            "GET",
            "/neighborhood_search?lat=37.788022&long=-122.399797&yws_id=YWSID",
        )
        .with_body(r#"{"neighborhoods":[{"name":"SoMa"}]}"#)
        .create_async()
        .await;

    let client = Client::new();
    let request = Rehosted::new(
        &server,
        neighborhood::GeoPoint::builder()
            .latitude(37.788022)
            .longitude(-122.399797)
            .yws_id("YWSID")
            .compress_response(false)
            .build()
            .unwrap(),
    );
    let response = client.search(&request).await.unwrap();

    mock.assert_async().await;
    assert_eq!(
        response.as_json().unwrap()["neighborhoods"][0]["name"],
        "SoMa"
    );
}

/// Phone requests go to the phone endpoint.
#[tokio::test]
async fn test_phone_search_hits_phone_endpoint() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/phone_search?phone=4159083801&yws_id=YWSID")
        .with_body(r#"{"businesses":[]}"#)
        .create_async()
        .await;

    let client = Client::new();
    let request = Rehosted::new(
        &server,
        phone::Number::builder()
            .number("4159083801")
            .yws_id("YWSID")
            .compress_response(false)
            .build()
            .unwrap(),
    );
    client.search(&request).await.unwrap();

    mock.assert_async().await;
}

/// `raw_search_url` yields the exact URL a search would submit without any
/// network traffic.
#[tokio::test]
async fn test_raw_search_url_performs_no_io() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = Client::new();
    let request = Rehosted::new(&server, cream_puffs());
    let url = client.raw_search_url(&request);

    assert_eq!(
        url,
        format!(
            "{}/business_review_search?{}",
            server.url(),
            CREAM_PUFFS_QUERY
        )
    );
    mock.assert_async().await;
}

/// A compressed transfer whose body is not valid gzip is a decompression
/// error, not a decode error.
#[tokio::test]
async fn test_invalid_gzip_body_is_a_decompression_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", Matcher::Any)
        .with_body("plainly not gzip")
        .create_async()
        .await;

    let client = Client::new();
    let request = Rehosted::new(&server, cream_puffs());
    let result = client.search(&request).await;

    assert!(matches!(result, Err(Error::Decompression(_))));
}

/// Non-2xx statuses surface as transport errors before any decoding.
#[tokio::test]
async fn test_http_error_status_is_a_transport_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", Matcher::Any)
        .with_status(500)
        .create_async()
        .await;

    let client = Client::new();
    let request = Rehosted::new(&server, cream_puffs());
    let result = client.search(&request).await;

    assert!(matches!(result, Err(Error::Transport(_))));
}

/// A body that fails JSON decoding is a decode error under the JSON format
/// but passes through untouched under the raw format.
#[tokio::test]
async fn test_malformed_json_is_a_decode_error_only_for_json_format() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", Matcher::Any)
        .with_body("{not json")
        .create_async()
        .await;

    let client = Client::new();

    let json_request = Rehosted::new(
        &server,
        phone::Number::builder()
            .number("4159083801")
            .yws_id("YWSID")
            .compress_response(false)
            .build()
            .unwrap(),
    );
    let result = client.search(&json_request).await;
    assert!(matches!(result, Err(Error::Decode(_))));

    let raw_request = Rehosted::new(
        &server,
        phone::Number::builder()
            .number("4159083801")
            .yws_id("YWSID")
            .response_format(ResponseFormat::Raw)
            .compress_response(false)
            .build()
            .unwrap(),
    );
    let response = client.search(&raw_request).await.unwrap();
    assert_eq!(response, SearchResponse::Raw("{not json".to_string()));
}

/// The serialized-object formats pass the body through undecoded.
#[tokio::test]
async fn test_serialized_formats_pass_body_through() {
    let mut server = Server::new_async().await;
    let client = Client::new();

    for (format, yws_id) in [
        (ResponseFormat::Pickle, "PICKLE"),
        (ResponseFormat::Php, "PHP"),
    ] {
        let mock = server
            .mock(
                "GET",
                format!("/phone_search?phone=4159083801&yws_id={}", yws_id).as_str(),
            )
            .with_body("opaque serialized payload")
            .create_async()
            .await;

        let request = Rehosted::new(
            &server,
            phone::Number::builder()
                .number("4159083801")
                .yws_id(yws_id)
                .response_format(format)
                .compress_response(false)
                .build()
                .unwrap(),
        );
        let response = client.search(&request).await.unwrap();

        mock.assert_async().await;
        assert_eq!(
            response,
            SearchResponse::Raw("opaque serialized payload".to_string())
        );
    }
}

/// In debug mode a search emits one submission line and one response line;
/// serialized formats log only the content length, textual formats log the
/// body too.
#[tokio::test]
async fn test_debug_logging_emits_submission_and_response_lines() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", Matcher::Any)
        .with_body(r#"{"businesses":[]}"#)
        .create_async()
        .await;

    let sink = Arc::new(CaptureSink::default());
    let client = Client::builder()
        .debug(true)
        .logger(sink.clone())
        .build()
        .unwrap();

    let json_request = Rehosted::new(
        &server,
        phone::Number::builder()
            .number("4159083801")
            .yws_id("YWSID")
            .compress_response(false)
            .build()
            .unwrap(),
    );
    client.search(&json_request).await.unwrap();

    let lines = sink.lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("submitting search [url="));
    assert!(lines[0].contains(client.raw_search_url(&json_request).as_str()));
    assert!(lines[0].contains("request="));
    assert_eq!(
        lines[1],
        r#"received response [content_length=17, content={"businesses":[]}]."#
    );

    let pickle_request = Rehosted::new(
        &server,
        phone::Number::builder()
            .number("4159083801")
            .yws_id("YWSID")
            .response_format(ResponseFormat::Pickle)
            .compress_response(false)
            .build()
            .unwrap(),
    );
    client.search(&pickle_request).await.unwrap();

    let lines = sink.lines();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[3], "received response [content_length=17].");
}

/// With debug off an attached sink never sees a line.
#[tokio::test]
async fn test_debug_off_emits_nothing() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", Matcher::Any)
        .with_body(r#"{"businesses":[]}"#)
        .create_async()
        .await;

    let sink = Arc::new(CaptureSink::default());
    let client = Client::builder().logger(sink.clone()).build().unwrap();

    let request = Rehosted::new(
        &server,
        phone::Number::builder()
            .number("4159083801")
            .yws_id("YWSID")
            .compress_response(false)
            .build()
            .unwrap(),
    );
    client.search(&request).await.unwrap();

    assert!(sink.lines().is_empty());
}

/// One client serves concurrent searches; neither call disturbs the other.
#[tokio::test]
async fn test_concurrent_searches_share_one_client() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", Matcher::Regex("business_review_search".to_string()))
        .with_body(r#"{"businesses":[{"name":"review"}]}"#)
        .create_async()
        .await;
    server
        .mock("GET", Matcher::Regex("neighborhood_search".to_string()))
        .with_body(r#"{"neighborhoods":[{"name":"SoMa"}]}"#)
        .create_async()
        .await;

    let client = Client::new();
    let review_request = Rehosted::new(
        &server,
        review::Location::builder()
            .address("650 Mission St")
            .city("San Francisco")
            .state("CA")
            .term("cream puffs")
            .yws_id("YWSID")
            .compress_response(false)
            .build()
            .unwrap(),
    );
    let neighborhood_request = Rehosted::new(
        &server,
        neighborhood::GeoPoint::builder()
            .latitude(37.788022)
            .longitude(-122.399797)
            .yws_id("YWSID")
            .compress_response(false)
            .build()
            .unwrap(),
    );

    let (review_response, neighborhood_response) = tokio::join!(
        client.search(&review_request),
        client.search(&neighborhood_request)
    );

    let review_json = review_response.unwrap();
    let neighborhood_json = neighborhood_response.unwrap();
    assert_eq!(
        review_json.as_json().unwrap()["businesses"][0]["name"],
        "review"
    );
    assert_eq!(
        neighborhood_json.as_json().unwrap()["neighborhoods"][0]["name"],
        "SoMa"
    );
}
