//! The search client: URL construction, HTTP submission, optional gzip
//! transfer, and format-aware decoding of the response body.

use std::fmt;
use std::io::Read;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use flate2::read::GzDecoder;

use crate::error::{Error, Result};
use crate::logging::{LogSink, StdoutSink};
use crate::models::{ResponseFormat, SearchResponse};
use crate::query::build_url;
use crate::request::SearchRequest;

/// User agent submitted with every request unless overridden through
/// [`ClientBuilder::agent`].
pub const DEFAULT_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Client for the Yelp v1 search endpoints.
///
/// The client is stateless between searches and cheap to share: one instance
/// can serve any number of concurrent [`search`](Client::search) calls. It
/// owns no runtime; `search` runs on whatever executor awaits it.
///
/// # Example
///
/// ```no_run
/// use yelp_client::request::review::Location;
/// use yelp_client::Client;
///
/// # async fn run() -> yelp_client::Result<()> {
/// let request = Location::builder()
///     .address("650 Mission St")
///     .city("San Francisco")
///     .state("CA")
///     .radius(2)
///     .term("cream puffs")
///     .yws_id("YWSID")
///     .build()?;
///
/// let client = Client::new();
/// let response = client.search(&request).await?;
/// println!("{:?}", response);
/// # Ok(())
/// # }
/// ```
pub struct Client {
    http: reqwest::Client,
    agent: String,
    debug: bool,
    logger: OnceLock<Arc<dyn LogSink>>,
}

impl Client {
    /// Creates a client with the default agent, debug logging off, and no
    /// request timeout.
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            agent: DEFAULT_AGENT.to_string(),
            debug: false,
            logger: OnceLock::new(),
        }
    }

    /// Creates a [`ClientBuilder`] for a customized client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Submits `request` to its endpoint and decodes the response body per
    /// the request's [`ResponseFormat`].
    ///
    /// When the request asks for a compressed transfer, the body is taken
    /// off the wire as gzip and inflated here; a body that is not valid gzip
    /// is an [`Error::Decompression`]. Non-2xx statuses surface as
    /// [`Error::Transport`] before the body is read.
    pub async fn search<R>(&self, request: &R) -> Result<SearchResponse>
    where
        R: SearchRequest + ?Sized,
    {
        let url = self.raw_search_url(request);
        self.debug_msg(&format!(
            "submitting search [url={}, request={:?}].",
            url, request
        ));

        let mut http_request = self
            .http
            .get(url.as_str())
            .header("User-Agent", self.agent.as_str());
        if request.compress_response() {
            http_request = http_request.header("Accept-Encoding", "gzip,deflate");
        }

        let response = http_request.send().await?.error_for_status()?;
        let body = response.bytes().await?;

        let content = if request.compress_response() {
            let inflated = gunzip(&body)?;
            String::from_utf8_lossy(&inflated).into_owned()
        } else {
            String::from_utf8_lossy(&body).into_owned()
        };

        self.decode_content(content, request.response_format())
    }

    /// Returns the exact URL [`search`](Client::search) would submit for
    /// `request`, without touching the network.
    pub fn raw_search_url<R>(&self, request: &R) -> String
    where
        R: SearchRequest + ?Sized,
    {
        build_url(request.base_url(), &request.to_params())
    }

    fn decode_content(&self, content: String, format: ResponseFormat) -> Result<SearchResponse> {
        if format.is_serialized() {
            self.debug_msg(&format!(
                "received response [content_length={}].",
                content.len()
            ));
        } else {
            self.debug_msg(&format!(
                "received response [content_length={}, content={}].",
                content.len(),
                content
            ));
        }

        match format {
            ResponseFormat::Json => {
                let value = serde_json::from_str(&content).map_err(Error::Decode)?;
                Ok(SearchResponse::Json(value))
            }
            ResponseFormat::Raw | ResponseFormat::Pickle | ResponseFormat::Php => {
                Ok(SearchResponse::Raw(content))
            }
        }
    }

    // The sink is instantiated lazily so a client that never logs never
    // builds one.
    fn debug_msg(&self, message: &str) {
        if !self.debug {
            return;
        }
        let sink = self
            .logger
            .get_or_init(|| Arc::new(StdoutSink) as Arc<dyn LogSink>);
        sink.debug(message);
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("agent", &self.agent)
            .field("debug", &self.debug)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Client`].
///
/// ```
/// use std::time::Duration;
/// use yelp_client::Client;
///
/// let client = Client::builder()
///     .agent("my-app/1.0")
///     .debug(true)
///     .timeout(Duration::from_secs(10))
///     .build()
///     .unwrap();
/// ```
#[derive(Default)]
pub struct ClientBuilder {
    agent: Option<String>,
    debug: bool,
    logger: Option<Arc<dyn LogSink>>,
    timeout: Option<Duration>,
    http: Option<reqwest::Client>,
}

impl ClientBuilder {
    /// User agent submitted with every request. Defaults to
    /// [`DEFAULT_AGENT`].
    pub fn agent(mut self, agent: impl Into<String>) -> Self {
        self.agent = Some(agent.into());
        self
    }

    /// Turns per-search debug logging on or off. Defaults to off.
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Sink debug lines are written to. Defaults to standard output via
    /// [`StdoutSink`], instantiated on first use.
    pub fn logger(mut self, logger: Arc<dyn LogSink>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Total per-request timeout. Defaults to none. Ignored when a
    /// preconfigured client is supplied via
    /// [`http_client`](ClientBuilder::http_client).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// A preconfigured HTTP client to submit requests with, for embedders
    /// that need proxy, TLS, or pool settings beyond what this builder
    /// exposes.
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Builds the client. Fails with [`Error::Transport`] if the underlying
    /// HTTP client cannot be constructed.
    pub fn build(self) -> Result<Client> {
        let http = match self.http {
            Some(http) => http,
            None => {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                builder.build()?
            }
        };
        let client = Client {
            http,
            agent: self.agent.unwrap_or_else(|| DEFAULT_AGENT.to_string()),
            debug: self.debug,
            logger: OnceLock::new(),
        };
        if let Some(sink) = self.logger {
            let _ = client.logger.set(sink);
        }
        Ok(client)
    }
}

fn gunzip(body: &[u8]) -> Result<Vec<u8>> {
    let mut decoder = GzDecoder::new(body);
    let mut inflated = Vec::new();
    decoder
        .read_to_end(&mut inflated)
        .map_err(Error::Decompression)?;
    Ok(inflated)
}
