//! # Yelp Client
//!
//! A client library for the Yelp v1 local search API: business review
//! search, neighborhood search, and phone search.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`request`]: Request types, one per search family and addressing mode,
//!   unified behind the [`SearchRequest`] trait
//! - [`client`]: The [`Client`] that submits requests and decodes responses
//! - [`models`]: Response format selection and decoded results
//! - [`query`]: Deterministic query-string construction
//! - [`logging`]: Pluggable debug log sink
//! - [`error`]: The error taxonomy
//!
//! ## Quick start
//!
//! ```no_run
//! use yelp_client::request::review::Location;
//! use yelp_client::Client;
//!
//! # #[tokio::main]
//! # async fn main() -> yelp_client::Result<()> {
//! let request = Location::builder()
//!     .address("650 Mission St")
//!     .city("San Francisco")
//!     .state("CA")
//!     .radius(2)
//!     .term("cream puffs")
//!     .yws_id("YWSID")
//!     .build()?;
//!
//! let client = Client::new();
//! let response = client.search(&request).await?;
//! println!("{:?}", response.as_json());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod logging;
pub mod models;
pub mod query;
pub mod request;

// Re-export commonly used types
pub use client::{Client, ClientBuilder, DEFAULT_AGENT};
pub use error::{Error, Result};
pub use logging::{LogSink, StdoutSink, TracingSink};
pub use models::{ResponseFormat, SearchResponse};
pub use request::{Category, SearchRequest};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
