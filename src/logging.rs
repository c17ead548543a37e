//! Debug logging sinks.
//!
//! When a [`Client`](crate::Client) has debug mode enabled it reports each
//! search twice: once with the submitted URL and a dump of the request, and
//! once with details of the received response. Those messages go to a
//! [`LogSink`]. A sink can be injected at construction time via
//! [`ClientBuilder::logger`](crate::ClientBuilder::logger); otherwise a
//! [`StdoutSink`] is created lazily on first use.

/// Minimal capability required of a debug-log target: accept one
/// debug-level string message.
pub trait LogSink: Send + Sync {
    /// Record one debug-level message.
    fn debug(&self, message: &str);
}

/// Default sink: writes each message to the process's standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl LogSink for StdoutSink {
    fn debug(&self, message: &str) {
        println!("{}", message);
    }
}

/// Sink that forwards each message to the `tracing` ecosystem at debug
/// level, for embedders that already run a `tracing` subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn debug(&self, message: &str) {
        tracing::debug!(target: "yelp_client", "{}", message);
    }
}
