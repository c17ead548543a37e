//! Response format selection.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How the response body should be decoded before it is handed back.
///
/// The format never appears on the wire; it only selects the client-side
/// decode step. The upstream service answers with JSON, and the legacy
/// serialized-object formats are carried for callers of the historical API
/// surface - no native decoder exists for them, so they pass through raw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    /// Decode the JSON body into a [`serde_json::Value`] tree. The default.
    #[default]
    Json,
    /// Return the body as text, undecoded.
    Raw,
    /// Python-pickle body, returned as raw text.
    Pickle,
    /// PHP-serialize body, returned as raw text.
    Php,
}

impl ResponseFormat {
    /// Whether the body is an opaque serialized-object payload. The client
    /// logs only the content length of serialized bodies in debug mode; the
    /// JSON-textual formats are safe to print in full.
    pub fn is_serialized(&self) -> bool {
        matches!(self, ResponseFormat::Pickle | ResponseFormat::Php)
    }
}

impl fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResponseFormat::Json | ResponseFormat::Raw => "json",
            ResponseFormat::Pickle => "pickle",
            ResponseFormat::Php => "php",
        };
        f.write_str(name)
    }
}
