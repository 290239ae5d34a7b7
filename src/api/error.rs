use thiserror::Error;

use super::kind::ResourceKind;

/// Hard failures of a fetch. Any of these aborts the whole operation.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request never produced a response (connection, TLS, timeout).
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The API answered with a non-success status.
    #[error("API responded with status {status} for {url}: {body}")]
    Status { url: String, status: u16, body: String },

    /// The body was not JSON.
    #[error("Failed to parse response from {url}: {message}")]
    Body { url: String, message: String },

    /// The body was JSON but neither a list nor a pagination envelope.
    #[error("Unexpected response shape from {url}: expected a list or a paginated envelope")]
    Shape { url: String },

    /// An item did not match the schema of its resource kind.
    #[error("Failed to decode {kind} record: {source}")]
    Decode {
        kind: ResourceKind,
        #[source]
        source: serde_json::Error,
    },

    /// A context link or page cursor could not be parsed.
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

impl FetchError {
    pub fn transport(
        url: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Transport {
            url: url.into(),
            source: source.into(),
        }
    }
}
