use anyhow::{Context, Result};
use log::debug;
use reqwest::blocking::Client;
use serde_json::Value;
use std::time::Duration;
use url::Url;

use super::error::FetchError;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Blocking JSON GET. The fetch engine only ever reads.
pub trait Transport {
    fn get_json(&self, url: &Url) -> Result<Value, FetchError>;
}

/// [`Transport`] over a blocking `reqwest` client.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("dbz-explorer/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get_json(&self, url: &Url) -> Result<Value, FetchError> {
        debug!("GET {url}");

        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| FetchError::transport(url.as_str(), e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        response.json().map_err(|e| FetchError::Body {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}
