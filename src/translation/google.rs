use anyhow::{Context, Result, bail};
use reqwest::blocking::Client;
use serde_json::Value;
use std::time::Duration;
use url::Url;

use super::backend::{SOURCE_LANGUAGE, TARGET_LANGUAGE, TranslationBackend};

/// Public endpoint of the Google Translate web client.
pub const DEFAULT_GOOGLE_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

/// Backend for the keyless Google Translate endpoint (`client=gtx`).
pub struct GoogleBackend {
    client: Client,
    endpoint: Url,
}

impl GoogleBackend {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let endpoint =
            Url::parse(endpoint).with_context(|| format!("Invalid translation endpoint: {endpoint}"))?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client, endpoint })
    }

    fn request_url(&self, text: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("client", "gtx")
            .append_pair("sl", SOURCE_LANGUAGE)
            .append_pair("tl", TARGET_LANGUAGE)
            .append_pair("dt", "t")
            .append_pair("q", text);
        url
    }
}

impl TranslationBackend for GoogleBackend {
    fn name(&self) -> &str {
        "google"
    }

    fn translate(&self, text: &str) -> Result<String> {
        let url = self.request_url(text);

        let response = self
            .client
            .get(url)
            .send()
            .with_context(|| format!("Failed to connect to translation endpoint: {}", self.endpoint))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().unwrap_or_default();
            bail!("Translation request failed with status {status}: {body}");
        }

        let body: Value = response
            .json()
            .context("Failed to parse translation response")?;

        parse_response(&body)
    }
}

/// Joins the translated segments of a `translate_a/single` response.
///
/// The payload is a nested array whose first element lists
/// `[translated, original, ...]` segments, one per sentence.
fn parse_response(body: &Value) -> Result<String> {
    let segments = body
        .get(0)
        .and_then(Value::as_array)
        .context("Unexpected translation response shape")?;

    let translated: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    if translated.is_empty() {
        bail!("Translation response contained no text");
    }

    Ok(translated)
}
