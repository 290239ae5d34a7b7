use anyhow::{Context, Result, bail};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::time::Duration;

use super::backend::TranslationBackend;
use super::prompt::build_system_prompt;

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: Cow<'a, str>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Backend for OpenAI-compatible chat completion endpoints.
pub struct OpenAiBackend {
    client: Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

impl OpenAiBackend {
    pub fn new(
        endpoint: String,
        model: String,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            endpoint,
            model,
            api_key,
        })
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/v1/chat/completions",
            self.endpoint.trim_end_matches('/')
        )
    }
}

impl TranslationBackend for OpenAiBackend {
    fn name(&self) -> &str {
        "openai"
    }

    fn translate(&self, text: &str) -> Result<String> {
        let url = self.completions_url();

        let chat_request = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                Message {
                    role: "system",
                    content: Cow::Owned(build_system_prompt("Spanish", "English")),
                },
                Message {
                    role: "user",
                    content: Cow::Borrowed(text),
                },
            ],
            stream: false,
        };

        let mut http_request = self.client.post(&url).json(&chat_request);

        if let Some(api_key) = &self.api_key {
            http_request = http_request.header("Authorization", format!("Bearer {api_key}"));
        }

        let response = http_request
            .send()
            .with_context(|| format!("Failed to connect to API endpoint: {url}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().unwrap_or_default();
            bail!("API request failed with status {status}: {body}");
        }

        let completion: ChatCompletionResponse = response
            .json()
            .context("Failed to parse chat completion response")?;

        extract_content(completion)
    }
}

fn extract_content(completion: ChatCompletionResponse) -> Result<String> {
    let content = completion
        .choices
        .into_iter()
        .filter_map(|c| c.message.content)
        .map(|c| c.trim().to_string())
        .find(|c| !c.is_empty());

    content.context("Chat completion returned no content")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_completions_url_trims_trailing_slash() {
        let backend = OpenAiBackend::new(
            "http://localhost:11434/".to_string(),
            "gemma3:12b".to_string(),
            None,
            Duration::from_secs(5),
        )
        .unwrap();

        assert_eq!(
            backend.completions_url(),
            "http://localhost:11434/v1/chat/completions"
        );
    }

    #[test]
    fn test_extract_content_trims_whitespace() {
        let completion: ChatCompletionResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"role":"assistant","content":"  The strongest Saiyan.\n"}}]}"#,
        )
        .unwrap();

        assert_eq!(extract_content(completion).unwrap(), "The strongest Saiyan.");
    }

    #[test]
    fn test_extract_content_empty_is_error() {
        let completion: ChatCompletionResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"content":null}}]}"#).unwrap();

        assert!(extract_content(completion).is_err());
    }

    #[test]
    fn test_request_serializes_without_streaming() {
        let request = ChatCompletionRequest {
            model: "m",
            messages: vec![Message {
                role: "user",
                content: Cow::Borrowed("hola"),
            }],
            stream: false,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["stream"], false);
        assert_eq!(json["messages"][0]["content"], "hola");
    }
}
