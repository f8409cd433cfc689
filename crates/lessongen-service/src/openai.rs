use std::time::Duration;

use async_trait::async_trait;
use lessongen_core::{Credential, FailureKind, GenerationError};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;

use crate::client::{CompletionClient, CompletionRequest};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// HTTP client for an OpenAI-compatible `/chat/completions` endpoint.
pub struct OpenAiClient {
    base_url: String,
    client: Client,
}

impl OpenAiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    fn name(&self) -> &str {
        "openai"
    }

    async fn complete(
        &self,
        credential: &Credential,
        request: &CompletionRequest,
    ) -> Result<String, GenerationError> {
        let resp = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(credential.expose())
            .json(request)
            .send()
            .await
            .map_err(|e| GenerationError::network(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| GenerationError::network(format!("read body: {e}")))?;
        debug!(%status, bytes = body.len(), "completion response");

        if !status.is_success() {
            return Err(parse_error(status, &body));
        }

        let parsed: CompletionResponse = serde_json::from_str(&body)
            .map_err(|e| GenerationError::malformed(format!("json decode: {e}")))?;
        parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| GenerationError::malformed("response contained no choices"))?
            .message
            .content
            .ok_or_else(|| GenerationError::malformed("first choice has no message content"))
    }
}

fn parse_error(status: StatusCode, body: &str) -> GenerationError {
    let msg = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(String::from))
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| {
            if body.trim().is_empty() {
                status.to_string()
            } else {
                format!("{status}: {}", body.trim())
            }
        });
    GenerationError::new(FailureKind::from_status(status.as_u16()), msg)
}
