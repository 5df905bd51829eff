use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::endpoint::endpoint_url;
use super::{Backend, BackendError};
use crate::conversation::{ChatMessage, Conversation};

/// Model requested for every completion.
pub const MODEL: &str = "gpt-4o";

/// Upper bound on generated tokens per completion.
pub const MAX_TOKENS: u32 = 300;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";

/// Upper bound on the upstream error body kept for logging.
const MAX_ERROR_BODY_BYTES: usize = 2048;

/// OpenAI backend configuration.
pub struct OpenAiConfig {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    /// Bound on the whole upstream exchange; `None` waits indefinitely.
    pub timeout: Option<Duration>,
    pub http_client: reqwest::Client,
}

/// OpenAI chat completions backend.
pub struct OpenAi {
    base_url: String,
    api_key: Option<String>,
    timeout: Option<Duration>,
    http_client: reqwest::Client,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    max_tokens: u32,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl OpenAi {
    pub fn new(config: OpenAiConfig) -> Self {
        Self {
            base_url: config
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.into()),
            api_key: config.api_key.filter(|k| !k.is_empty()),
            timeout: config.timeout,
            http_client: config.http_client,
        }
    }

    async fn exchange(
        &self,
        url: &str,
        api_key: &str,
        conversation: &Conversation,
    ) -> Result<String, BackendError> {
        let request = ChatRequest {
            model: MODEL,
            messages: conversation.messages(),
            max_tokens: MAX_TOKENS,
        };

        let resp = self
            .http_client
            .post(url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = read_error_body(resp, MAX_ERROR_BODY_BYTES).await;
            return Err(BackendError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = resp.bytes().await?;
        let parsed: ChatResponse = serde_json::from_slice(&bytes)
            .map_err(|e| BackendError::MalformedResponse(e.to_string()))?;

        first_choice_text(parsed)
    }
}

/// Read at most `limit` bytes of an error body; the rest is never buffered.
async fn read_error_body(mut resp: reqwest::Response, limit: usize) -> String {
    let mut buf = Vec::new();
    let mut truncated = false;

    loop {
        match resp.chunk().await {
            Ok(Some(chunk)) => {
                let room = limit - buf.len();
                if chunk.len() > room {
                    buf.extend_from_slice(&chunk[..room]);
                    truncated = true;
                    break;
                }
                buf.extend_from_slice(&chunk);
            }
            Ok(None) => break,
            Err(_) if buf.is_empty() => return "<unable to read response body>".to_string(),
            Err(_) => break,
        }
    }

    let mut body = String::from_utf8_lossy(&buf).into_owned();
    if truncated {
        body.push_str("...[truncated]");
    }
    body
}

fn first_choice_text(resp: ChatResponse) -> Result<String, BackendError> {
    let choice = resp
        .choices
        .into_iter()
        .next()
        .ok_or(BackendError::EmptyChoices)?;
    choice.message.content.ok_or(BackendError::MissingContent)
}

#[async_trait]
impl Backend for OpenAi {
    fn name(&self) -> &str {
        "openai"
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn complete(&self, conversation: &Conversation) -> Result<String, BackendError> {
        let api_key = self.api_key.as_deref().ok_or(BackendError::MissingApiKey)?;
        let url = endpoint_url(&self.base_url, CHAT_COMPLETIONS_PATH)
            .map_err(|e| BackendError::InvalidUrl(e.to_string()))?;

        debug!(url = %url, model = MODEL, "requesting completion");

        let exchange = self.exchange(&url, api_key, conversation);
        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, exchange)
                .await
                .map_err(|_| BackendError::Timeout(limit))?,
            None => exchange.await,
        }
    }
}
