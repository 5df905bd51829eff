pub mod endpoint;
#[cfg(test)]
pub mod mock;
pub mod openai;

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::conversation::Conversation;

pub use openai::{OpenAi, OpenAiConfig};

/// Backend trait for chat completion providers.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Human-readable name for this backend.
    fn name(&self) -> &str;

    /// Base URL for API requests.
    fn base_url(&self) -> &str;

    /// Generate a reply to the conversation and return the first choice's text.
    async fn complete(&self, conversation: &Conversation) -> Result<String, BackendError>;
}

/// Failures talking to a completion provider.
///
/// Callers never see these; they are logged and collapsed into a generic
/// server error.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("no upstream API key configured")]
    MissingApiKey,

    #[error("invalid upstream URL: {0}")]
    InvalidUrl(String),

    #[error("upstream request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("upstream request timed out after {0:?}")]
    Timeout(Duration),

    #[error("upstream returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed upstream response: {0}")]
    MalformedResponse(String),

    #[error("upstream response contained no choices")]
    EmptyChoices,

    #[error("first choice has no message content")]
    MissingContent,
}
