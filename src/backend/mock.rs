use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Notify;

use super::{Backend, BackendError};
use crate::conversation::Conversation;

pub enum Behavior {
    Reply(String),
    /// Reply "echo: <prompt>".
    Echo,
    /// Fail as if the upstream call timed out.
    Timeout,
    /// Echo, but hold requests for `prompt` until `release` is notified.
    HoldUntil { prompt: String, release: Arc<Notify> },
}

/// In-memory backend that records every conversation it is asked to complete.
pub struct MockBackend {
    behavior: Behavior,
    calls: Mutex<Vec<Conversation>>,
}

impl MockBackend {
    pub fn new(behavior: Behavior) -> Self {
        Self {
            behavior,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Conversation> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Backend for MockBackend {
    fn name(&self) -> &str {
        "mock"
    }

    fn base_url(&self) -> &str {
        "http://mock.invalid"
    }

    async fn complete(&self, conversation: &Conversation) -> Result<String, BackendError> {
        self.calls.lock().unwrap().push(conversation.clone());

        match &self.behavior {
            Behavior::Reply(text) => Ok(text.clone()),
            Behavior::Echo => Ok(format!("echo: {}", conversation.prompt())),
            Behavior::Timeout => Err(BackendError::Timeout(Duration::from_secs(60))),
            Behavior::HoldUntil { prompt, release } => {
                if conversation.prompt() == prompt {
                    release.notified().await;
                }
                Ok(format!("echo: {}", conversation.prompt()))
            }
        }
    }
}
