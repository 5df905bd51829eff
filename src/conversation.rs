use serde::{Deserialize, Serialize};

/// Instruction sent ahead of every prompt.
pub const SYSTEM_PROMPT: &str = "You are a helpful assistant.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// The two-message exchange sent upstream for a single prompt.
///
/// Built fresh for each request and dropped afterwards; nothing carries over
/// between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    messages: [ChatMessage; 2],
}

impl Conversation {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            messages: [
                ChatMessage {
                    role: Role::System,
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: Role::User,
                    content: prompt.into(),
                },
            ],
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn prompt(&self) -> &str {
        &self.messages[1].content
    }
}
