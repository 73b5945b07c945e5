use serde::{Deserialize, Serialize};

use crate::markup::Markup;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

impl MessageRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for MessageRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One conversation turn half. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Position-independent key, unique for the page lifetime.
    pub id: u64,
    pub role: MessageRole,
    pub content: Markup,
}

/// An item in the rendered chat log.
///
/// Error notices sit where a reply would have gone but are not part of the
/// conversation itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEntry {
    Message(Message),
    Error { id: u64, notice: String },
}

impl ChatEntry {
    pub fn id(&self) -> u64 {
        match self {
            ChatEntry::Message(m) => m.id,
            ChatEntry::Error { id, .. } => *id,
        }
    }

    pub fn as_message(&self) -> Option<&Message> {
        match self {
            ChatEntry::Message(m) => Some(m),
            ChatEntry::Error { .. } => None,
        }
    }
}

/// Request body for `POST /api/chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub query: String,
}

/// Response body from `POST /api/chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatAnswer {
    pub answer: String,
}

/// Request body for `POST /api/blog/generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub topic: String,
}

/// Response body from `POST /api/blog/generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResponse {
    pub content: String,
}

/// The currently displayed generation output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    pub topic: String,
    pub content: Markup,
}
