//! Chat message types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Language;

/// Role of a message author
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    /// Learner/visitor message
    User,
    /// Chatbot reply
    Assistant,
    /// System message (instructions)
    System,
}

impl MessageRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
            MessageRole::System => "system",
        }
    }
}

impl std::fmt::Display for MessageRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How the message entered the conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    /// Typed text
    #[default]
    Text,
    /// Transcribed voice note
    Voice,
}

/// A single message in a chat conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message id
    pub id: Uuid,
    /// Role of the author
    pub role: MessageRole,
    /// Message text
    pub content: String,
    /// Text or voice origin
    #[serde(rename = "type", default)]
    pub kind: MessageKind,
    /// Language the message was written or answered in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    /// When the message was sent
    pub timestamp: DateTime<Utc>,
    /// Raw transcription for voice messages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcription: Option<String>,
}

impl ChatMessage {
    /// Create a new message
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content: content.into(),
            kind: MessageKind::Text,
            language: None,
            timestamp: Utc::now(),
            transcription: None,
        }
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    /// Create an assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }

    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(MessageRole::System, content)
    }

    /// Create a user message transcribed from voice
    pub fn voice(content: impl Into<String>, transcription: impl Into<String>) -> Self {
        let mut message = Self::new(MessageRole::User, content);
        message.kind = MessageKind::Voice;
        message.transcription = Some(transcription.into());
        message
    }

    /// Tag the message with its language
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }
}
