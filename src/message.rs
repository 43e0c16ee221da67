//! Chat message types.
//!
//! Provides [`ChatRole`], [`ChatMessageContent`], and [`ChatHistory`], the
//! provider-neutral conversation representation sent to Gemini.
//!
//! # Examples
//!
//! ```
//! use gemini_connector::message::{ChatHistory, ChatRole};
//!
//! let mut history = ChatHistory::new();
//! history.add_system_message("You are terse.");
//! history.add_user_message("What is Rust?");
//! assert_eq!(history.len(), 2);
//! assert_eq!(history.messages()[1].role, ChatRole::User);
//! ```

use serde::{Deserialize, Serialize};

use crate::metadata::GeminiMetadata;

/// The author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// System instructions.
    System,
    /// User input.
    User,
    /// Model output.
    Assistant,
    /// Result of a function the model asked to call.
    Tool,
}

impl std::fmt::Display for ChatRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::System => write!(f, "system"),
            Self::User => write!(f, "user"),
            Self::Assistant => write!(f, "assistant"),
            Self::Tool => write!(f, "tool"),
        }
    }
}

/// A function call requested by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    /// Name of the declared function.
    pub name: String,
    /// JSON object of arguments.
    #[serde(default)]
    pub arguments: serde_json::Value,
}

impl FunctionCall {
    /// Create a function call.
    pub fn new(name: impl Into<String>, arguments: serde_json::Value) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }
}

/// A single chat message, either sent to or returned by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessageContent {
    /// Who authored the message.
    pub role: ChatRole,
    /// Text content. Empty when the message only carries function calls.
    pub content: String,
    /// Function calls requested by the model (assistant messages only).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub function_calls: Vec<FunctionCall>,
    /// Function whose output this is (tool messages only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_name: Option<String>,
    /// Model that produced the message (responses only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,
    /// Gemini response metadata (responses only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<GeminiMetadata>,
}

impl ChatMessageContent {
    /// Create a text message with the given role.
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            function_calls: Vec::new(),
            function_name: None,
            model_id: None,
            metadata: None,
        }
    }

    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(ChatRole::System, content)
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatRole::User, content)
    }

    /// Create an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, content)
    }

    /// Create an assistant message that requests function calls.
    pub fn assistant_with_function_calls(
        content: Option<String>,
        function_calls: Vec<FunctionCall>,
    ) -> Self {
        Self {
            function_calls,
            ..Self::new(ChatRole::Assistant, content.unwrap_or_default())
        }
    }

    /// Create a tool result message for `function_name`.
    pub fn tool_result(function_name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            function_name: Some(function_name.into()),
            ..Self::new(ChatRole::Tool, content)
        }
    }
}

/// Ordered conversation history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatHistory {
    messages: Vec<ChatMessageContent>,
}

impl ChatHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a history that starts with a system message.
    pub fn with_system_message(content: impl Into<String>) -> Self {
        let mut history = Self::new();
        history.add_system_message(content);
        history
    }

    /// Append a message.
    pub fn add_message(&mut self, message: ChatMessageContent) {
        self.messages.push(message);
    }

    /// Append a system message.
    pub fn add_system_message(&mut self, content: impl Into<String>) {
        self.add_message(ChatMessageContent::system(content));
    }

    /// Append a user message.
    pub fn add_user_message(&mut self, content: impl Into<String>) {
        self.add_message(ChatMessageContent::user(content));
    }

    /// Append an assistant message.
    pub fn add_assistant_message(&mut self, content: impl Into<String>) {
        self.add_message(ChatMessageContent::assistant(content));
    }

    /// Messages in conversation order.
    pub fn messages(&self) -> &[ChatMessageContent] {
        &self.messages
    }

    /// Number of messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the history is empty.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl From<Vec<ChatMessageContent>> for ChatHistory {
    fn from(messages: Vec<ChatMessageContent>) -> Self {
        Self { messages }
    }
}

impl Extend<ChatMessageContent> for ChatHistory {
    fn extend<T: IntoIterator<Item = ChatMessageContent>>(&mut self, iter: T) {
        self.messages.extend(iter);
    }
}
