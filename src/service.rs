//! The chat-completion service contract shared by all Gemini backends.
//!
//! Callers hold a `Box<dyn ChatCompletionService>` (or `Arc`) and never
//! need to know which Gemini surface sits behind it.

use async_trait::async_trait;

use crate::attributes::{MODEL_ID_KEY, ServiceAttributes};
use crate::error::GeminiError;
use crate::message::{ChatHistory, ChatMessageContent};
use crate::settings::GeminiExecutionSettings;

/// A service that completes chat conversations.
///
/// # Object Safety
///
/// This trait is object-safe and can be used as `Box<dyn ChatCompletionService>`.
#[async_trait]
pub trait ChatCompletionService: Send + Sync {
    /// Descriptive attributes fixed at construction time.
    fn attributes(&self) -> &ServiceAttributes;

    /// Model identifier, read from [`MODEL_ID_KEY`].
    fn model_id(&self) -> Option<&str> {
        self.attributes().get(MODEL_ID_KEY)
    }

    /// Complete the conversation, returning one message per candidate.
    ///
    /// `None` settings means the model's defaults.
    ///
    /// # Errors
    /// See [`GeminiError`].
    async fn get_chat_message_contents(
        &self,
        history: &ChatHistory,
        settings: Option<&GeminiExecutionSettings>,
    ) -> Result<Vec<ChatMessageContent>, GeminiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoService {
        attributes: ServiceAttributes,
    }

    #[async_trait]
    impl ChatCompletionService for EchoService {
        fn attributes(&self) -> &ServiceAttributes {
            &self.attributes
        }

        async fn get_chat_message_contents(
            &self,
            history: &ChatHistory,
            _settings: Option<&GeminiExecutionSettings>,
        ) -> Result<Vec<ChatMessageContent>, GeminiError> {
            let last = history.messages().last().map(|m| m.content.clone());
            Ok(vec![ChatMessageContent::assistant(last.unwrap_or_default())])
        }
    }

    #[test]
    fn service_is_object_safe() {
        let service: Box<dyn ChatCompletionService> = Box::new(EchoService {
            attributes: ServiceAttributes::new().with(MODEL_ID_KEY, "echo"),
        });
        assert_eq!(service.model_id(), Some("echo"));
    }

    #[test]
    fn model_id_absent_without_attribute() {
        let service = EchoService {
            attributes: ServiceAttributes::new(),
        };
        assert!(service.model_id().is_none());
    }

    #[tokio::test]
    async fn dyn_service_completes() {
        let service: Box<dyn ChatCompletionService> = Box::new(EchoService {
            attributes: ServiceAttributes::new(),
        });
        let mut history = ChatHistory::new();
        history.add_user_message("ping");
        let reply = service
            .get_chat_message_contents(&history, None)
            .await
            .unwrap_or_default();
        assert_eq!(reply.len(), 1);
        assert_eq!(reply[0].content, "ping");
    }
}
