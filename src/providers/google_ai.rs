//! Gemini on the Google AI Generative Language API.

use async_trait::async_trait;

use crate::attributes::{MODEL_ID_KEY, ServiceAttributes};
use crate::client::GeminiChatCompletionClient;
use crate::endpoint::{ApiVersion, GeminiEndpoint};
use crate::error::GeminiError;
use crate::message::{ChatHistory, ChatMessageContent};
use crate::service::ChatCompletionService;
use crate::settings::GeminiExecutionSettings;

/// Chat completion against a Gemini model on Google AI.
///
/// Authenticates with the `x-goog-api-key` header.
#[derive(Debug)]
pub struct GoogleAiGeminiChatCompletionService {
    client: GeminiChatCompletionClient,
    attributes: ServiceAttributes,
}

impl GoogleAiGeminiChatCompletionService {
    /// Create a service for `model_id`. Performs no I/O.
    pub fn new(model_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        let model_id = model_id.into();
        let attributes = ServiceAttributes::new().with(MODEL_ID_KEY, model_id.as_str());
        let client = GeminiChatCompletionClient::new(GeminiEndpoint::GoogleAi, model_id, api_key);
        Self { client, attributes }
    }

    /// Use a specific API version (default `v1`).
    pub fn with_api_version(mut self, version: ApiVersion) -> Self {
        self.client = self.client.with_api_version(version);
        self
    }

    /// Use a preconfigured HTTP client.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.client = self.client.with_http_client(client);
        self
    }

    /// Send requests to a different scheme and host.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.client = self.client.with_base_url(url);
        self
    }

    /// The underlying HTTP client.
    pub fn client(&self) -> &GeminiChatCompletionClient {
        &self.client
    }
}

#[async_trait]
impl ChatCompletionService for GoogleAiGeminiChatCompletionService {
    fn attributes(&self) -> &ServiceAttributes {
        &self.attributes
    }

    async fn get_chat_message_contents(
        &self,
        history: &ChatHistory,
        settings: Option<&GeminiExecutionSettings>,
    ) -> Result<Vec<ChatMessageContent>, GeminiError> {
        let defaults = GeminiExecutionSettings::default();
        self.client
            .generate_chat_message(history, settings.unwrap_or(&defaults))
            .await
    }
}
