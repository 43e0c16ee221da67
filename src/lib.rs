//! Gemini chat-completion connector.
//!
//! Reaches Gemini models over either REST surface:
//! - **Vertex AI**: [`VertexAiGeminiChatCompletionService`], regional and
//!   project-scoped, authenticated with a bearer key
//! - **Google AI**: [`GoogleAiGeminiChatCompletionService`], authenticated
//!   with an API key
//!
//! Both implement [`ChatCompletionService`]: a read-only
//! [`ServiceAttributes`] map describing the service, plus a single
//! non-streaming `generateContent` round trip per call.
//!
//! ```
//! use gemini_connector::{ChatCompletionService, MODEL_ID_KEY, VertexAiGeminiChatCompletionService};
//!
//! let service = VertexAiGeminiChatCompletionService::new("fake-model", "key", "location", "project");
//! assert_eq!(service.attributes().get(MODEL_ID_KEY), Some("fake-model"));
//! ```

pub mod attributes;
pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod message;
pub mod metadata;
pub mod observability;
pub mod providers;
pub mod service;
pub mod settings;
pub mod usage;

pub use attributes::{MODEL_ID_KEY, ServiceAttributes};
pub use client::GeminiChatCompletionClient;
pub use endpoint::{ApiVersion, GeminiEndpoint};
pub use error::GeminiError;
pub use message::{ChatHistory, ChatMessageContent, ChatRole, FunctionCall};
pub use metadata::{FinishReason, GeminiMetadata, SafetyRating};
pub use providers::{GoogleAiGeminiChatCompletionService, VertexAiGeminiChatCompletionService};
pub use service::ChatCompletionService;
pub use settings::{GeminiExecutionSettings, HarmBlockThreshold, HarmCategory, SafetySetting, ToolDefinition};
pub use usage::TokenUsage;
