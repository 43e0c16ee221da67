//! Gemini chat-completion services.
//!
//! Each submodule implements [`ChatCompletionService`](crate::service::ChatCompletionService)
//! for one Gemini surface. Both delegate the HTTP work to
//! [`GeminiChatCompletionClient`](crate::client::GeminiChatCompletionClient).
//!
//! # Available providers
//!
//! - [`vertex_ai`]: Vertex AI, regional and project-scoped
//! - [`google_ai`]: Google AI Generative Language API

pub mod google_ai;
pub mod vertex_ai;

pub use google_ai::GoogleAiGeminiChatCompletionService;
pub use vertex_ai::VertexAiGeminiChatCompletionService;
