//! Gemini `generateContent` client shared by the Vertex AI and Google AI services.
//!
//! Converts a [`ChatHistory`] plus [`GeminiExecutionSettings`] into a Gemini
//! request body, performs a single HTTP round trip, and maps the response
//! candidates back into [`ChatMessageContent`]s.
//!
//! The request/response helpers are public so callers can inspect the wire
//! format without a network:
//!
//! ```
//! use gemini_connector::client::build_generate_content_request;
//! use gemini_connector::message::ChatHistory;
//! use gemini_connector::settings::GeminiExecutionSettings;
//!
//! let mut history = ChatHistory::with_system_message("Be brief.");
//! history.add_user_message("Hello");
//!
//! let body = build_generate_content_request(&history, &GeminiExecutionSettings::new())?;
//! assert_eq!(body["contents"][0]["role"], "user");
//! assert_eq!(body["systemInstruction"]["parts"][0]["text"], "Be brief.");
//! # Ok::<(), gemini_connector::error::GeminiError>(())
//! ```

use std::sync::OnceLock;

use serde::Deserialize;
use tracing::Instrument;

use crate::endpoint::{ApiVersion, AuthScheme, GeminiEndpoint};
use crate::error::GeminiError;
use crate::message::{ChatHistory, ChatMessageContent, ChatRole, FunctionCall};
use crate::metadata::{FinishReason, GeminiMetadata, SafetyRating};
use crate::observability::redact::{RedactedString, redact_all};
use crate::observability::spans::FIELD_ERROR_TYPE;
use crate::settings::{GeminiExecutionSettings, ToolDefinition};
use crate::usage::TokenUsage;

// ── Request Building ──────────────────────────────────────────

/// Build the JSON body for a `generateContent` call.
///
/// # Errors
/// Returns `GeminiError::ConfigError` when the history or settings are not
/// acceptable to Gemini.
pub fn build_generate_content_request(
    history: &ChatHistory,
    settings: &GeminiExecutionSettings,
) -> Result<serde_json::Value, GeminiError> {
    validate_chat_history(history)?;
    settings.validate()?;

    let mut contents = Vec::with_capacity(history.len());
    let mut system_instruction = None;
    for message in history.messages() {
        match message.role {
            ChatRole::System => system_instruction = Some(message.content.as_str()),
            _ => contents.push(message_to_content(message)?),
        }
    }

    let mut body = serde_json::json!({ "contents": contents });

    if let Some(obj) = body.as_object_mut() {
        if let Some(text) = system_instruction {
            obj.insert(
                "systemInstruction".into(),
                serde_json::json!({ "parts": [{ "text": text }] }),
            );
        }
        if let Some(config) = generation_config(settings) {
            obj.insert("generationConfig".into(), config);
        }
        if !settings.safety_settings.is_empty() {
            let safety: Vec<serde_json::Value> = settings
                .safety_settings
                .iter()
                .map(|s| {
                    serde_json::json!({
                        "category": s.category.as_wire(),
                        "threshold": s.threshold.as_wire(),
                    })
                })
                .collect();
            obj.insert("safetySettings".into(), serde_json::json!(safety));
        }
        if !settings.tools.is_empty() {
            obj.insert("tools".into(), tools_to_gemini(&settings.tools));
        }
    }

    Ok(body)
}

/// Reject histories Gemini cannot represent.
fn validate_chat_history(history: &ChatHistory) -> Result<(), GeminiError> {
    if history.is_empty() {
        return Err(GeminiError::ConfigError(
            "chat history must contain at least one message".into(),
        ));
    }
    let system_count = history
        .messages()
        .iter()
        .filter(|m| m.role == ChatRole::System)
        .count();
    if system_count > 1 {
        return Err(GeminiError::ConfigError(format!(
            "Gemini supports a single system message, got {system_count}"
        )));
    }
    if system_count == history.len() {
        return Err(GeminiError::ConfigError(
            "chat history must contain at least one non-system message".into(),
        ));
    }
    Ok(())
}

/// Gemini content role for a non-system chat role.
fn wire_role(role: ChatRole) -> &'static str {
    match role {
        ChatRole::User | ChatRole::System => "user",
        ChatRole::Assistant => "model",
        ChatRole::Tool => "function",
    }
}

/// Convert one non-system message into a Gemini `Content` object.
fn message_to_content(message: &ChatMessageContent) -> Result<serde_json::Value, GeminiError> {
    let parts = match message.role {
        ChatRole::Tool => {
            let name = message.function_name.as_deref().ok_or_else(|| {
                GeminiError::ConfigError("tool message is missing its function name".into())
            })?;
            vec![serde_json::json!({
                "functionResponse": {
                    "name": name,
                    "response": { "name": name, "content": message.content },
                }
            })]
        }
        _ => {
            let mut parts = Vec::with_capacity(1 + message.function_calls.len());
            if !message.content.is_empty() || message.function_calls.is_empty() {
                parts.push(serde_json::json!({ "text": message.content }));
            }
            parts.extend(message.function_calls.iter().map(|call| {
                // Gemini requires `args` to be a Struct.
                let args = if call.arguments.is_null() {
                    serde_json::json!({})
                } else {
                    call.arguments.clone()
                };
                serde_json::json!({
                    "functionCall": { "name": call.name, "args": args }
                })
            }));
            parts
        }
    };

    Ok(serde_json::json!({
        "role": wire_role(message.role),
        "parts": parts,
    }))
}

/// `generationConfig` object, or `None` when nothing is set.
fn generation_config(settings: &GeminiExecutionSettings) -> Option<serde_json::Value> {
    let mut config = serde_json::Map::new();
    if let Some(temperature) = settings.temperature {
        config.insert("temperature".into(), serde_json::json!(temperature));
    }
    if let Some(top_p) = settings.top_p {
        config.insert("topP".into(), serde_json::json!(top_p));
    }
    if let Some(top_k) = settings.top_k {
        config.insert("topK".into(), serde_json::json!(top_k));
    }
    if let Some(max_tokens) = settings.max_tokens {
        config.insert("maxOutputTokens".into(), serde_json::json!(max_tokens));
    }
    if let Some(count) = settings.candidate_count {
        config.insert("candidateCount".into(), serde_json::json!(count));
    }
    if !settings.stop_sequences.is_empty() {
        config.insert(
            "stopSequences".into(),
            serde_json::json!(settings.stop_sequences),
        );
    }

    if config.is_empty() {
        None
    } else {
        Some(serde_json::Value::Object(config))
    }
}

/// Convert tool definitions into a single Gemini `functionDeclarations` tool.
fn tools_to_gemini(tools: &[ToolDefinition]) -> serde_json::Value {
    let declarations: Vec<serde_json::Value> = tools
        .iter()
        .map(|t| {
            serde_json::json!({
                "name": t.name,
                "description": t.description,
                "parameters": t.parameters,
            })
        })
        .collect();
    serde_json::json!([{ "functionDeclarations": declarations }])
}

// ── Response Parsing ──────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<Content>,
    finish_reason: Option<String>,
    index: Option<u32>,
    #[serde(default)]
    safety_ratings: Vec<SafetyRating>,
    token_count: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    text: Option<String>,
    function_call: Option<WireFunctionCall>,
}

#[derive(Debug, Deserialize)]
struct WireFunctionCall {
    name: String,
    /// Absent for functions that take no parameters.
    #[serde(default = "empty_args")]
    args: serde_json::Value,
}

fn empty_args() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
    #[serde(default)]
    safety_ratings: Vec<SafetyRating>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: u64,
    #[serde(default)]
    candidates_token_count: u64,
    total_token_count: Option<u64>,
}

impl From<UsageMetadata> for TokenUsage {
    fn from(usage: UsageMetadata) -> Self {
        let base = TokenUsage::new(usage.prompt_token_count, usage.candidates_token_count);
        match usage.total_token_count {
            Some(total) => base.with_total_tokens(total),
            None => base,
        }
    }
}

/// Parse a `generateContent` response body into one message per candidate.
///
/// # Errors
/// - `GeminiError::ResponseError` if the body is not a Gemini response or
///   carries no candidates.
/// - `GeminiError::ContentBlocked` if the prompt was blocked.
pub fn parse_generate_content_response(
    body: &str,
    model_id: &str,
) -> Result<Vec<ChatMessageContent>, GeminiError> {
    let response: GenerateContentResponse = serde_json::from_str(body)
        .map_err(|e| GeminiError::ResponseError(format!("invalid Gemini response: {e}")))?;

    let (block_reason, prompt_safety_ratings) = match response.prompt_feedback {
        Some(feedback) => (feedback.block_reason, feedback.safety_ratings),
        None => (None, Vec::new()),
    };

    if response.candidates.is_empty() {
        return Err(match block_reason {
            Some(reason) => {
                GeminiError::ContentBlocked(format!("prompt was blocked by Gemini: {reason}"))
            }
            None => GeminiError::ResponseError("Gemini returned no candidates".into()),
        });
    }

    let usage = response.usage_metadata.map(TokenUsage::from);

    let messages = response
        .candidates
        .into_iter()
        .enumerate()
        .map(|(position, candidate)| {
            let mut text = String::new();
            let mut function_calls = Vec::new();
            for part in candidate.content.map(|c| c.parts).unwrap_or_default() {
                if let Some(fragment) = part.text {
                    text.push_str(&fragment);
                }
                if let Some(call) = part.function_call {
                    let args = if call.args.is_null() { empty_args() } else { call.args };
                    function_calls.push(FunctionCall::new(call.name, args));
                }
            }

            let metadata = GeminiMetadata {
                finish_reason: candidate.finish_reason.as_deref().map(FinishReason::from_wire),
                index: candidate.index.unwrap_or(position as u32),
                usage,
                current_candidate_token_count: candidate.token_count,
                prompt_feedback_block_reason: block_reason.clone(),
                prompt_safety_ratings: prompt_safety_ratings.clone(),
                response_safety_ratings: candidate.safety_ratings,
            };

            ChatMessageContent {
                function_calls,
                model_id: Some(model_id.to_string()),
                metadata: Some(metadata),
                ..ChatMessageContent::assistant(text)
            }
        })
        .collect();

    Ok(messages)
}

/// Extract `error.message` from a Google API error body.
fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .map(String::from)
        })
        .unwrap_or_else(|| body.to_string())
}

/// Map an HTTP error status to the appropriate `GeminiError`.
fn map_http_error(status: reqwest::StatusCode, body: &str) -> GeminiError {
    let message = extract_error_message(body);
    match status.as_u16() {
        401 | 403 => GeminiError::AuthError(format!("Gemini authentication failed: {message}")),
        400 | 404 => GeminiError::RequestError(format!(
            "Gemini rejected the request (HTTP {}): {message}",
            status.as_u16()
        )),
        429 => GeminiError::ProviderError(format!("Gemini rate limited: {message}")),
        _ => GeminiError::ProviderError(format!("Gemini HTTP {}: {message}", status.as_u16())),
    }
}

// ── Client ────────────────────────────────────────────────────

/// HTTP client for a single Gemini model on a single endpoint.
pub struct GeminiChatCompletionClient {
    client: OnceLock<reqwest::Client>,
    endpoint: GeminiEndpoint,
    api_version: ApiVersion,
    model_id: String,
    api_key: RedactedString,
    base_url: Option<String>,
}

impl std::fmt::Debug for GeminiChatCompletionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiChatCompletionClient")
            .field("endpoint", &self.endpoint)
            .field("api_version", &self.api_version)
            .field("model_id", &self.model_id)
            .field("api_key", &self.api_key)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl GeminiChatCompletionClient {
    /// Create a client. Performs no I/O and builds no HTTP client.
    pub fn new(
        endpoint: GeminiEndpoint,
        model_id: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client: OnceLock::new(),
            endpoint,
            api_version: ApiVersion::default(),
            model_id: model_id.into(),
            api_key: RedactedString::new(api_key),
            base_url: None,
        }
    }

    /// Use a specific API version.
    pub fn with_api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = version;
        self
    }

    /// Use a preconfigured HTTP client (timeouts, proxies, pools).
    pub fn with_http_client(self, client: reqwest::Client) -> Self {
        Self {
            client: OnceLock::from(client),
            ..self
        }
    }

    /// HTTP client in use, built with defaults on first request when none was supplied.
    fn http(&self) -> &reqwest::Client {
        self.client.get_or_init(reqwest::Client::new)
    }

    /// Override the scheme and host of the endpoint.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Model this client targets.
    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    /// Endpoint this client targets.
    pub fn endpoint(&self) -> &GeminiEndpoint {
        &self.endpoint
    }

    /// API version in use.
    pub fn api_version(&self) -> ApiVersion {
        self.api_version
    }

    /// Full `generateContent` URL.
    pub fn request_url(&self) -> String {
        self.endpoint
            .generate_content_url(self.base_url.as_deref(), self.api_version, &self.model_id)
    }

    /// Send the conversation and return one assistant message per candidate.
    ///
    /// # Errors
    /// See [`GeminiError`] for the mapping of validation, transport, HTTP,
    /// and response failures.
    pub async fn generate_chat_message(
        &self,
        history: &ChatHistory,
        settings: &GeminiExecutionSettings,
    ) -> Result<Vec<ChatMessageContent>, GeminiError> {
        let span = crate::provider_request_span!(
            self.endpoint.provider_name(),
            self.model_id.as_str(),
            "generate_content"
        );
        self.generate_inner(history, settings).instrument(span).await
    }

    async fn generate_inner(
        &self,
        history: &ChatHistory,
        settings: &GeminiExecutionSettings,
    ) -> Result<Vec<ChatMessageContent>, GeminiError> {
        tracing::debug!(messages = history.len(), "Building Gemini request");
        let body = build_generate_content_request(history, settings)?;
        let url = self.request_url();

        let request = self.http().post(&url).json(&body);
        let request = match self.endpoint.auth_scheme() {
            AuthScheme::Bearer => request.bearer_auth(self.api_key.as_str()),
            AuthScheme::ApiKeyHeader => request.header("x-goog-api-key", self.api_key.as_str()),
        };

        tracing::debug!(url = %url, "Sending request to Gemini");
        let response = request.send().await.map_err(|e| {
            let err = if e.is_timeout() {
                GeminiError::TimeoutError(format!("Gemini request timed out: {e}"))
            } else {
                GeminiError::RequestError(format!("Gemini request failed: {e}"))
            };
            tracing::error!({ FIELD_ERROR_TYPE } = err.code(), error = %e, "Gemini request failed");
            err
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            if e.is_timeout() {
                GeminiError::TimeoutError(format!("timed out reading Gemini response: {e}"))
            } else {
                GeminiError::ResponseError(format!("failed to read Gemini response: {e}"))
            }
        })?;

        if !status.is_success() {
            let err = map_http_error(status, &text);
            tracing::error!(
                status = %status,
                { FIELD_ERROR_TYPE } = err.code(),
                body = %redact_all(&text),
                "Gemini request returned error"
            );
            return Err(err);
        }

        let messages = parse_generate_content_response(&text, &self.model_id)?;
        tracing::info!(candidates = messages.len(), "Gemini response received");
        Ok(messages)
    }
}
