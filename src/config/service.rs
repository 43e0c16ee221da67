//! Config validation and service construction.

use std::time::Duration;

use crate::error::GeminiError;
use crate::providers::{GoogleAiGeminiChatCompletionService, VertexAiGeminiChatCompletionService};
use crate::service::ChatCompletionService;

use super::types::{Backend, ConnectorConfig};

/// Validate a configuration before any service is built.
///
/// # Errors
/// Returns `GeminiError::ConfigError` describing the first problem found.
pub fn validate_config(config: &ConnectorConfig) -> Result<(), GeminiError> {
    let service = &config.service;
    if service.model_id.is_empty() {
        return Err(GeminiError::ConfigError(
            "service.model_id must not be empty".into(),
        ));
    }
    if service.backend == Backend::VertexAi {
        if service.location.as_deref().is_none_or(str::is_empty) {
            return Err(GeminiError::ConfigError(
                "service.location is required for the vertex_ai backend".into(),
            ));
        }
        if service.project_id.as_deref().is_none_or(str::is_empty) {
            return Err(GeminiError::ConfigError(
                "service.project_id is required for the vertex_ai backend".into(),
            ));
        }
    }
    if config.runtime.request_timeout_secs == 0 {
        return Err(GeminiError::ConfigError(
            "runtime.request_timeout_secs must be greater than zero".into(),
        ));
    }
    config.settings.validate()
}

/// Build the configured chat-completion service.
///
/// Validates the config, resolves the API key, and builds an HTTP client
/// with the configured timeout. Makes no network calls.
///
/// # Errors
/// Returns `GeminiError::ConfigError` on invalid config, an unresolvable
/// key, or an HTTP client that cannot be built.
pub fn build_service(
    config: &ConnectorConfig,
) -> Result<Box<dyn ChatCompletionService>, GeminiError> {
    validate_config(config)?;

    let service = &config.service;
    let api_key = service.api_key.resolve()?.ok_or_else(|| {
        GeminiError::ConfigError("service.api_key is required".into())
    })?;

    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.runtime.request_timeout_secs))
        .build()
        .map_err(|e| GeminiError::ConfigError(format!("failed to build HTTP client: {e}")))?;

    tracing::debug!(
        backend = ?service.backend,
        model = %service.model_id,
        api_version = %service.api_version,
        "Building Gemini chat completion service"
    );

    let built: Box<dyn ChatCompletionService> = match service.backend {
        Backend::VertexAi => {
            let mut svc = VertexAiGeminiChatCompletionService::new(
                service.model_id.as_str(),
                api_key,
                service.location.clone().unwrap_or_default(),
                service.project_id.clone().unwrap_or_default(),
            )
            .with_api_version(service.api_version)
            .with_http_client(http);
            if let Some(url) = &service.base_url {
                svc = svc.with_base_url(url.as_str());
            }
            Box::new(svc)
        }
        Backend::GoogleAi => {
            let mut svc =
                GoogleAiGeminiChatCompletionService::new(service.model_id.as_str(), api_key)
                    .with_api_version(service.api_version)
                    .with_http_client(http);
            if let Some(url) = &service.base_url {
                svc = svc.with_base_url(url.as_str());
            }
            Box::new(svc)
        }
    };
    Ok(built)
}
