//! Configuration types for the Gemini connector.
//!
//! Defines the schema deserialized from the TOML config file read by
//! [`read_config`](super::persist::read_config).

use serde::{Deserialize, Serialize};

use crate::endpoint::ApiVersion;
use crate::error::GeminiError;
use crate::settings::GeminiExecutionSettings;

/// Default HTTP request timeout.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default log filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Top-level connector configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectorConfig {
    /// Which Gemini service to build.
    pub service: ServiceConfig,

    /// Default execution settings applied to every request.
    #[serde(default)]
    pub settings: GeminiExecutionSettings,

    /// Runtime behaviour.
    #[serde(default)]
    pub runtime: RuntimeConfig,
}

/// Gemini REST surface to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Backend {
    /// Vertex AI (bearer key, regional, project-scoped).
    VertexAi,
    /// Google AI Generative Language API (API key).
    GoogleAi,
}

/// Service selection and credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub backend: Backend,

    /// Model identifier, e.g. `gemini-1.5-pro`.
    pub model_id: String,

    /// Vertex AI region. Required for `vertex_ai`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Google Cloud project. Required for `vertex_ai`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,

    #[serde(default)]
    pub api_version: ApiVersion,

    /// Bearer key (Vertex AI) or API key (Google AI).
    #[serde(default)]
    pub api_key: SecretRef,

    /// Replaces the scheme and host of the endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Whole-request timeout in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Log filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Reference to a secret value.
///
/// Secrets can be:
/// - Not configured (None)
/// - Loaded from an environment variable (Env)
/// - Hardcoded literal (Literal) - for development only
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SecretRef {
    /// No secret configured
    #[default]
    None,
    /// Load from environment variable
    Env { var: String },
    /// Literal value (development only, insecure)
    Literal { value: String },
}

impl SecretRef {
    /// Resolve the secret to its actual value.
    ///
    /// # Returns
    /// - `Ok(None)` if no secret is configured (variant `None`)
    /// - `Ok(Some(value))` for successfully resolved secrets
    /// - `Err(GeminiError::ConfigError)` if the environment variable is unset
    pub fn resolve(&self) -> Result<Option<String>, GeminiError> {
        match self {
            Self::None => Ok(None),
            Self::Env { var } => std::env::var(var).map(Some).map_err(|_| {
                GeminiError::ConfigError(format!("environment variable '{var}' not set"))
            }),
            Self::Literal { value } => Ok(Some(value.clone())),
        }
    }
}
