//! Execution settings for Gemini requests.
//!
//! # Examples
//!
//! ```
//! use gemini_connector::settings::{
//!     GeminiExecutionSettings, HarmBlockThreshold, HarmCategory, SafetySetting,
//! };
//!
//! let settings = GeminiExecutionSettings::new()
//!     .with_temperature(0.2)
//!     .with_max_tokens(512)
//!     .with_safety_setting(SafetySetting::new(
//!         HarmCategory::Harassment,
//!         HarmBlockThreshold::BlockOnlyHigh,
//!     ));
//!
//! assert_eq!(settings.max_tokens, Some(512));
//! assert!(settings.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::GeminiError;

/// Largest `candidateCount` Gemini accepts.
pub const MAX_CANDIDATE_COUNT: u32 = 8;

/// Harm categories that can be tuned through [`SafetySetting`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HarmCategory {
    /// Harassment.
    Harassment,
    /// Hate speech.
    HateSpeech,
    /// Sexually explicit content.
    SexuallyExplicit,
    /// Dangerous content.
    DangerousContent,
    /// Content that may harm civic integrity.
    CivicIntegrity,
}

impl HarmCategory {
    /// Gemini wire name.
    pub fn as_wire(&self) -> &'static str {
        match self {
            Self::Harassment => "HARM_CATEGORY_HARASSMENT",
            Self::HateSpeech => "HARM_CATEGORY_HATE_SPEECH",
            Self::SexuallyExplicit => "HARM_CATEGORY_SEXUALLY_EXPLICIT",
            Self::DangerousContent => "HARM_CATEGORY_DANGEROUS_CONTENT",
            Self::CivicIntegrity => "HARM_CATEGORY_CIVIC_INTEGRITY",
        }
    }
}

/// Blocking threshold for a harm category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HarmBlockThreshold {
    /// Block when probability is low or higher.
    BlockLowAndAbove,
    /// Block when probability is medium or higher.
    BlockMediumAndAbove,
    /// Block only high-probability content.
    BlockOnlyHigh,
    /// Never block.
    BlockNone,
}

impl HarmBlockThreshold {
    /// Gemini wire name.
    pub fn as_wire(&self) -> &'static str {
        match self {
            Self::BlockLowAndAbove => "BLOCK_LOW_AND_ABOVE",
            Self::BlockMediumAndAbove => "BLOCK_MEDIUM_AND_ABOVE",
            Self::BlockOnlyHigh => "BLOCK_ONLY_HIGH",
            Self::BlockNone => "BLOCK_NONE",
        }
    }
}

/// A per-category safety threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetySetting {
    /// Category to tune.
    pub category: HarmCategory,
    /// Threshold for that category.
    pub threshold: HarmBlockThreshold,
}

impl SafetySetting {
    /// Create a safety setting.
    pub fn new(category: HarmCategory, threshold: HarmBlockThreshold) -> Self {
        Self {
            category,
            threshold,
        }
    }
}

/// A function the model may ask to call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Function name.
    pub name: String,
    /// What the function does.
    pub description: String,
    /// JSON Schema (OpenAPI subset) for the arguments.
    pub parameters: serde_json::Value,
}

impl ToolDefinition {
    /// Create a new tool definition.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: serde_json::Value,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters,
        }
    }
}

/// Options controlling Gemini generation.
///
/// Every option defaults to unset so the model's own defaults apply.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeminiExecutionSettings {
    /// Sampling temperature (0.0 to 2.0).
    pub temperature: Option<f64>,
    /// Nucleus sampling threshold (0.0 to 1.0).
    pub top_p: Option<f64>,
    /// Top-k sampling.
    pub top_k: Option<u32>,
    /// Maximum output tokens.
    pub max_tokens: Option<u32>,
    /// Number of candidates to generate (1 to 8).
    pub candidate_count: Option<u32>,
    /// Sequences that stop generation.
    #[serde(default)]
    pub stop_sequences: Vec<String>,
    /// Per-category safety thresholds.
    #[serde(default)]
    pub safety_settings: Vec<SafetySetting>,
    /// Functions the model may call.
    #[serde(default)]
    pub tools: Vec<ToolDefinition>,
}

impl GeminiExecutionSettings {
    /// Create settings with nothing set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the nucleus sampling threshold.
    pub fn with_top_p(mut self, top_p: f64) -> Self {
        self.top_p = Some(top_p);
        self
    }

    /// Set top-k sampling.
    pub fn with_top_k(mut self, top_k: u32) -> Self {
        self.top_k = Some(top_k);
        self
    }

    /// Set the maximum number of output tokens.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Set the number of candidates to generate.
    pub fn with_candidate_count(mut self, count: u32) -> Self {
        self.candidate_count = Some(count);
        self
    }

    /// Add a stop sequence.
    pub fn with_stop_sequence(mut self, stop: impl Into<String>) -> Self {
        self.stop_sequences.push(stop.into());
        self
    }

    /// Add a safety setting.
    pub fn with_safety_setting(mut self, setting: SafetySetting) -> Self {
        self.safety_settings.push(setting);
        self
    }

    /// Add a callable function.
    pub fn with_tool(mut self, tool: ToolDefinition) -> Self {
        self.tools.push(tool);
        self
    }

    /// Check option ranges before a request is built.
    ///
    /// # Errors
    /// Returns `GeminiError::ConfigError` naming the first out-of-range option.
    pub fn validate(&self) -> Result<(), GeminiError> {
        if let Some(count) = self.candidate_count
            && !(1..=MAX_CANDIDATE_COUNT).contains(&count)
        {
            return Err(GeminiError::ConfigError(format!(
                "candidate_count must be between 1 and {MAX_CANDIDATE_COUNT}, got {count}"
            )));
        }
        if let Some(temperature) = self.temperature
            && !(0.0..=2.0).contains(&temperature)
        {
            return Err(GeminiError::ConfigError(format!(
                "temperature must be between 0.0 and 2.0, got {temperature}"
            )));
        }
        if let Some(top_p) = self.top_p
            && !(0.0..=1.0).contains(&top_p)
        {
            return Err(GeminiError::ConfigError(format!(
                "top_p must be between 0.0 and 1.0, got {top_p}"
            )));
        }
        Ok(())
    }
}
