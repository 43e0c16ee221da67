//! Response metadata attached to each Gemini candidate.

use serde::{Deserialize, Serialize};

use crate::usage::TokenUsage;

/// The reason the model stopped generating a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    /// Natural stop or a configured stop sequence.
    Stop,
    /// Hit `maxOutputTokens`.
    Length,
    /// Stopped by safety filtering (includes blocklist and SPII).
    Safety,
    /// Stopped because output resembled training data.
    Recitation,
    /// Unspecified or unknown reason.
    Other,
}

impl FinishReason {
    /// Map a Gemini `finishReason` wire value.
    pub fn from_wire(value: &str) -> Self {
        match value {
            "STOP" => Self::Stop,
            "MAX_TOKENS" => Self::Length,
            "SAFETY" | "BLOCKLIST" | "PROHIBITED_CONTENT" | "SPII" => Self::Safety,
            "RECITATION" => Self::Recitation,
            _ => Self::Other,
        }
    }
}

impl std::fmt::Display for FinishReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stop => write!(f, "stop"),
            Self::Length => write!(f, "length"),
            Self::Safety => write!(f, "safety"),
            Self::Recitation => write!(f, "recitation"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// A safety rating reported for a prompt or candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyRating {
    /// Harm category wire name, e.g. `HARM_CATEGORY_HARASSMENT`.
    pub category: String,
    /// Probability bucket, e.g. `NEGLIGIBLE`.
    pub probability: String,
    /// Whether this rating caused the content to be blocked.
    #[serde(default)]
    pub blocked: bool,
}

/// Metadata for one returned candidate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeminiMetadata {
    /// Why generation stopped, when reported.
    pub finish_reason: Option<FinishReason>,
    /// Candidate index within the response.
    pub index: u32,
    /// Usage for the whole response (shared by all candidates).
    pub usage: Option<TokenUsage>,
    /// Tokens in this candidate alone.
    pub current_candidate_token_count: Option<u64>,
    /// Prompt block reason, when the prompt was partially blocked.
    pub prompt_feedback_block_reason: Option<String>,
    /// Safety ratings on the prompt.
    #[serde(default)]
    pub prompt_safety_ratings: Vec<SafetyRating>,
    /// Safety ratings on this candidate.
    #[serde(default)]
    pub response_safety_ratings: Vec<SafetyRating>,
}
