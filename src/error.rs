//! Error types for the Gemini connector.
//!
//! Each error variant carries a stable error code (SCREAMING_SNAKE_CASE)
//! that is included in the Display output and accessible via [`GeminiError::code()`].
//! Codes are part of the public API contract and will not change.

/// Stable error codes for programmatic error handling.
///
/// Use these for distinguishing errors rather than parsing Display output.
pub mod error_codes {
    /// Invalid or missing configuration, chat history, or execution settings.
    pub const CONFIG_INVALID: &str = "CONFIG_INVALID";

    /// Authentication failed (invalid/missing bearer key or API key).
    pub const AUTH_FAILED: &str = "AUTH_FAILED";

    /// Request to the Gemini endpoint failed or was rejected.
    pub const REQUEST_FAILED: &str = "REQUEST_FAILED";

    /// Response body could not be interpreted.
    pub const RESPONSE_INVALID: &str = "RESPONSE_INVALID";

    /// The prompt was blocked by Gemini safety filtering.
    pub const CONTENT_BLOCKED: &str = "CONTENT_BLOCKED";

    /// Request timed out.
    pub const TIMEOUT_ERROR: &str = "TIMEOUT_ERROR";

    /// Provider-side failure (rate limit, 5xx).
    pub const PROVIDER_ERROR: &str = "PROVIDER_ERROR";
}

/// Errors produced by the Gemini connector.
///
/// The Display impl formats as `[CODE] message`.
#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    /// Invalid or missing configuration, chat history, or execution settings.
    #[error("[{}] {}", error_codes::CONFIG_INVALID, .0)]
    ConfigError(String),

    /// Authentication failed.
    #[error("[{}] {}", error_codes::AUTH_FAILED, .0)]
    AuthError(String),

    /// Request to the Gemini endpoint failed or was rejected.
    #[error("[{}] {}", error_codes::REQUEST_FAILED, .0)]
    RequestError(String),

    /// Response body could not be interpreted.
    #[error("[{}] {}", error_codes::RESPONSE_INVALID, .0)]
    ResponseError(String),

    /// The prompt was blocked by Gemini safety filtering.
    #[error("[{}] {}", error_codes::CONTENT_BLOCKED, .0)]
    ContentBlocked(String),

    /// Request timed out.
    #[error("[{}] {}", error_codes::TIMEOUT_ERROR, .0)]
    TimeoutError(String),

    /// Provider-side failure not covered by other variants.
    #[error("[{}] {}", error_codes::PROVIDER_ERROR, .0)]
    ProviderError(String),
}

impl GeminiError {
    /// Returns the stable error code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError(_) => error_codes::CONFIG_INVALID,
            Self::AuthError(_) => error_codes::AUTH_FAILED,
            Self::RequestError(_) => error_codes::REQUEST_FAILED,
            Self::ResponseError(_) => error_codes::RESPONSE_INVALID,
            Self::ContentBlocked(_) => error_codes::CONTENT_BLOCKED,
            Self::TimeoutError(_) => error_codes::TIMEOUT_ERROR,
            Self::ProviderError(_) => error_codes::PROVIDER_ERROR,
        }
    }

    /// Returns the inner message without the code prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::ConfigError(m)
            | Self::AuthError(m)
            | Self::RequestError(m)
            | Self::ResponseError(m)
            | Self::ContentBlocked(m)
            | Self::TimeoutError(m)
            | Self::ProviderError(m) => m,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_code() {
        let err = GeminiError::ConfigError("empty chat history".into());
        assert_eq!(err.code(), "CONFIG_INVALID");
    }

    #[test]
    fn auth_error_code() {
        let err = GeminiError::AuthError("invalid key".into());
        assert_eq!(err.code(), "AUTH_FAILED");
    }

    #[test]
    fn content_blocked_code() {
        let err = GeminiError::ContentBlocked("SAFETY".into());
        assert_eq!(err.code(), "CONTENT_BLOCKED");
    }

    #[test]
    fn response_error_code() {
        let err = GeminiError::ResponseError("no candidates".into());
        assert_eq!(err.code(), "RESPONSE_INVALID");
    }

    #[test]
    fn display_includes_code_prefix() {
        let err = GeminiError::ConfigError("missing model".into());
        let display = format!("{err}");
        assert!(display.starts_with("[CONFIG_INVALID]"));
        assert!(display.contains("missing model"));
    }

    #[test]
    fn display_timeout_includes_prefix() {
        let err = GeminiError::TimeoutError("30s elapsed".into());
        assert_eq!(err.to_string(), "[TIMEOUT_ERROR] 30s elapsed");
    }

    #[test]
    fn message_returns_inner_text() {
        let err = GeminiError::ProviderError("bad gateway".into());
        assert_eq!(err.message(), "bad gateway");
    }

    #[test]
    fn all_codes_are_screaming_snake_case() {
        let errors = [
            GeminiError::ConfigError("x".into()),
            GeminiError::AuthError("x".into()),
            GeminiError::RequestError("x".into()),
            GeminiError::ResponseError("x".into()),
            GeminiError::ContentBlocked("x".into()),
            GeminiError::TimeoutError("x".into()),
            GeminiError::ProviderError("x".into()),
        ];
        for err in &errors {
            let code = err.code();
            assert!(
                code.chars().all(|c| c.is_ascii_uppercase() || c == '_'),
                "code {code:?} is not SCREAMING_SNAKE_CASE"
            );
        }
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GeminiError>();
    }
}
