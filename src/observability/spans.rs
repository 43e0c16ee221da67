//! Span names and field keys.
//!
//! ```rust,ignore
//! use gemini_connector::provider_request_span;
//!
//! let span = provider_request_span!("vertex_ai", "gemini-1.5-pro", "generate_content");
//! let _enter = span.enter();
//! ```

/// Root span for a single Gemini request.
pub const SPAN_PROVIDER_REQUEST: &str = "gemini.provider.request";

/// Provider name field (`"vertex_ai"`, `"google_ai"`).
pub const FIELD_PROVIDER: &str = "provider";

/// Model identifier field.
pub const FIELD_MODEL: &str = "model";

/// Endpoint method field (`"generate_content"`).
pub const FIELD_ENDPOINT_TYPE: &str = "endpoint_type";

/// Error code field, set on failure events.
pub const FIELD_ERROR_TYPE: &str = "error_type";

/// Create a provider request span with the standard fields.
#[macro_export]
macro_rules! provider_request_span {
    ($provider:expr, $model:expr, $endpoint_type:expr) => {
        tracing::info_span!(
            $crate::observability::spans::SPAN_PROVIDER_REQUEST,
            { $crate::observability::spans::FIELD_PROVIDER } = $provider,
            { $crate::observability::spans::FIELD_MODEL } = $model,
            { $crate::observability::spans::FIELD_ENDPOINT_TYPE } = $endpoint_type,
        )
    };
}
