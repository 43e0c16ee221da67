//! Observability helpers for the Gemini connector.
//!
//! # Tracing
//!
//! Every `generateContent` call runs inside a span named
//! [`SPAN_PROVIDER_REQUEST`](spans::SPAN_PROVIDER_REQUEST) carrying the
//! provider, model, and endpoint type. Use the [`provider_request_span!`](crate::provider_request_span)
//! macro for consistent field names.
//!
//! # Secret Redaction
//!
//! Use [`RedactedString`](redact::RedactedString) to hold bearer keys and API keys
//! so they never show up in `Debug` output, and [`redact_all`](redact::redact_all)
//! before logging provider error bodies.

pub mod redact;
pub mod spans;

pub use redact::{RedactedString, redact_all, redact_auth_header, redact_google_api_key};
pub use spans::{
    FIELD_ENDPOINT_TYPE, FIELD_ERROR_TYPE, FIELD_MODEL, FIELD_PROVIDER, SPAN_PROVIDER_REQUEST,
};
