//! Secret redaction for logs and debug output.
//!
//! ```rust
//! use gemini_connector::observability::redact::RedactedString;
//!
//! let key = RedactedString::new("ya29.a0Af-secret");
//! assert_eq!(format!("{key}"), "[REDACTED]");
//! assert_eq!(key.as_str(), "ya29.a0Af-secret");
//! ```

use std::fmt;

/// A string wrapper that redacts its value in Display and Debug output.
///
/// The only way to read the inner value is [`as_str`](RedactedString::as_str)
/// or [`into_inner`](RedactedString::into_inner).
#[derive(Clone, PartialEq, Eq)]
pub struct RedactedString {
    inner: String,
}

impl RedactedString {
    /// Create a new redacted string.
    pub fn new<S: Into<String>>(value: S) -> Self {
        Self {
            inner: value.into(),
        }
    }

    /// Access the inner value. Only for building request headers.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Consume and return the inner value.
    pub fn into_inner(self) -> String {
        self.inner
    }
}

impl fmt::Display for RedactedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED]")
    }
}

impl fmt::Debug for RedactedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RedactedString(\"[REDACTED]\")")
    }
}

const GOOGLE_KEY_PREFIX: &str = "AIza";
const REDACTED_MARKER: &str = "***REDACTED***";

/// Redact Google API keys (`AIza...`).
///
/// ```rust
/// use gemini_connector::observability::redact::redact_google_api_key;
///
/// let text = "key=AIzaSyA1234567890abcdefghijklmnopqrstu&alt=json";
/// assert_eq!(redact_google_api_key(text), "key=AIza***REDACTED***&alt=json");
/// ```
pub fn redact_google_api_key(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(pos) = rest.find(GOOGLE_KEY_PREFIX) {
        result.push_str(&rest[..pos]);
        let after = &rest[pos + GOOGLE_KEY_PREFIX.len()..];
        let key_len = after
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '-'))
            .unwrap_or(after.len());
        result.push_str(GOOGLE_KEY_PREFIX);
        if key_len > 0 {
            result.push_str(REDACTED_MARKER);
        }
        rest = &after[key_len..];
    }
    result.push_str(rest);
    result
}

/// Redact `Bearer` tokens.
///
/// ```rust
/// use gemini_connector::observability::redact::redact_auth_header;
///
/// let header = "Authorization: Bearer ya29.token";
/// assert_eq!(redact_auth_header(header), "Authorization: Bearer ***REDACTED***");
/// ```
pub fn redact_auth_header(s: &str) -> String {
    // ASCII lowercasing keeps byte offsets aligned with `s`.
    if let Some(pos) = s.to_ascii_lowercase().find("bearer ") {
        let before = &s[..pos + 7];
        let after = &s[pos + 7..];
        let token_end = after
            .find(|c: char| c.is_whitespace())
            .unwrap_or(after.len());
        format!("{before}{REDACTED_MARKER}{}", &after[token_end..])
    } else {
        s.to_string()
    }
}

/// Apply every redaction pattern.
pub fn redact_all(s: &str) -> String {
    redact_auth_header(&redact_google_api_key(s))
}
