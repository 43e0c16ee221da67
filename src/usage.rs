//! Token usage reported by Gemini.
//!
//! # Examples
//!
//! ```
//! use gemini_connector::usage::TokenUsage;
//!
//! let mut total = TokenUsage::new(120, 40);
//! total.add(&TokenUsage::new(200, 60));
//! assert_eq!(total.total(), 420);
//! ```

use serde::{Deserialize, Serialize};

/// Token counts for a single `generateContent` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Tokens in the prompt.
    pub prompt_tokens: u64,
    /// Tokens across all returned candidates.
    pub candidates_tokens: u64,
    /// Provider-reported total, when present. Otherwise derived.
    pub total_tokens: Option<u64>,
}

impl TokenUsage {
    /// Create a usage record without a provider-reported total.
    pub fn new(prompt_tokens: u64, candidates_tokens: u64) -> Self {
        Self {
            prompt_tokens,
            candidates_tokens,
            total_tokens: None,
        }
    }

    /// Attach the provider-reported total.
    pub fn with_total_tokens(mut self, total: u64) -> Self {
        self.total_tokens = Some(total);
        self
    }

    /// Total tokens consumed.
    ///
    /// Prefers the provider-reported total, which may include tokens
    /// (e.g. cached content) not broken out in the other counters.
    pub fn total(&self) -> u64 {
        self.total_tokens.unwrap_or_else(|| {
            self.prompt_tokens.saturating_add(self.candidates_tokens)
        })
    }

    /// Accumulate counts from another usage record.
    pub fn add(&mut self, other: &TokenUsage) {
        let total = self.total().saturating_add(other.total());
        self.prompt_tokens = self.prompt_tokens.saturating_add(other.prompt_tokens);
        self.candidates_tokens = self
            .candidates_tokens
            .saturating_add(other.candidates_tokens);
        self.total_tokens = match (self.total_tokens, other.total_tokens) {
            (None, None) => None,
            _ => Some(total),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_is_derived_without_reported_total() {
        let usage = TokenUsage::new(10, 5);
        assert_eq!(usage.total(), 15);
    }

    #[test]
    fn total_prefers_reported_value() {
        let usage = TokenUsage::new(10, 5).with_total_tokens(18);
        assert_eq!(usage.total(), 18);
    }

    #[test]
    fn add_without_reported_totals() {
        let mut usage = TokenUsage::new(10, 5);
        usage.add(&TokenUsage::new(1, 2));
        assert_eq!(usage.prompt_tokens, 11);
        assert_eq!(usage.candidates_tokens, 7);
        assert!(usage.total_tokens.is_none());
        assert_eq!(usage.total(), 18);
    }

    #[test]
    fn add_mixes_reported_and_derived_totals() {
        let mut usage = TokenUsage::new(10, 5).with_total_tokens(20);
        usage.add(&TokenUsage::new(1, 2));
        assert_eq!(usage.total_tokens, Some(23));
    }

    #[test]
    fn add_saturates() {
        let mut usage = TokenUsage::new(u64::MAX, 0);
        usage.add(&TokenUsage::new(1, 0));
        assert_eq!(usage.prompt_tokens, u64::MAX);
    }
}
