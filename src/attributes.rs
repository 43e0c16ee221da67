//! Read-only service attributes.
//!
//! Every chat completion service describes its configuration through a
//! [`ServiceAttributes`] map. The map is filled once when the service is
//! constructed and never mutated afterwards.
//!
//! # Examples
//!
//! ```
//! use gemini_connector::attributes::{MODEL_ID_KEY, ServiceAttributes};
//!
//! let attrs = ServiceAttributes::new().with(MODEL_ID_KEY, "gemini-1.5-pro");
//! assert_eq!(attrs.get(MODEL_ID_KEY), Some("gemini-1.5-pro"));
//! assert_eq!(&attrs[MODEL_ID_KEY], "gemini-1.5-pro");
//! ```

use std::collections::BTreeMap;
use std::ops::Index;

use serde::Serialize;

/// Key under which a service exposes its model identifier.
pub const MODEL_ID_KEY: &str = "model_id";

/// Immutable string-to-string attribute map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ServiceAttributes {
    entries: BTreeMap<String, String>,
}

impl ServiceAttributes {
    /// Create an empty attribute map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the map with `key` set to `value`.
    ///
    /// Values are stored verbatim.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Look up an attribute value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Whether an attribute is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map holds no attributes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Index<&str> for ServiceAttributes {
    type Output = str;

    /// Panics if `key` is absent, like `HashMap` indexing.
    fn index(&self, key: &str) -> &str {
        match self.entries.get(key) {
            Some(value) => value,
            None => panic!("no service attribute named {key:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_by_default() {
        let attrs = ServiceAttributes::new();
        assert!(attrs.is_empty());
        assert_eq!(attrs.len(), 0);
        assert!(attrs.get(MODEL_ID_KEY).is_none());
    }

    #[test]
    fn with_stores_value_verbatim() {
        let attrs = ServiceAttributes::new().with(MODEL_ID_KEY, "  Gemini-PRO ");
        assert_eq!(attrs.get(MODEL_ID_KEY), Some("  Gemini-PRO "));
    }

    #[test]
    fn with_overwrites_existing_key() {
        let attrs = ServiceAttributes::new()
            .with(MODEL_ID_KEY, "first")
            .with(MODEL_ID_KEY, "second");
        assert_eq!(attrs.len(), 1);
        assert_eq!(&attrs[MODEL_ID_KEY], "second");
    }

    #[test]
    fn iter_is_key_ordered() {
        let attrs = ServiceAttributes::new()
            .with(MODEL_ID_KEY, "m")
            .with("location", "us-central1")
            .with("endpoint", "https://example.com");
        let keys: Vec<&str> = attrs.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["endpoint", "location", MODEL_ID_KEY]);
    }

    #[test]
    fn contains_key() {
        let attrs = ServiceAttributes::new().with(MODEL_ID_KEY, "m");
        assert!(attrs.contains_key(MODEL_ID_KEY));
        assert!(!attrs.contains_key("endpoint"));
    }

    #[test]
    #[should_panic(expected = "no service attribute")]
    fn index_missing_key_panics() {
        let attrs = ServiceAttributes::new();
        let _ = &attrs[MODEL_ID_KEY];
    }

    #[test]
    fn attributes_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ServiceAttributes>();
    }

    #[test]
    fn serializes_as_flat_map() {
        let attrs = ServiceAttributes::new().with(MODEL_ID_KEY, "m");
        let json = serde_json::to_value(&attrs).unwrap_or_default();
        assert_eq!(json[MODEL_ID_KEY], "m");
    }
}
