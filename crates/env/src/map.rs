//! Ordered key/value environment entries

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Environment entries loaded from a file, in file order.
///
/// Duplicate inserts keep the later value: last write wins, within one file
/// and across merged loads alike.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvMap(IndexMap<String, String>);

impl EnvMap {
    /// Create a new empty map
    #[must_use]
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Insert an entry, returning the previous value if any
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    /// Get a value by key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Check if a key exists
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Merge another set of entries into this one; entries in `other` win
    pub fn merge(&mut self, other: Self) {
        self.0.extend(other.0);
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if there are no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate entries in file order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Write the entries into the process environment.
    ///
    /// With `override_existing` false, keys already present in the process
    /// environment keep their current value.
    pub fn apply(&self, override_existing: bool) {
        for (key, value) in &self.0 {
            if !override_existing && std::env::var_os(key).is_some() {
                continue;
            }
            std::env::set_var(key, value);
        }
    }
}

impl FromIterator<(String, String)> for EnvMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_write_wins() {
        let mut map = EnvMap::new();
        assert_eq!(map.insert("KEY", "first"), None);
        assert_eq!(map.insert("KEY", "second"), Some("first".to_string()));
        assert_eq!(map.get("KEY"), Some("second"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn merge_prefers_the_later_load() {
        let mut first = EnvMap::new();
        first.insert("SHARED", "old");
        first.insert("ONLY_FIRST", "kept");

        let mut second = EnvMap::new();
        second.insert("SHARED", "new");

        first.merge(second);
        assert_eq!(first.get("SHARED"), Some("new"));
        assert_eq!(first.get("ONLY_FIRST"), Some("kept"));
    }

    #[test]
    fn apply_respects_the_no_override_policy() {
        std::env::set_var("ADORN_TEST_APPLY_KEPT", "process");

        let mut map = EnvMap::new();
        map.insert("ADORN_TEST_APPLY_KEPT", "file");
        map.insert("ADORN_TEST_APPLY_NEW", "file");
        map.apply(false);

        assert_eq!(
            std::env::var("ADORN_TEST_APPLY_KEPT").as_deref(),
            Ok("process")
        );
        assert_eq!(std::env::var("ADORN_TEST_APPLY_NEW").as_deref(), Ok("file"));

        map.apply(true);
        assert_eq!(
            std::env::var("ADORN_TEST_APPLY_KEPT").as_deref(),
            Ok("file")
        );

        std::env::remove_var("ADORN_TEST_APPLY_KEPT");
        std::env::remove_var("ADORN_TEST_APPLY_NEW");
    }

    #[test]
    fn missing_key_resolves_to_none() {
        let map = EnvMap::new();
        assert_eq!(map.get("NEVER_SET"), None);
    }
}
