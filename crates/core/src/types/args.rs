//! The argument bundle forwarded through wrappers

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Dynamic value passed to and returned from callables
pub use serde_json::Value;

/// The combined positional and named arguments of a single call.
///
/// Wrappers forward bundles unchanged; only `Signature::bind` interprets
/// them against a concrete parameter list. Positional order and named-entry
/// insertion order are both preserved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArgBundle {
    positional: Vec<Value>,
    named: IndexMap<String, Value>,
}

impl ArgBundle {
    /// Create an empty bundle
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a positional argument
    #[must_use]
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Add a named argument
    #[must_use]
    pub fn named_arg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.named.insert(name.into(), value.into());
        self
    }

    /// Positional arguments, in call order
    #[must_use]
    pub fn positional(&self) -> &[Value] {
        &self.positional
    }

    /// Named arguments, in insertion order
    #[must_use]
    pub fn named(&self) -> &IndexMap<String, Value> {
        &self.named
    }

    /// Total number of arguments in the bundle
    #[must_use]
    pub fn len(&self) -> usize {
        self.positional.len() + self.named.len()
    }

    /// Check whether the bundle carries no arguments at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.named.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_preserves_order() {
        let bundle = ArgBundle::new()
            .arg("first")
            .arg(2)
            .named_arg("b", true)
            .named_arg("a", "last");

        assert_eq!(bundle.positional().len(), 2);
        assert_eq!(bundle.positional()[0], Value::from("first"));
        let names: Vec<&str> = bundle.named().keys().map(String::as_str).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(bundle.len(), 4);
    }

    #[test]
    fn empty_bundle() {
        let bundle = ArgBundle::new();
        assert!(bundle.is_empty());
        assert_eq!(bundle.len(), 0);
    }
}
