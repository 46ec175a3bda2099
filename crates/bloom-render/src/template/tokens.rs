//! Single-pass multi-pattern replacement.
//!
//! [`TokenMap`] holds literal `key → value` pairs and replaces every key in a
//! text in one left-to-right scan. All keys are compiled into a single regex
//! alternation, longest key first, so when two keys share a prefix (`$accent`
//! and `$accentname`, `$base` and `$base/50`) the longer one always wins at a
//! given position. Replacement output is never rescanned.
//!
//! # Example
//!
//! ```rust
//! use bloom_render::template::TokenMap;
//!
//! let mut tokens = TokenMap::new();
//! tokens.insert("$accent", "#eb6f92");
//! tokens.insert("$accentname", "love");
//!
//! let out = tokens.apply("$accentname is $accent");
//! assert_eq!(out.text, "love is #eb6f92");
//! assert_eq!(out.count, 2);
//! ```

use std::collections::HashMap;

use regex::{Captures, Regex, RegexBuilder};

/// Compiled patterns above this size are rejected by the regex crate. Token
/// maps are small, the limit is raised only so long metadata never trips it.
const PATTERN_SIZE_LIMIT: usize = 64 * (1 << 20);

/// Result of [`TokenMap::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replaced {
    pub text: String,
    /// Number of keys replaced.
    pub count: usize,
}

/// An ordered set of literal replacements applied in one pass.
///
/// The first value inserted for a key is kept; later inserts of the same key
/// are ignored. Empty keys are ignored.
#[derive(Debug, Clone, Default)]
pub struct TokenMap {
    keys: Vec<String>,
    values: HashMap<String, String>,
}

impl TokenMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a replacement. Returns `false` if the key was empty or already
    /// present.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
        let key = key.into();
        if key.is_empty() || self.values.contains_key(&key) {
            return false;
        }
        self.values.insert(key.clone(), value.into());
        self.keys.push(key);
        true
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Keys in match-priority order: longest first, insertion order on ties.
    pub fn keys_by_priority(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.keys.iter().map(String::as_str).collect();
        // Stable sort keeps insertion order among equal lengths.
        keys.sort_by(|a, b| b.len().cmp(&a.len()));
        keys
    }

    /// Builds the alternation matching every key.
    fn compile(&self) -> Result<Regex, regex::Error> {
        let pattern = self
            .keys_by_priority()
            .into_iter()
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join("|");

        RegexBuilder::new(&pattern)
            .size_limit(PATTERN_SIZE_LIMIT)
            .dfa_size_limit(PATTERN_SIZE_LIMIT)
            .build()
    }

    /// Replaces every occurrence of every key in one scan.
    ///
    /// Text between matches is copied through unchanged. If the alternation
    /// cannot be compiled the text is returned unchanged and a warning is
    /// logged.
    pub fn apply(&self, text: &str) -> Replaced {
        if self.is_empty() {
            return Replaced {
                text: text.to_string(),
                count: 0,
            };
        }

        let regex = match self.compile() {
            Ok(regex) => regex,
            Err(err) => {
                tracing::warn!(error = %err, keys = self.len(), "token pattern failed to compile");
                return Replaced {
                    text: text.to_string(),
                    count: 0,
                };
            }
        };

        let mut count = 0;
        let replaced = regex.replace_all(text, |caps: &Captures<'_>| {
            let matched = &caps[0];
            count += 1;
            // Every match is one of our keys.
            self.values.get(matched).cloned().unwrap_or_else(|| matched.to_string())
        });

        Replaced {
            text: replaced.into_owned(),
            count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_map_is_identity() {
        let tokens = TokenMap::new();
        let out = tokens.apply("$base stays");
        assert_eq!(out.text, "$base stays");
        assert_eq!(out.count, 0);
    }

    #[test]
    fn test_longest_key_wins() {
        let mut tokens = TokenMap::new();
        tokens.insert("$base", "A");
        tokens.insert("$base/50", "B");
        assert_eq!(tokens.apply("$base $base/50 $base/5").text, "A B A/5");
    }

    #[test]
    fn test_shorter_key_inserted_first_still_loses() {
        let mut tokens = TokenMap::new();
        tokens.insert("$accent", "#eb6f92");
        tokens.insert("$accentname", "love");
        tokens.insert("$onaccent", "#e0def4");
        let out = tokens.apply("$accentname/$accent/$onaccent");
        assert_eq!(out.text, "love/#eb6f92/#e0def4");
        assert_eq!(out.count, 3);
    }

    #[test]
    fn test_replacements_are_not_rescanned() {
        let mut tokens = TokenMap::new();
        tokens.insert("$name", "$id");
        tokens.insert("$id", "rose-pine");
        assert_eq!(tokens.apply("$name $id").text, "$id rose-pine");
    }

    #[test]
    fn test_metacharacters_are_literal() {
        let mut tokens = TokenMap::new();
        tokens.insert("rgb(235, 188, 186)", "$rose");
        tokens.insert("[1.5]", "$x");
        let out = tokens.apply("a: rgb(235, 188, 186); b: [1.5]; c: rgb(235 188 186)");
        assert_eq!(out.text, "a: $rose; b: $x; c: rgb(235 188 186)");
        assert_eq!(out.count, 2);
    }

    #[test]
    fn test_first_insert_wins() {
        let mut tokens = TokenMap::new();
        assert!(tokens.insert("#191724", "$base"));
        assert!(!tokens.insert("#191724", "$other"));
        assert!(!tokens.insert("", "$empty"));
        assert_eq!(tokens.get("#191724"), Some("$base"));
        assert_eq!(tokens.len(), 1);
    }

    #[test]
    fn test_priority_order_is_stable() {
        let mut tokens = TokenMap::new();
        tokens.insert("bb", "1");
        tokens.insert("aaa", "2");
        tokens.insert("cc", "3");
        assert_eq!(tokens.keys_by_priority(), vec!["aaa", "bb", "cc"]);
    }

    #[test]
    fn test_unicode_passthrough() {
        let mut tokens = TokenMap::new();
        tokens.insert("Rosé Pine", "$name");
        assert_eq!(tokens.apply("« Rosé Pine »").text, "« $name »");
    }
}
