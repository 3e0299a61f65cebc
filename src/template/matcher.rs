//! Path matching against a compiled template.
//!
//! # Responsibilities
//! - Align a concrete request path with a compiled template
//! - Return every parameter with its captured segment, in template order
//!
//! # Design Decisions
//! - Whole-path match only (the pattern is anchored)
//! - All-or-nothing: a partial capture is a no-match
//! - Captured values are returned verbatim (no percent-decoding)

use crate::template::compiler::CompiledMatcher;

/// Parameters extracted from a matching path, in template order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathParams {
    entries: Vec<(String, String)>,
}

impl PathParams {
    /// Value captured for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// `(name, value)` pairs in template order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CompiledMatcher {
    /// Returns true if `path` conforms to the template.
    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    /// Extract parameter values from `path`.
    ///
    /// Returns `None` when the path does not conform to the template:
    /// a different segment count, a literal mismatch, or an empty segment
    /// where a placeholder sits.
    pub fn match_path(&self, path: &str) -> Option<PathParams> {
        let captures = self.regex.captures(path)?;

        let entries = self
            .params()
            .iter()
            .enumerate()
            .map(|(i, name)| {
                // Group 0 is the whole match.
                captures
                    .get(i + 1)
                    .map(|m| (name.clone(), m.as_str().to_string()))
            })
            .collect::<Option<Vec<_>>>()?;

        Some(PathParams { entries })
    }
}
