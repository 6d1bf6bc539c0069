//! Navigation path type.

use serde::{Deserialize, Serialize};

/// A client-side navigation location.
///
/// Paths are opaque slash-separated strings. The routing policy only ever
/// prefix-matches them; they are never parsed into a richer structure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoutePath(String);

impl RoutePath {
    /// Creates a path from a string.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Returns the path as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the path starts with the given literal prefix.
    #[must_use]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.0.starts_with(prefix)
    }
}

impl std::fmt::Display for RoutePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for RoutePath {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for RoutePath {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
