// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// A normalized entity name.
///
/// Names are the identity of genres, actors, directors and users, and the
/// title half of a movie's identity. Invalid input (empty or whitespace only)
/// degrades to an absent name instead of failing, so callers must check
/// [`Name::is_present`] before relying on it.
///
/// Absent names order before every present name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name(Option<String>);

impl Name {
    /// Creates a name from raw input, trimming surrounding whitespace.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        let trimmed: &str = raw.trim();
        if trimmed.is_empty() {
            Self(None)
        } else {
            Self(Some(trimmed.to_string()))
        }
    }

    /// Creates a name from raw input without trimming it.
    ///
    /// Only the empty string is rejected. Used for usernames, which are
    /// stored exactly as entered.
    #[must_use]
    pub fn exact(raw: &str) -> Self {
        if raw.is_empty() {
            Self(None)
        } else {
            Self(Some(raw.to_string()))
        }
    }

    /// Returns the name, if it was valid.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Returns whether the input was valid.
    #[must_use]
    pub const fn is_present(&self) -> bool {
        self.0.is_some()
    }

    /// Returns whether this name equals the given string.
    ///
    /// An absent name matches nothing.
    #[must_use]
    pub fn matches(&self, other: &str) -> bool {
        self.0.as_deref() == Some(other)
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            Some(value) => write!(f, "{value}"),
            None => write!(f, "None"),
        }
    }
}
