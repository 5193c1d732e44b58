//! Word pair representation
//!
//! A `WordPair` couples a front phrase (usually the foreign word) with its back
//! phrase (usually the translation). Both halves are trimmed and never empty.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One entry of a word list: `(front, back)`
///
/// Serialized as a 2-element JSON array, e.g. `["cat", "猫"]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "(String, String)", try_from = "(String, String)")]
pub struct WordPair {
    front: String,
    back: String,
}

/// Error type for invalid pairs
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordPairError {
    #[error("front phrase is empty")]
    EmptyFront,
    #[error("back phrase is empty")]
    EmptyBack,
}

impl WordPair {
    /// Create a new pair, trimming both halves
    ///
    /// # Errors
    /// Returns `WordPairError` if either half is blank after trimming.
    ///
    /// # Examples
    /// ```
    /// use word_elimination::core::WordPair;
    ///
    /// let pair = WordPair::new("  cat ", "猫").unwrap();
    /// assert_eq!(pair.front(), "cat");
    ///
    /// assert!(WordPair::new("   ", "猫").is_err());
    /// ```
    pub fn new(front: impl AsRef<str>, back: impl AsRef<str>) -> Result<Self, WordPairError> {
        let front = front.as_ref().trim();
        let back = back.as_ref().trim();

        if front.is_empty() {
            return Err(WordPairError::EmptyFront);
        }
        if back.is_empty() {
            return Err(WordPairError::EmptyBack);
        }

        Ok(Self {
            front: front.to_string(),
            back: back.to_string(),
        })
    }

    #[inline]
    #[must_use]
    pub fn front(&self) -> &str {
        &self.front
    }

    #[inline]
    #[must_use]
    pub fn back(&self) -> &str {
        &self.back
    }

    /// Check whether two displayed contents form this pair, in either order
    ///
    /// Matching compares `{a, b}` with `{front, back}` as unordered sets.
    #[inline]
    #[must_use]
    pub fn matches(&self, a: &str, b: &str) -> bool {
        (self.front == a && self.back == b) || (self.front == b && self.back == a)
    }
}

impl fmt::Display for WordPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.front, self.back)
    }
}

impl From<WordPair> for (String, String) {
    fn from(pair: WordPair) -> Self {
        (pair.front, pair.back)
    }
}

impl TryFrom<(String, String)> for WordPair {
    type Error = WordPairError;

    fn try_from((front, back): (String, String)) -> Result<Self, Self::Error> {
        Self::new(front, back)
    }
}
