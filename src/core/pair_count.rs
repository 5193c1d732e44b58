//! Number of word pairs shown per round

use std::fmt;

/// Pairs per round, always within `MIN..=MAX`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PairCount(usize);

impl PairCount {
    pub const MIN: usize = 5;
    pub const MAX: usize = 50;
    pub const DEFAULT: Self = Self(18);

    /// Create a pair count, clamping into `MIN..=MAX`
    ///
    /// # Examples
    /// ```
    /// use word_elimination::core::PairCount;
    ///
    /// assert_eq!(PairCount::clamped(3).get(), 5);
    /// assert_eq!(PairCount::clamped(20).get(), 20);
    /// assert_eq!(PairCount::clamped(99).get(), 50);
    /// ```
    #[must_use]
    pub const fn clamped(value: usize) -> Self {
        if value < Self::MIN {
            Self(Self::MIN)
        } else if value > Self::MAX {
            Self(Self::MAX)
        } else {
            Self(value)
        }
    }

    #[inline]
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Tiles produced by a full round of this size
    #[inline]
    #[must_use]
    pub const fn tile_span(self) -> usize {
        self.0 * 2
    }

    #[must_use]
    pub const fn increased(self) -> Self {
        Self::clamped(self.0 + 1)
    }

    #[must_use]
    pub const fn decreased(self) -> Self {
        Self::clamped(self.0.saturating_sub(1))
    }
}

impl Default for PairCount {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for PairCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
