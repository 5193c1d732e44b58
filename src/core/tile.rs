//! Tile representation
//!
//! A tile is one half of some word pair placed on the board. Tiles are rebuilt
//! from scratch every time the round's slice of the word list changes.

use std::fmt;

/// Interaction state of a single tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TileState {
    #[default]
    Idle,
    Selected,
    Eliminated,
    Mismatched,
}

impl TileState {
    /// Only idle tiles accept clicks
    #[inline]
    #[must_use]
    pub const fn is_clickable(self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// A tile on the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    content: String,
    state: TileState,
}

impl Tile {
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            state: TileState::Idle,
        }
    }

    #[inline]
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> TileState {
        self.state
    }

    #[inline]
    pub(crate) fn set_state(&mut self, state: TileState) {
        self.state = state;
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tile_is_idle() {
        let tile = Tile::new("cat");
        assert_eq!(tile.content(), "cat");
        assert_eq!(tile.state(), TileState::Idle);
    }

    #[test]
    fn only_idle_is_clickable() {
        assert!(TileState::Idle.is_clickable());
        assert!(!TileState::Selected.is_clickable());
        assert!(!TileState::Eliminated.is_clickable());
        assert!(!TileState::Mismatched.is_clickable());
    }
}
