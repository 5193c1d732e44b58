//! Match engine: per-tile state and pairwise click evaluation

use super::scheduler::RoundId;
use crate::core::{Tile, TileState, WordPair};

/// Immediate result of a click
///
/// `Matched` and `Mismatched` are decisions; the tile states change later,
/// when the owning session resolves the pair after its visual delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Click rejected: not playing, out of range, or tile not idle
    Ignored,
    /// First tile of a pair selected
    AwaitingPartner,
    Matched { first: usize, second: usize },
    Mismatched { first: usize, second: usize },
}

/// Board state for the current round
#[derive(Debug, Default, Clone)]
pub struct MatchEngine {
    tiles: Vec<Tile>,
    pending: Option<usize>,
    round: RoundId,
}

impl MatchEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the board with fresh idle tiles and start a new round identity
    pub fn load_round(&mut self, contents: Vec<String>) -> RoundId {
        self.tiles = contents.into_iter().map(Tile::new).collect();
        self.pending = None;
        self.round += 1;
        self.round
    }

    #[must_use]
    pub const fn round(&self) -> RoundId {
        self.round
    }

    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Tile waiting for its partner, if any
    #[must_use]
    pub const fn pending(&self) -> Option<usize> {
        self.pending
    }

    #[must_use]
    pub fn eliminated_count(&self) -> usize {
        self.count_in(TileState::Eliminated)
    }

    /// True once every tile of a non-empty board is eliminated
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        !self.tiles.is_empty() && self.eliminated_count() == self.tiles.len()
    }

    fn count_in(&self, state: TileState) -> usize {
        self.tiles.iter().filter(|t| t.state() == state).count()
    }

    /// Select tile `index` and, if it completes a pair, decide the outcome
    ///
    /// The pair matches when some entry of `words` holds the two contents in
    /// either order. The pending pointer is released as soon as a pair is
    /// formed, so the next click starts a new pair.
    pub fn click(&mut self, index: usize, words: &[WordPair]) -> ClickOutcome {
        let Some(tile) = self.tiles.get_mut(index) else {
            return ClickOutcome::Ignored;
        };
        if !tile.state().is_clickable() {
            return ClickOutcome::Ignored;
        }
        tile.set_state(TileState::Selected);

        let Some(first) = self.pending.take() else {
            self.pending = Some(index);
            return ClickOutcome::AwaitingPartner;
        };

        let a = self.tiles[first].content();
        let b = self.tiles[index].content();
        if words.iter().any(|pair| pair.matches(a, b)) {
            ClickOutcome::Matched {
                first,
                second: index,
            }
        } else {
            ClickOutcome::Mismatched {
                first,
                second: index,
            }
        }
    }

    /// Mark a matched pair as eliminated
    pub fn eliminate(&mut self, first: usize, second: usize) {
        self.set_pair(first, second, TileState::Eliminated);
    }

    /// Mark a mismatched pair so it rejects clicks until reverted
    pub fn flag_mismatch(&mut self, first: usize, second: usize) {
        self.set_pair(first, second, TileState::Mismatched);
    }

    /// Return mismatched (or still selected) tiles of a pair to idle
    pub fn revert(&mut self, first: usize, second: usize) {
        for index in [first, second] {
            if let Some(tile) = self.tiles.get_mut(index)
                && matches!(tile.state(), TileState::Mismatched | TileState::Selected)
            {
                tile.set_state(TileState::Idle);
            }
        }
    }

    fn set_pair(&mut self, first: usize, second: usize, state: TileState) {
        for index in [first, second] {
            if let Some(tile) = self.tiles.get_mut(index) {
                tile.set_state(state);
            }
        }
    }
}
