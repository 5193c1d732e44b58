//! Core domain types for the elimination game
//!
//! Pure value types shared by the parsers, the store and the game engine.

mod pair;
mod pair_count;
mod tile;

pub use pair::{WordPair, WordPairError};
pub use pair_count::PairCount;
pub use tile::{Tile, TileState};
