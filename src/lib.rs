//! Word Elimination
//!
//! A word/phrase matching game: import word pairs from a spreadsheet or text
//! file, then clear boards of shuffled tiles by picking the two halves of each
//! pair against a timer.
//!
//! # Quick Start
//!
//! ```rust
//! use word_elimination::core::{PairCount, WordPair};
//! use word_elimination::game::{RESOLVE_DELAY, Session};
//! use word_elimination::store::{MemoryStore, WordListStore};
//!
//! let mut store = WordListStore::open(MemoryStore::new()).unwrap();
//! store
//!     .replace(vec![WordPair::new("cat", "猫").unwrap()])
//!     .unwrap();
//!
//! let mut session = Session::new(store, PairCount::default());
//! session.start().unwrap();
//!
//! let cat = session.tiles().iter().position(|t| t.content() == "cat").unwrap();
//! let neko = session.tiles().iter().position(|t| t.content() == "猫").unwrap();
//! session.click(cat);
//! session.click(neko);
//! session.advance(RESOLVE_DELAY);
//!
//! assert!(!session.is_playing());
//! ```

// Core domain types
pub mod core;

// Word list parsing and import
pub mod wordlists;

// Persistence
pub mod store;

// Game engine
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
