//! Persistence
//!
//! A small key-value boundary plus the store that owns the title and the
//! canonical word list on top of it.

mod kv;
mod word_list;

pub use kv::{JsonFileStore, KeyValueStore, MemoryStore, StoreError};
pub use word_list::{DEFAULT_TITLE, TITLE_KEY, WORD_LIST_KEY, WordListStore};
