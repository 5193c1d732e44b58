//! Persisted title and canonical word list

use super::kv::{KeyValueStore, StoreError};
use crate::core::WordPair;
use tracing::{debug, info, warn};

/// Title used when none is stored or the stored one is blank
pub const DEFAULT_TITLE: &str = "word elimination game";

/// Storage key of the title string
pub const TITLE_KEY: &str = "word_game_title";

/// Storage key of the serialized word list
pub const WORD_LIST_KEY: &str = "word_game_word_list";

/// Owner of the canonical word list and the game title
///
/// Every mutation is written through to the backend before the in-memory copy
/// changes, so a failed write leaves the previous state intact.
#[derive(Debug)]
pub struct WordListStore<S> {
    backend: S,
    title: String,
    words: Vec<WordPair>,
}

impl<S: KeyValueStore> WordListStore<S> {
    /// Read the persisted title and list
    ///
    /// Returns `None` when nothing was ever stored. A stored list that can't be
    /// decoded is dropped with a warning.
    ///
    /// # Errors
    /// Returns `StoreError` if the backend itself fails.
    pub fn load(backend: &S) -> Result<Option<(String, Vec<WordPair>)>, StoreError> {
        let title = backend.get(TITLE_KEY)?;
        let list = backend.get(WORD_LIST_KEY)?;

        if title.is_none() && list.is_none() {
            return Ok(None);
        }

        let title = normalize_title(title.as_deref().unwrap_or_default());
        let words = match list {
            Some(json) => serde_json::from_str::<Vec<WordPair>>(&json).unwrap_or_else(|e| {
                warn!(error = %e, "stored word list is invalid, ignoring it");
                Vec::new()
            }),
            None => Vec::new(),
        };

        Ok(Some((title, words)))
    }

    /// Open the store, falling back to defaults when nothing is persisted
    ///
    /// # Errors
    /// Returns `StoreError` if the backend cannot be read.
    pub fn open(backend: S) -> Result<Self, StoreError> {
        let (title, words) =
            Self::load(&backend)?.unwrap_or_else(|| (DEFAULT_TITLE.to_string(), Vec::new()));
        info!(title = %title, pairs = words.len(), "word list loaded");
        Ok(Self {
            backend,
            title,
            words,
        })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn words(&self) -> &[WordPair] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub const fn backend(&self) -> &S {
        &self.backend
    }

    /// Replace the canonical list and persist it
    ///
    /// # Errors
    /// Returns `StoreError` if the list cannot be written; the previous list
    /// is kept in that case.
    pub fn replace(&mut self, words: Vec<WordPair>) -> Result<(), StoreError> {
        let json = serde_json::to_string(&words)?;
        self.backend.set(WORD_LIST_KEY, &json)?;
        debug!(pairs = words.len(), "word list persisted");
        self.words = words;
        Ok(())
    }

    /// Set and persist the title, using the default for blank input
    ///
    /// # Errors
    /// Returns `StoreError` if the title cannot be written.
    pub fn set_title(&mut self, title: &str) -> Result<(), StoreError> {
        let title = normalize_title(title);
        self.backend.set(TITLE_KEY, &title)?;
        self.title = title;
        Ok(())
    }
}

fn normalize_title(title: &str) -> String {
    let title = title.trim();
    if title.is_empty() {
        DEFAULT_TITLE.to_string()
    } else {
        title.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn pairs() -> Vec<WordPair> {
        vec![
            WordPair::new("cat", "猫").unwrap(),
            WordPair::new("dog", "狗").unwrap(),
        ]
    }

    #[test]
    fn empty_backend_loads_nothing() {
        assert_eq!(WordListStore::load(&MemoryStore::new()).unwrap(), None);

        let store = WordListStore::open(MemoryStore::new()).unwrap();
        assert_eq!(store.title(), DEFAULT_TITLE);
        assert!(store.is_empty());
    }

    #[test]
    fn replace_persists_as_nested_arrays() {
        let mut store = WordListStore::open(MemoryStore::new()).unwrap();
        store.replace(pairs()).unwrap();

        let raw = store.backend().get(WORD_LIST_KEY).unwrap().unwrap();
        assert_eq!(raw, r#"[["cat","猫"],["dog","狗"]]"#);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn reopen_restores_list_and_title() {
        let mut store = WordListStore::open(MemoryStore::new()).unwrap();
        store.replace(pairs()).unwrap();
        store.set_title("Animals").unwrap();

        let reopened = WordListStore::open(store.backend().clone()).unwrap();
        assert_eq!(reopened.title(), "Animals");
        assert_eq!(reopened.words(), pairs().as_slice());
    }

    #[test]
    fn blank_title_falls_back_to_default() {
        let mut store = WordListStore::open(MemoryStore::new()).unwrap();
        store.set_title("Custom").unwrap();
        store.set_title("   ").unwrap();
        assert_eq!(store.title(), DEFAULT_TITLE);
        assert_eq!(
            store.backend().get(TITLE_KEY).unwrap().as_deref(),
            Some(DEFAULT_TITLE)
        );
    }

    #[test]
    fn replace_is_idempotent() {
        let mut store = WordListStore::open(MemoryStore::new()).unwrap();
        store.replace(pairs()).unwrap();
        let first = store.backend().get(WORD_LIST_KEY).unwrap();
        store.replace(pairs()).unwrap();
        assert_eq!(store.backend().get(WORD_LIST_KEY).unwrap(), first);
    }

    #[test]
    fn invalid_stored_list_is_ignored() {
        let mut backend = MemoryStore::new();
        backend.set(WORD_LIST_KEY, r#"[["cat", ""]]"#).unwrap();
        backend.set(TITLE_KEY, "Kept").unwrap();

        let store = WordListStore::open(backend).unwrap();
        assert_eq!(store.title(), "Kept");
        assert!(store.is_empty());
    }
}
