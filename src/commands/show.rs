//! List inspection and export commands

use crate::core::{PairCount, WordPair};
use crate::store::{KeyValueStore, WordListStore};
use crate::wordlists::format_text;
use std::fs;
use std::io;
use std::path::Path;

/// Overview of the persisted list
pub struct ListSummary {
    pub title: String,
    pub pairs: Vec<WordPair>,
    pub pair_count: PairCount,
    pub rounds: usize,
}

/// Summarize the stored list for a given round size
#[must_use]
pub fn summarize<S: KeyValueStore>(store: &WordListStore<S>, pair_count: PairCount) -> ListSummary {
    ListSummary {
        title: store.title().to_string(),
        pairs: store.words().to_vec(),
        pair_count,
        rounds: store.len().div_ceil(pair_count.get()),
    }
}

/// Write the stored list to `path` in the text import format
///
/// Returns the number of pairs written.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be written.
pub fn export_list<P: AsRef<Path>>(pairs: &[WordPair], path: P) -> io::Result<usize> {
    fs::write(path, format_text(pairs))?;
    Ok(pairs.len())
}
