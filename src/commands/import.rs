//! Import command
//!
//! Imports a word list file into the persisted store.

use crate::game::{ImportError, Session};
use crate::store::KeyValueStore;
use crate::wordlists::{ImportedList, ParseError, SourceFile};
use rand::Rng;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Result of importing a file
pub struct ImportReport {
    pub file: String,
    pub imported: ImportedList,
    pub ignored_files: usize,
}

/// Import the first of `paths` into the session's word list
///
/// Like a multi-file drop, only the first file is processed; the rest are
/// counted in `ignored_files`.
///
/// # Errors
///
/// Returns an error if no path was given, the file cannot be read, its format
/// is unsupported, it holds no valid pairs, or the list cannot be saved.
pub fn import_paths<S: KeyValueStore, R: Rng>(
    session: &mut Session<S, R>,
    paths: &[PathBuf],
) -> Result<ImportReport, ImportError> {
    let (first, rest) = paths.split_first().ok_or_else(|| {
        ImportError::Parse(ParseError::ReadFailure("no file given".to_string()))
    })?;
    if !rest.is_empty() {
        warn!(ignored = rest.len(), "only the first file is imported");
    }

    let file = read_source(first)?;
    let imported = session.import(&file)?;
    Ok(ImportReport {
        file: file.name().to_string(),
        imported,
        ignored_files: rest.len(),
    })
}

fn read_source(path: &Path) -> Result<SourceFile, ImportError> {
    SourceFile::read(path).map_err(|e| {
        ImportError::Parse(ParseError::ReadFailure(format!(
            "{}: {e}",
            path.display()
        )))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PairCount;
    use crate::store::{MemoryStore, WordListStore};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::fs;

    fn session() -> Session<MemoryStore, StdRng> {
        let store = WordListStore::open(MemoryStore::new()).unwrap();
        Session::with_rng(store, PairCount::default(), StdRng::seed_from_u64(5))
    }

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "word_elimination_import_{}_{}",
            std::process::id(),
            rand::random::<u32>()
        ));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn imports_only_the_first_file() {
        let first = temp_file("first.txt", "1. cat: 猫\n2. dog: 狗");
        let second = temp_file("second.txt", "1. sun: 太阳");
        let mut session = session();

        let report = import_paths(&mut session, &[first, second]).unwrap();
        assert_eq!(report.file, "first.txt");
        assert_eq!(report.ignored_files, 1);
        assert_eq!(session.word_count(), 2);
        assert!(session.words().iter().all(|p| p.front() != "sun"));
    }

    #[test]
    fn missing_file_is_read_failure() {
        let mut session = session();
        let result = import_paths(&mut session, &[PathBuf::from("/nonexistent/words.txt")]);
        assert!(matches!(
            result,
            Err(ImportError::Parse(ParseError::ReadFailure(_)))
        ));
        assert_eq!(session.word_count(), 0);
    }

    #[test]
    fn no_paths_is_an_error() {
        let mut session = session();
        assert!(import_paths(&mut session, &[]).is_err());
    }
}
