//! Word lists: parsing, import and the embedded sample
//!
//! Provides the text and spreadsheet parsers, the file import boundary and a
//! sample list compiled into the binary.

mod embedded;
pub mod loader;
mod parser;

pub use embedded::{SAMPLE_LINES, SAMPLE_LINES_COUNT};
pub use loader::{FileFormat, ImportedList, SourceFile, parse_file};
pub use parser::{
    ParseError, TABULAR_FORMAT_HINT, TEXT_FORMAT_HINT, TextImport, format_text, parse_tabular,
    parse_text,
};

use crate::core::WordPair;

/// Parse the embedded sample list
///
/// Returns an empty list if the embedded data somehow holds no valid line.
#[must_use]
pub fn sample_pairs() -> Vec<WordPair> {
    parse_text(&SAMPLE_LINES.join("\n")).map_or_else(|_| Vec::new(), |parsed| parsed.pairs)
}
