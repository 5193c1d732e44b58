//! Word list import boundary
//!
//! Resolves the file format from the file name once, then routes the bytes to
//! the matching pure parser.

use super::parser::{ParseError, parse_tabular, parse_text};
use crate::core::WordPair;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Input format, chosen by (case-insensitive) file name suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Tabular,
    Text,
    Unsupported,
}

impl FileFormat {
    /// Resolve the format from a file name
    ///
    /// # Examples
    /// ```
    /// use word_elimination::wordlists::loader::FileFormat;
    ///
    /// assert_eq!(FileFormat::from_name("Words.XLSX"), FileFormat::Tabular);
    /// assert_eq!(FileFormat::from_name("list.txt"), FileFormat::Text);
    /// assert_eq!(FileFormat::from_name("list.csv"), FileFormat::Unsupported);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        let name = name.to_lowercase();
        if name.ends_with(".xlsx") {
            Self::Tabular
        } else if name.ends_with(".txt") {
            Self::Text
        } else {
            Self::Unsupported
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tabular => write!(f, "Excel"),
            Self::Text => write!(f, "TXT"),
            Self::Unsupported => write!(f, "unsupported"),
        }
    }
}

/// A user-supplied file: its name and raw content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    name: String,
    bytes: Vec<u8>,
}

impl SourceFile {
    #[must_use]
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// Read a file from disk, keeping only its file name
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read or opened.
    pub fn read<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
        Ok(Self { name, bytes })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[must_use]
    pub fn format(&self) -> FileFormat {
        FileFormat::from_name(&self.name)
    }
}

/// A successfully parsed word list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedList {
    pub format: FileFormat,
    pub pairs: Vec<WordPair>,
    /// Text lines dropped for not matching the line format (always 0 for tabular)
    pub skipped_lines: usize,
}

impl ImportedList {
    /// User-facing success message, including the non-blocking warning
    #[must_use]
    pub fn summary(&self) -> String {
        let mut msg = format!("{} import succeeded: {} pairs", self.format, self.pairs.len());
        if self.skipped_lines > 0 {
            msg.push_str(&format!(
                " ({} lines ignored for not matching the format)",
                self.skipped_lines
            ));
        }
        msg
    }
}

/// Parse a user-supplied file according to its suffix
///
/// # Errors
/// Returns `ParseError::UnsupportedFormat` for suffixes other than `.xlsx`
/// and `.txt`, `ParseError::ReadFailure` when the content cannot be decoded,
/// or `ParseError::EmptyInput` when no valid pair is found.
pub fn parse_file(file: &SourceFile) -> Result<ImportedList, ParseError> {
    let format = file.format();
    match format {
        FileFormat::Tabular => {
            let pairs = parse_tabular(file.bytes())?;
            Ok(ImportedList {
                format,
                pairs,
                skipped_lines: 0,
            })
        }
        FileFormat::Text => {
            let text = decode_text(file.bytes())?;
            let parsed = parse_text(text)?;
            Ok(ImportedList {
                format,
                pairs: parsed.pairs,
                skipped_lines: parsed.error_lines,
            })
        }
        FileFormat::Unsupported => Err(ParseError::UnsupportedFormat {
            name: file.name().to_string(),
        }),
    }
}

fn decode_text(bytes: &[u8]) -> Result<&str, ParseError> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| ParseError::ReadFailure(format!("text is not valid UTF-8 ({e})")))?;
    Ok(text.strip_prefix('\u{feff}').unwrap_or(text))
}
