//! Word-list parsers
//!
//! Two pure entry points turn raw input into an ordered list of pairs:
//! - [`parse_text`] reads `N. front: back` lines, tolerating comments and
//!   counting malformed lines instead of failing on them.
//! - [`parse_tabular`] reads the first worksheet of an `.xlsx` workbook,
//!   taking column A as the front and column B as the back.

use crate::core::WordPair;
use calamine::{Data, Reader, Xlsx};
use regex::Regex;
use std::io::Cursor;
use std::sync::LazyLock;
use tracing::debug;

/// Human-readable form of the accepted text line format
pub const TEXT_FORMAT_HINT: &str = "lines like `1. active: 活跃的` (number optional, `:` or `：`)";

/// Human-readable form of the accepted spreadsheet layout
pub const TABULAR_FORMAT_HINT: &str = "column A holding the word and column B its translation";

/// Optional leading digits, optional separators, front, `:`/`：`, back
static LINE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d*[.\s、:：]*\s*(.+?)\s*[:：]\s*(.+)$").expect("line pattern is valid")
});

/// Error raised while reading a word list
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unsupported file format `{name}`: only .xlsx and .txt files can be imported")]
    UnsupportedFormat { name: String },

    #[error("no valid word pairs found; expected {expected}")]
    EmptyInput { expected: &'static str },

    #[error("could not read file: {0}")]
    ReadFailure(String),
}

/// Successful text parse: pairs in file order plus the number of rejected lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextImport {
    pub pairs: Vec<WordPair>,
    pub error_lines: usize,
}

/// Parse delimited text into word pairs
///
/// Blank lines and `#` comments are skipped. Every other line must look like
/// `[digits][separators] front : back`; lines that don't are counted in
/// `error_lines` and dropped.
///
/// # Errors
/// Returns `ParseError::EmptyInput` if no line yields a valid pair.
///
/// # Examples
/// ```
/// use word_elimination::wordlists::parse_text;
///
/// let parsed = parse_text("1. active：活跃的\n#comment\nbadline\n2. run : 跑").unwrap();
/// assert_eq!(parsed.pairs.len(), 2);
/// assert_eq!(parsed.error_lines, 1);
/// ```
pub fn parse_text(text: &str) -> Result<TextImport, ParseError> {
    let mut pairs = Vec::new();
    let mut error_lines = 0;

    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match parse_line(line) {
            Some(pair) => pairs.push(pair),
            None => {
                error_lines += 1;
                debug!(line = index + 1, content = line, "ignoring line in unexpected format");
            }
        }
    }

    if pairs.is_empty() {
        return Err(ParseError::EmptyInput {
            expected: TEXT_FORMAT_HINT,
        });
    }

    Ok(TextImport { pairs, error_lines })
}

/// Parse a single non-comment line
fn parse_line(line: &str) -> Option<WordPair> {
    let captures = LINE_PATTERN.captures(line)?;
    let front = captures.get(1)?.as_str();
    let back = captures.get(2)?.as_str();
    WordPair::new(front, back).ok()
}

/// Parse the first worksheet of an `.xlsx` workbook into word pairs
///
/// Rows without two non-blank leading cells are skipped silently.
///
/// # Errors
/// Returns `ParseError::ReadFailure` if the bytes are not a readable workbook,
/// or `ParseError::EmptyInput` if no row yields a valid pair.
pub fn parse_tabular(bytes: &[u8]) -> Result<Vec<WordPair>, ParseError> {
    let mut workbook = Xlsx::new(Cursor::new(bytes))
        .map_err(|e| ParseError::ReadFailure(format!("not a valid .xlsx workbook ({e})")))?;

    let range = match workbook.worksheet_range_at(0) {
        Some(Ok(range)) => range,
        Some(Err(e)) => {
            return Err(ParseError::ReadFailure(format!(
                "first worksheet is unreadable ({e})"
            )));
        }
        None => {
            return Err(ParseError::EmptyInput {
                expected: TABULAR_FORMAT_HINT,
            });
        }
    };

    let pairs = pairs_from_rows(range.rows().map(|row| row.iter().map(cell_text)));
    if pairs.is_empty() {
        return Err(ParseError::EmptyInput {
            expected: TABULAR_FORMAT_HINT,
        });
    }

    Ok(pairs)
}

fn cell_text(cell: &Data) -> String {
    cell.to_string()
}

/// Keep rows whose first two cells are both non-blank after trimming
pub(crate) fn pairs_from_rows<I, R, S>(rows: I) -> Vec<WordPair>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    rows.into_iter()
        .filter_map(|row| {
            let mut cells = row.into_iter();
            let front = cells.next()?;
            let back = cells.next()?;
            WordPair::new(front, back).ok()
        })
        .collect()
}

/// Render pairs in the text import format, one numbered line per pair
///
/// The output parses back to the same pairs with [`parse_text`].
#[must_use]
pub fn format_text(pairs: &[WordPair]) -> String {
    let mut output = String::new();
    for (i, pair) in pairs.iter().enumerate() {
        output.push_str(&format!("{}. {}: {}\n", i + 1, pair.front(), pair.back()));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(front: &str, back: &str) -> WordPair {
        WordPair::new(front, back).unwrap()
    }

    #[test]
    fn text_mixed_input() {
        let parsed = parse_text("1. active：活跃的\n#comment\nbadline\n2. run : 跑").unwrap();
        assert_eq!(parsed.pairs, vec![pair("active", "活跃的"), pair("run", "跑")]);
        assert_eq!(parsed.error_lines, 1);
    }

    #[test]
    fn text_handles_crlf_and_blank_lines() {
        let parsed = parse_text("1. cat: 猫\r\n\r\n   \r\n2. dog: 狗\r\n").unwrap();
        assert_eq!(parsed.pairs, vec![pair("cat", "猫"), pair("dog", "狗")]);
        assert_eq!(parsed.error_lines, 0);
    }

    #[test]
    fn text_number_is_optional() {
        let parsed = parse_text("apple: 苹果\n3、book：书").unwrap();
        assert_eq!(parsed.pairs, vec![pair("apple", "苹果"), pair("book", "书")]);
    }

    #[test]
    fn text_keeps_phrases_with_punctuation() {
        let parsed = parse_text("8. You have some moves, kid：你有两下子啊，孩子").unwrap();
        assert_eq!(
            parsed.pairs,
            vec![pair("You have some moves, kid", "你有两下子啊，孩子")]
        );
    }

    #[test]
    fn text_splits_on_first_colon() {
        let parsed = parse_text("1. time: 时间: 名词").unwrap();
        assert_eq!(parsed.pairs, vec![pair("time", "时间: 名词")]);
    }

    #[test]
    fn text_indented_comment_is_skipped() {
        let parsed = parse_text("   # not counted\n1. sun: 太阳").unwrap();
        assert_eq!(parsed.error_lines, 0);
        assert_eq!(parsed.pairs.len(), 1);
    }

    #[test]
    fn text_empty_back_counts_as_error() {
        let parsed = parse_text("1. lonely:   \n2. rain: 雨").unwrap();
        assert_eq!(parsed.pairs, vec![pair("rain", "雨")]);
        assert_eq!(parsed.error_lines, 1);
    }

    #[test]
    fn text_without_valid_lines_is_empty_input() {
        let err = parse_text("badline\n# comment\nanother bad line").unwrap_err();
        assert_eq!(
            err,
            ParseError::EmptyInput {
                expected: TEXT_FORMAT_HINT
            }
        );
        assert!(err.to_string().contains("1. active"));
    }

    #[test]
    fn text_empty_string_is_empty_input() {
        assert!(matches!(parse_text(""), Err(ParseError::EmptyInput { .. })));
    }

    #[test]
    fn exported_text_parses_back() {
        let pairs = vec![
            pair("active", "活跃的"),
            pair("see you tomorrow", "明天见"),
            pair("You have some moves, kid", "你有两下子啊，孩子"),
        ];
        let parsed = parse_text(&format_text(&pairs)).unwrap();
        assert_eq!(parsed.pairs, pairs);
        assert_eq!(parsed.error_lines, 0);
    }

    #[test]
    fn rows_keep_only_complete_pairs() {
        let rows: Vec<Vec<&str>> = vec![
            vec!["cat", "猫"],
            vec!["  dog ", " 狗 ", "ignored"],
            vec!["lonely"],
            vec!["   ", "空"],
            vec![],
            vec!["fish", ""],
        ];
        let pairs = pairs_from_rows(rows);
        assert_eq!(pairs, vec![pair("cat", "猫"), pair("dog", "狗")]);
    }

    /// Workbook bytes with one sheet per `(name, rows)`; `None` leaves a cell blank
    fn workbook(sheets: &[(&str, &[[Option<Cell>; 2]])]) -> Vec<u8> {
        let mut book = rust_xlsxwriter::Workbook::new();
        for (name, rows) in sheets {
            let sheet = book.add_worksheet();
            sheet.set_name(*name).unwrap();
            for (r, row) in rows.iter().enumerate() {
                for (c, cell) in row.iter().enumerate() {
                    match cell {
                        Some(Cell::Text(text)) => {
                            sheet.write_string(r as u32, c as u16, *text).unwrap();
                        }
                        Some(Cell::Number(n)) => {
                            sheet.write_number(r as u32, c as u16, *n).unwrap();
                        }
                        None => {}
                    }
                }
            }
        }
        book.save_to_buffer().unwrap()
    }

    #[derive(Clone, Copy)]
    enum Cell {
        Text(&'static str),
        Number(f64),
    }

    const fn t(text: &'static str) -> Option<Cell> {
        Some(Cell::Text(text))
    }

    #[test]
    fn tabular_reads_first_sheet_in_row_order() {
        let words: &[[Option<Cell>; 2]] = &[
            [t("cat"), t("猫")],
            [t("  dog "), t(" 狗 ")],
            [None, None],
            [t("lonely"), None],
            [Some(Cell::Number(42.0)), t("四十二")],
            [None, t("孤儿")],
            [t("sun"), t("太阳")],
        ];
        let decoy: &[[Option<Cell>; 2]] = &[[t("moon"), t("月亮")]];
        let bytes = workbook(&[("Words", words), ("Decoy", decoy)]);

        let pairs = parse_tabular(&bytes).unwrap();
        assert_eq!(
            pairs,
            vec![
                pair("cat", "猫"),
                pair("dog", "狗"),
                pair("42", "四十二"),
                pair("sun", "太阳"),
            ]
        );
        assert!(pairs.iter().all(|p| p.front() != "moon"));
    }

    #[test]
    fn tabular_without_complete_rows_is_empty_input() {
        let rows: &[[Option<Cell>; 2]] = &[[t("only"), None], [t("fronts"), None]];
        let bytes = workbook(&[("Words", rows)]);
        assert_eq!(
            parse_tabular(&bytes),
            Err(ParseError::EmptyInput {
                expected: TABULAR_FORMAT_HINT
            })
        );
    }

    #[test]
    fn tabular_ignores_pairs_outside_first_sheet() {
        let empty: &[[Option<Cell>; 2]] = &[];
        let decoy: &[[Option<Cell>; 2]] = &[[t("moon"), t("月亮")]];
        let bytes = workbook(&[("Empty", empty), ("Decoy", decoy)]);
        assert!(matches!(
            parse_tabular(&bytes),
            Err(ParseError::EmptyInput { .. })
        ));
    }

    #[test]
    fn tabular_rejects_garbage_bytes() {
        let result = parse_tabular(b"definitely not a zip archive");
        assert!(matches!(result, Err(ParseError::ReadFailure(_))));
    }
}
