use std::fmt;

use tagtree_util::FsError;
use thiserror::Error;

/// What went wrong at a given position of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    UnterminatedString,
    UnmatchedBrace,
    UnmatchedBracket,
    InvalidLiteral,
    InvalidNumber,
    InvalidEscape,
    MissingValue,
    ExpectedKey,
    MissingColon,
    DepthExceeded,
    TrailingCharacters,
}

impl ParseErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ParseErrorKind::UnterminatedString => "unterminated string",
            ParseErrorKind::UnmatchedBrace => "unmatched brace",
            ParseErrorKind::UnmatchedBracket => "unmatched bracket",
            ParseErrorKind::InvalidLiteral => "invalid literal",
            ParseErrorKind::InvalidNumber => "invalid number",
            ParseErrorKind::InvalidEscape => "invalid escape sequence",
            ParseErrorKind::MissingValue => "missing value",
            ParseErrorKind::ExpectedKey => "expected string key",
            ParseErrorKind::MissingColon => "missing colon after key",
            ParseErrorKind::DepthExceeded => "nesting too deep",
            ParseErrorKind::TrailingCharacters => "trailing characters",
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recoverable problem found while reading.
///
/// `offset` is a byte offset; `line` and `column` are 1-based, with the column
/// counted in bytes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at line {line}, column {column}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl ParseError {
    /// Locates `offset` within `data`.
    pub(crate) fn at(kind: ParseErrorKind, data: &[u8], offset: usize) -> Self {
        let offset = offset.min(data.len());
        let before = &data[..offset];
        let line = before.iter().filter(|&&b| b == b'\n').count() + 1;
        let line_start = before
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(0, |p| p + 1);
        Self {
            kind,
            offset,
            line,
            column: offset - line_start + 1,
        }
    }
}

#[derive(Debug, Error)]
pub enum JsonError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Io(#[from] FsError),
}
