//! Line-numbered parser errors

use crate::values::ValueError;
use core::fmt;
use thiserror::Error;

/// Category of a parser failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    UnknownError,
    /// Section name outside the known and pass-through sets
    UnknownSection,
    /// Top-level line that is not a `[Section]` header
    InvalidSection,
    /// Required section never seen; reported at line 0
    MissingSection,
    /// Styles or events section not opened by a `Format:` line
    MissingFormatLine,
    InvalidStyleLine,
    /// Bad event line, or bad script info line
    InvalidEventLine,
}

impl ParseErrorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UnknownError => "UnknownError",
            Self::UnknownSection => "UnknownSection",
            Self::InvalidSection => "InvalidSection",
            Self::MissingSection => "MissingSection",
            Self::MissingFormatLine => "MissingFormatLine",
            Self::InvalidStyleLine => "InvalidStyleLine",
            Self::InvalidEventLine => "InvalidEventLine",
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecoverable parser failure with its 1-based source line
///
/// Line 0 is reserved for document-level failures such as a missing section.
/// The message quotes the offending text for humans; match on
/// [`ParseError::kind`] instead of parsing it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("[{line}] {kind}: {message}")]
pub struct ParseError {
    pub line: usize,
    pub kind: ParseErrorKind,
    pub message: String,
    #[source]
    pub source: Option<ValueError>,
}

impl ParseError {
    pub fn new(line: usize, kind: ParseErrorKind, message: impl Into<String>) -> Self {
        Self {
            line,
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Wrap a field coercion failure with line context
    pub fn from_value(line: usize, kind: ParseErrorKind, text: &str, error: ValueError) -> Self {
        Self {
            line,
            kind,
            message: format!("{error} in '{text}'"),
            source: Some(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_line_and_kind() {
        let error = ParseError::new(14, ParseErrorKind::InvalidStyleLine, "bad 'Style: x'");
        assert_eq!(error.to_string(), "[14] InvalidStyleLine: bad 'Style: x'");
    }

    #[test]
    fn value_errors_are_chained() {
        use std::error::Error as _;

        let error = ParseError::from_value(
            3,
            ParseErrorKind::InvalidEventLine,
            "Dialogue: x",
            ValueError::InvalidTime("x".to_owned()),
        );
        assert_eq!(error.kind, ParseErrorKind::InvalidEventLine);
        assert!(error.source().is_some());
        assert!(error.message.contains("Dialogue: x"));
    }
}
