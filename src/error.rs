use std::fmt;

use crate::kind::TokenKind;

/// Why a column was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionErrorKind {
    /// Offset below zero.
    Negative,
    /// Offset past the end of the line text.
    PastEndOfLine { line_len: usize },
}

impl fmt::Display for PositionErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negative => write!(f, "column must not be negative"),
            Self::PastEndOfLine { line_len } => {
                write!(f, "column exceeds line length {line_len}")
            }
        }
    }
}

/// A token could not be built from the values the scanner supplied.
///
/// These are defects in the scanner, not lexical errors in the input.
/// Lexical errors travel through the token stream as
/// [`ErrorToken`](crate::ErrorToken) values instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    /// Column outside the range allowed for the token.
    #[error("invalid position {column}: {kind}")]
    InvalidPosition { column: i64, kind: PositionErrorKind },
    /// Kind does not belong to the requested token variant.
    #[error("{kind} cannot be built as a {expected} token")]
    WrongForm {
        kind: TokenKind,
        expected: &'static str,
    },
}

/// Convert a signed offset computed by a scanner into a column.
pub fn column_from_offset(offset: i64) -> Result<usize, TokenError> {
    usize::try_from(offset).map_err(|_| TokenError::InvalidPosition {
        column: offset,
        kind: PositionErrorKind::Negative,
    })
}

pub(crate) fn past_end_of_line(column: usize, line_len: usize) -> TokenError {
    TokenError::InvalidPosition {
        column: i64::try_from(column).unwrap_or(i64::MAX),
        kind: PositionErrorKind::PastEndOfLine { line_len },
    }
}
