use std::fmt;

use crate::error::{TokenError, past_end_of_line};
use crate::kind::TokenKind;

/// Remove one trailing `\n` or `\r\n` from a line.
#[must_use]
pub fn strip_line_terminator(line: &str) -> &str {
    line.strip_suffix("\r\n")
        .or_else(|| line.strip_suffix('\n'))
        .unwrap_or(line)
}

/// Token emitted where a lexical rule fails.
///
/// Holds the whole source line so the failure can be shown in context.
/// The column counts `char`s from the start of the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorToken {
    column: usize,
    line_text: String,
    message: String,
}

impl ErrorToken {
    pub const KIND: TokenKind = TokenKind::Error;

    /// Build an error token pointing at `column` of `line_text`.
    ///
    /// `column` may equal the line length, for errors at end of line.
    pub fn new(
        column: usize,
        line_text: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<Self, TokenError> {
        let line_text = line_text.into();
        let line_len = line_text.chars().count();
        if column > line_len {
            return Err(past_end_of_line(column, line_len));
        }
        Ok(Self {
            column,
            line_text,
            message: message.into(),
        })
    }

    #[must_use]
    pub const fn column(&self) -> usize {
        self.column
    }

    /// Source line exactly as given, terminator included.
    #[must_use]
    pub fn line_text(&self) -> &str {
        &self.line_text
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Source line without its trailing line terminator.
    #[must_use]
    pub fn text(&self) -> &str {
        strip_line_terminator(&self.line_text)
    }

    /// `column` spaces followed by `^`.
    #[must_use]
    pub fn caret_line(&self) -> String {
        let mut caret = " ".repeat(self.column);
        caret.push('^');
        caret
    }

    /// Three-line report: position and message, the line, then a caret
    /// under the offending column.
    ///
    /// ```text
    /// pos:5 unexpected '='
    /// foo = bar
    ///      ^
    /// ```
    #[must_use]
    pub fn report(&self) -> String {
        format!(
            "pos:{} {}\n{}\n{}",
            self.column,
            self.message,
            self.text(),
            self.caret_line()
        )
    }
}

impl fmt::Display for ErrorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.report())
    }
}
