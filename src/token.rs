use std::fmt;

use crate::error::TokenError;
use crate::error_token::ErrorToken;
use crate::kind::TokenKind;

/// Token of a fixed-form kind such as `:` or `(`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolToken {
    kind: TokenKind,
    column: usize,
}

impl SymbolToken {
    pub const fn new(kind: TokenKind, column: usize) -> Result<Self, TokenError> {
        if !kind.is_fixed() {
            return Err(TokenError::WrongForm {
                kind,
                expected: Self::VARIANT,
            });
        }
        Ok(Self { kind, column })
    }

    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        self.kind
    }

    #[must_use]
    pub const fn column(&self) -> usize {
        self.column
    }

    /// Canonical text of the kind.
    #[must_use]
    pub fn text(&self) -> &'static str {
        self.kind.canonical_text().unwrap_or_default()
    }
}

/// Token carrying the text it matched, such as a name or a quoted string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextToken {
    kind: TokenKind,
    text: String,
    column: usize,
}

impl TextToken {
    pub fn new(
        kind: TokenKind,
        text: impl Into<String>,
        column: usize,
    ) -> Result<Self, TokenError> {
        if !kind.is_captured() {
            return Err(TokenError::WrongForm {
                kind,
                expected: Self::VARIANT,
            });
        }
        Ok(Self {
            kind,
            text: text.into(),
            column,
        })
    }

    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        self.kind
    }

    #[must_use]
    pub const fn column(&self) -> usize {
        self.column
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// A single token with its kind, column, and text.
///
/// The variant always agrees with the kind: fixed-form kinds are
/// `Symbol`, captured kinds are `Text`, and [`TokenKind::Error`] is
/// `Error`. The constructors reject any other pairing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Symbol(SymbolToken),
    Text(TextToken),
    Error(ErrorToken),
}

impl Token {
    /// Build a token of a fixed-form kind at `column`.
    pub const fn new(kind: TokenKind, column: usize) -> Result<Self, TokenError> {
        Self::symbol(kind, column)
    }

    pub const fn symbol(kind: TokenKind, column: usize) -> Result<Self, TokenError> {
        match SymbolToken::new(kind, column) {
            Ok(token) => Ok(Self::Symbol(token)),
            Err(e) => Err(e),
        }
    }

    pub fn captured(
        kind: TokenKind,
        text: impl Into<String>,
        column: usize,
    ) -> Result<Self, TokenError> {
        TextToken::new(kind, text, column).map(Self::Text)
    }

    pub fn error(
        column: usize,
        line_text: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<Self, TokenError> {
        ErrorToken::new(column, line_text, message).map(Self::Error)
    }

    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Symbol(t) => t.kind(),
            Self::Text(t) => t.kind(),
            Self::Error(_) => ErrorToken::KIND,
        }
    }

    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::Symbol(t) => t.column(),
            Self::Text(t) => t.column(),
            Self::Error(t) => t.column(),
        }
    }

    /// Raw text of the token.
    ///
    /// Canonical text for fixed-form kinds, the captured text for
    /// captured kinds, and the line without its terminator for errors.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Symbol(t) => t.text(),
            Self::Text(t) => t.text(),
            Self::Error(t) => t.text(),
        }
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    #[must_use]
    pub const fn as_error(&self) -> Option<&ErrorToken> {
        match self {
            Self::Error(t) => Some(t),
            Self::Symbol(_) | Self::Text(_) => None,
        }
    }

    /// View the token as variant `T`, or `None` if it holds another one.
    #[must_use]
    pub fn try_narrow<T: TokenVariant>(&self) -> Option<&T> {
        T::from_token(self)
    }

    /// View the token as variant `T`.
    ///
    /// # Panics
    ///
    /// Panics if the token holds another variant. The scanner and the
    /// parser then disagree about the token's kind, which is a bug in
    /// one of them.
    #[must_use]
    pub fn narrow<T: TokenVariant>(&self) -> &T {
        match T::from_token(self) {
            Some(variant) => variant,
            None => panic!(
                "expected {} token, found {} at column {}",
                T::VARIANT,
                self.kind(),
                self.column()
            ),
        }
    }

    /// One-line description: `pos:<column> [<kind>] <text>`.
    #[must_use]
    pub fn render(&self) -> String {
        format!("pos:{:>2} [{}] {}", self.column(), self.kind(), self.text())
    }
}

/// A concrete token variant that [`Token::narrow`] can produce.
pub trait TokenVariant {
    /// Variant name used in mismatch messages.
    const VARIANT: &'static str;

    fn from_token(token: &Token) -> Option<&Self>;
}

impl TokenVariant for SymbolToken {
    const VARIANT: &'static str = "symbol";

    fn from_token(token: &Token) -> Option<&Self> {
        match token {
            Token::Symbol(t) => Some(t),
            Token::Text(_) | Token::Error(_) => None,
        }
    }
}

impl TokenVariant for TextToken {
    const VARIANT: &'static str = "text";

    fn from_token(token: &Token) -> Option<&Self> {
        match token {
            Token::Text(t) => Some(t),
            Token::Symbol(_) | Token::Error(_) => None,
        }
    }
}

impl TokenVariant for ErrorToken {
    const VARIANT: &'static str = "error";

    fn from_token(token: &Token) -> Option<&Self> {
        token.as_error()
    }
}

impl From<SymbolToken> for Token {
    fn from(token: SymbolToken) -> Self {
        Self::Symbol(token)
    }
}

impl From<TextToken> for Token {
    fn from(token: TextToken) -> Self {
        Self::Text(token)
    }
}

impl From<ErrorToken> for Token {
    fn from(token: ErrorToken) -> Self {
        Self::Error(token)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
