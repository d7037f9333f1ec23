use std::fmt;

/// How a token kind produces its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Form {
    /// Text is the same for every token of the kind.
    Fixed(&'static str),
    /// Text is captured from the source line.
    Captured,
    /// Text is the offending source line.
    Error,
}

/// Token kinds produced by the Silk lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Document preamble `%silk`.
    Preamble,
    /// Node marker `-`.
    NodeIndent,
    /// Function marker `@`.
    FunctionIndent,
    /// Here-document separator `--`.
    HereDocSeparator,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `?`
    Question,
    /// `*`
    Star,
    /// `+`
    Plus,
    /// `.`
    Dot,
    /// Column separator `|`.
    Separator,
    /// Column separator `\t`.
    Tab,
    /// End of line.
    LineBreak,
    /// Leading spaces of a line.
    Indent,
    /// Qualified name.
    Name,
    /// Double-quoted string, quotes excluded.
    StringLiteral,
    /// Unquoted value text.
    PlainText,
    /// Comment (`# ...`).
    LineComment,
    /// Raw data row.
    DataLine,
    /// Lexical error.
    Error,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 24] = [
        Self::Preamble,
        Self::NodeIndent,
        Self::FunctionIndent,
        Self::HereDocSeparator,
        Self::Colon,
        Self::Comma,
        Self::LParen,
        Self::RParen,
        Self::LBracket,
        Self::RBracket,
        Self::Question,
        Self::Star,
        Self::Plus,
        Self::Dot,
        Self::Separator,
        Self::Tab,
        Self::LineBreak,
        Self::Indent,
        Self::Name,
        Self::StringLiteral,
        Self::PlainText,
        Self::LineComment,
        Self::DataLine,
        Self::Error,
    ];

    #[must_use]
    pub const fn form(self) -> Form {
        match self {
            Self::Preamble => Form::Fixed("%silk"),
            Self::NodeIndent => Form::Fixed("-"),
            Self::FunctionIndent => Form::Fixed("@"),
            Self::HereDocSeparator => Form::Fixed("--"),
            Self::Colon => Form::Fixed(":"),
            Self::Comma => Form::Fixed(","),
            Self::LParen => Form::Fixed("("),
            Self::RParen => Form::Fixed(")"),
            Self::LBracket => Form::Fixed("["),
            Self::RBracket => Form::Fixed("]"),
            Self::Question => Form::Fixed("?"),
            Self::Star => Form::Fixed("*"),
            Self::Plus => Form::Fixed("+"),
            Self::Dot => Form::Fixed("."),
            Self::Separator => Form::Fixed("|"),
            Self::Tab => Form::Fixed("\t"),
            Self::LineBreak => Form::Fixed("\n"),
            Self::Indent
            | Self::Name
            | Self::StringLiteral
            | Self::PlainText
            | Self::LineComment
            | Self::DataLine => Form::Captured,
            Self::Error => Form::Error,
        }
    }

    /// Raw text shared by every token of a fixed-form kind.
    ///
    /// `None` for kinds whose tokens carry their own text.
    #[must_use]
    pub const fn canonical_text(self) -> Option<&'static str> {
        match self.form() {
            Form::Fixed(text) => Some(text),
            Form::Captured | Form::Error => None,
        }
    }

    #[must_use]
    pub const fn is_fixed(self) -> bool {
        matches!(self.form(), Form::Fixed(_))
    }

    #[must_use]
    pub const fn is_captured(self) -> bool {
        matches!(self.form(), Form::Captured)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Preamble => "Preamble",
            Self::NodeIndent => "NodeIndent",
            Self::FunctionIndent => "FunctionIndent",
            Self::HereDocSeparator => "HereDocSeparator",
            Self::Colon => "Colon",
            Self::Comma => "Comma",
            Self::LParen => "LParen",
            Self::RParen => "RParen",
            Self::LBracket => "LBracket",
            Self::RBracket => "RBracket",
            Self::Question => "Question",
            Self::Star => "Star",
            Self::Plus => "Plus",
            Self::Dot => "Dot",
            Self::Separator => "Separator",
            Self::Tab => "Tab",
            Self::LineBreak => "LineBreak",
            Self::Indent => "Indent",
            Self::Name => "Name",
            Self::StringLiteral => "StringLiteral",
            Self::PlainText => "PlainText",
            Self::LineComment => "LineComment",
            Self::DataLine => "DataLine",
            Self::Error => "Error",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
